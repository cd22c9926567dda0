//! Test utilities and fixture growth policies for Elastic development.
//!
//! Provides instrumented [`GrowthPolicy`](elastic_core::GrowthPolicy)
//! implementations for driving growth in tests, and [`init_tracing`] for
//! seeing the vector's `tracing` events in test output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{sequence, AdditivePolicy, ConstantPolicy, CountingPolicy};

use tracing_subscriber::EnvFilter;

/// Install a test-writer `fmt` subscriber filtered by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

//! Core types and traits for the Elastic growable vector.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by the rest of the workspace: buffer
//! identities, the growth policy strategy, and the error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod policy;

pub use error::VecError;
pub use id::BufferId;
pub use policy::{Doubling, GrowthPolicy};

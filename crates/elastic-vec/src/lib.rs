//! Growable vector with a pluggable growth policy and generation-checked cursors.
//!
//! # Architecture
//!
//! ```text
//! ElasticVec<T, P> (storage core)
//! ├── Buffer<T> (Box<[T]>, tagged with a BufferId, replaced on growth)
//! ├── len (live prefix of the buffer)
//! └── P: GrowthPolicy (capacity -> next capacity, called only when full)
//!
//! Cursor (position + BufferId, borrows nothing)
//! └── resolved against an ElasticVec, checked for staleness in O(1)
//! ```
//!
//! # Cursor validity
//!
//! Growth allocates a new buffer with a new [`BufferId`](elastic_core::BufferId).
//! Cursors made before the growth fail with
//! [`VecError::StaleCursor`](elastic_core::VecError::StaleCursor) instead of
//! reading the discarded buffer. Inserts and removes shift elements in place
//! without changing the buffer, so cursors survive them and simply see
//! whatever now lives at their position.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod buffer;
pub mod config;
pub mod cursor;
pub mod iter;
pub mod vector;

// Public re-exports for the primary API surface.
pub use config::VecConfig;
pub use cursor::Cursor;
pub use elastic_core::{BufferId, Doubling, GrowthPolicy, VecError};
pub use iter::Iter;
pub use vector::ElasticVec;

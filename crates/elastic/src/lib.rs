//! Elastic: a growable vector with a pluggable growth policy and
//! generation-checked bidirectional cursors.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Elastic sub-crates. For most users, adding `elastic` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use elastic::prelude::*;
//!
//! let mut v = ElasticVec::from_values([1, 2, 3]).unwrap();
//! v.insert(1, 9).unwrap();
//! assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
//!
//! // Walk with a begin/end cursor pair.
//! let mut seen = Vec::new();
//! let mut c = v.begin();
//! while c != v.end() {
//!     seen.push(*v.resolve(&c).unwrap());
//!     c.advance();
//! }
//! assert_eq!(seen, vec![1, 9, 2, 3]);
//!
//! // Custom growth: any `Fn(usize) -> usize` works.
//! let mut slow = ElasticVec::with_policy(|cap: usize| cap + 1);
//! for i in 0..11 {
//!     slow.push(i).unwrap();
//! }
//! assert_eq!(slow.capacity(), 11);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `elastic-core` | `VecError`, `BufferId`, `GrowthPolicy`, `Doubling` |
//! | [`vec`] | `elastic-vec` | `ElasticVec`, `Cursor`, `Iter`, `VecConfig`, `Buffer` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`elastic-core`).
///
/// Contains the error type, buffer identities, and the
/// [`types::GrowthPolicy`] strategy trait.
pub use elastic_core as types;

/// The vector, its cursors, and configuration (`elastic-vec`).
pub use elastic_vec as vec;

/// Common imports for typical Elastic usage.
///
/// ```rust
/// use elastic::prelude::*;
/// ```
pub mod prelude {
    pub use elastic_core::{BufferId, Doubling, GrowthPolicy, VecError};
    pub use elastic_vec::{Cursor, ElasticVec, Iter, VecConfig};
}

//! Error types for the Elastic vector.
//!
//! Index validation is the only failure the container reports by
//! contract. The remaining variants cover cursor resolution, growth
//! policies that fail to make room, and invalid configuration.

use thiserror::Error;

use crate::id::BufferId;

/// Errors returned by vector and cursor operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum VecError {
    /// An index-taking operation received an index outside its valid bound.
    ///
    /// The bound is `len` inclusive for inserts and `len` exclusive for
    /// element access, removal, and cursor resolution.
    #[error("index {index} out of range for length {len}")]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A cursor created against a buffer that has since been reallocated,
    /// or against a different container.
    #[error("stale cursor: created for buffer {cursor}, current buffer is {current}")]
    StaleCursor {
        /// The buffer the cursor was created against.
        cursor: BufferId,
        /// The container's current buffer.
        current: BufferId,
    },
    /// A default-constructed or moved-from cursor that refers to no buffer.
    #[error("cursor is not attached to any buffer")]
    DetachedCursor,
    /// The growth policy did not produce a capacity larger than the current one.
    #[error("growth policy stalled: capacity {current} -> {proposed}")]
    GrowthStalled {
        /// Capacity before growth was attempted.
        current: usize,
        /// Capacity returned by the policy.
        proposed: usize,
    },
    /// A configuration value failed validation.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// What was wrong with the configuration.
        reason: String,
    },
}

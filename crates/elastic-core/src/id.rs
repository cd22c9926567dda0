//! Buffer identities.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`BufferId`] allocation.
static BUFFER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-allocation identifier for a vector's backing buffer.
///
/// Allocated from a monotonic atomic counter via [`BufferId::next`].
/// Every buffer allocation gets a fresh ID: constructing a vector,
/// cloning one, and every growth event. A cursor records the ID of the
/// buffer it was created against, so a mismatch at resolve time means
/// the buffer was reallocated (or belongs to another vector).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BufferId(u64);

impl BufferId {
    /// Allocate a fresh, unique buffer ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(BUFFER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw counter value.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BufferId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

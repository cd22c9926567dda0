//! Reusable growth policy fixtures.
//!
//! - [`CountingPolicy`] — wraps another policy and counts invocations.
//! - [`ConstantPolicy`] — always returns the same capacity (stalls once full).
//! - [`AdditivePolicy`] — grows by a fixed step.

use std::cell::Cell;
use std::rc::Rc;

use elastic_core::GrowthPolicy;

/// Delegates to `inner` and records how often it was asked.
///
/// Clones share the counter, so a test can keep one clone and hand the
/// other to the vector under test.
#[derive(Clone, Debug)]
pub struct CountingPolicy<P> {
    inner: P,
    calls: Rc<Cell<usize>>,
}

impl<P> CountingPolicy<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Number of `next_capacity` calls across all clones.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl<P: GrowthPolicy> GrowthPolicy for CountingPolicy<P> {
    fn next_capacity(&self, current: usize) -> usize {
        self.calls.set(self.calls.get() + 1);
        self.inner.next_capacity(current)
    }
}

/// Returns the wrapped capacity regardless of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ConstantPolicy(pub usize);

impl GrowthPolicy for ConstantPolicy {
    fn next_capacity(&self, _current: usize) -> usize {
        self.0
    }
}

/// Grows by a fixed number of slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdditivePolicy(pub usize);

impl GrowthPolicy for AdditivePolicy {
    fn next_capacity(&self, current: usize) -> usize {
        current.saturating_add(self.0)
    }
}

/// `0..n` as `u64`, for filling vectors in tests and benches.
pub fn sequence(n: usize) -> impl Iterator<Item = u64> {
    0..n as u64
}

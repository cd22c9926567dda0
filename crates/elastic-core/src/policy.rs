//! Growth policy strategy.
//!
//! A [`GrowthPolicy`] maps the current capacity of a full buffer to the
//! capacity of its replacement. Any `Fn(usize) -> usize` closure is a
//! policy, so callers can inject their own without defining a type.

/// Strategy for computing the next buffer capacity.
///
/// Invoked only when the buffer is full and a new element must be
/// admitted, and once at construction when the requested initial length
/// exceeds the default capacity. Implementations must be side-effect
/// free from the container's point of view and should return a value
/// strictly greater than `current`.
pub trait GrowthPolicy {
    /// Capacity to allocate when a buffer of `current` slots is full.
    fn next_capacity(&self, current: usize) -> usize;
}

impl<F> GrowthPolicy for F
where
    F: Fn(usize) -> usize,
{
    fn next_capacity(&self, current: usize) -> usize {
        self(current)
    }
}

/// Default policy: double the capacity, saturating at `usize::MAX`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    fn next_capacity(&self, current: usize) -> usize {
        current.saturating_mul(2)
    }
}

//! Vector configuration parameters.

use elastic_core::VecError;

/// Configuration for an [`ElasticVec`](crate::ElasticVec).
///
/// Controls the size of the first buffer and how a misbehaving growth
/// policy is handled. Validated at construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VecConfig {
    /// Capacity of the buffer allocated at construction, in elements.
    ///
    /// Default: 10. Must be at least 1, otherwise a multiplicative
    /// policy can never grow the buffer.
    pub initial_capacity: usize,

    /// Reject growth policies that do not strictly increase capacity.
    ///
    /// When `true` (default), a stalled policy surfaces as
    /// [`VecError::GrowthStalled`] from the push or insert that needed room.
    /// When `false`, the vector grows by exactly one slot instead and
    /// logs a warning.
    pub strict_growth: bool,
}

impl VecConfig {
    /// Default capacity of a freshly constructed vector.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

    /// Default stalled-policy handling.
    pub const DEFAULT_STRICT_GROWTH: bool = true;

    /// Create a config with the default values.
    pub fn new() -> Self {
        Self {
            initial_capacity: Self::DEFAULT_INITIAL_CAPACITY,
            strict_growth: Self::DEFAULT_STRICT_GROWTH,
        }
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), VecError> {
        if self.initial_capacity == 0 {
            return Err(VecError::InvalidConfig {
                reason: "initial_capacity must be at least 1".into(),
            });
        }
        Ok(())
    }
}

impl Default for VecConfig {
    fn default() -> Self {
        Self::new()
    }
}

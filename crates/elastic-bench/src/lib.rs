//! Benchmark profiles and utilities for the Elastic vector.
//!
//! - [`filled`]: a vector holding `0..n` under the default policy
//! - [`edit_positions`]: deterministic pseudo-random edit indices via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use elastic_core::VecError;
use elastic_vec::ElasticVec;

/// Build a vector holding `0..n`, grown through the doubling policy.
pub fn filled(n: u64) -> Result<ElasticVec<u64>, VecError> {
    ElasticVec::from_values(0..n)
}

/// Generate `count` edit positions, each valid for a vector whose length
/// starts at `len` and grows by one per edit.
///
/// Uses a simple LCG seeded by `seed` for reproducibility.
pub fn edit_positions(len: usize, count: usize, seed: u64) -> Vec<usize> {
    let mut positions = Vec::with_capacity(count);
    let mut rng_state = seed;
    for i in 0..count {
        rng_state = rng_state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let bound = len + i + 1;
        positions.push((rng_state >> 33) as usize % bound);
    }
    positions
}

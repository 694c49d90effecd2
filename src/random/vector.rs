//! Coordinate-addressable seeded random vector.

use crate::error::{GridError, Result};
use crate::random::{checked_draw, derive_seed, RandomDistribution};

/// A vector of random but consistent values.
///
/// Element `i` draws from seed `base + i * stride`. A vector sliced from a
/// [`RandomMatrix`](super::RandomMatrix) carries the offset and stride that
/// make its elements bit-identical to the parent's: stride 1 from a row,
/// `columns` from a column. Standalone vectors (stride 1) serve as
/// reproducible projection directions.
#[derive(Debug, Clone)]
pub struct RandomVector {
    size: usize,
    seed: i64,
    stride: i64,
    distribution: RandomDistribution,
}

impl RandomVector {
    pub fn new(size: usize, seed: i64, stride: i64, distribution: RandomDistribution) -> Self {
        RandomVector {
            size,
            seed,
            stride,
            distribution,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn distribution(&self) -> RandomDistribution {
        self.distribution
    }

    /// The value at `index`, validated against the distribution's bounds.
    pub fn get(&self, index: usize) -> Result<f64> {
        if index >= self.size {
            return Err(GridError::Bounds {
                index: index as i64,
                limit: self.size as i64,
            });
        }
        let offset = (index as i64).wrapping_mul(self.stride);
        checked_draw(derive_seed(self.seed, offset), self.distribution)
    }

    /// Materialize every element.
    pub fn to_vec(&self) -> Result<Vec<f64>> {
        (0..self.size).map(|i| self.get(i)).collect()
    }

    /// Direct writes are unsupported: values are derived from the seed.
    pub fn set(&mut self, _index: usize, _value: f64) -> Result<()> {
        Err(GridError::Unsupported(
            "random vector values are derived from the seed, not stored",
        ))
    }
}

//! Seeded, reproducible random values addressable by coordinate.
//!
//! A [`RandomMatrix`] never stores its entries: the value at `(row, col)` is
//! a pure function of `(base seed, row, col, distribution)`. The derived seed
//! is `base_seed + row * columns + col`; each read seeds a fresh generator
//! with it and draws exactly one sample, so values are independent of access
//! order, call count, and threading. That makes the matrix a reproducible
//! random-projection source: the same seed always yields the same projection,
//! which is what lets two runs of an LSH build hash vectors into the same
//! cells.
//!
//! [`RandomVector`] slices reproduce their parent matrix bit for bit — row
//! `r` starts at `base + r * columns` with stride 1, column `c` at `base + c`
//! with stride `columns` — so handing a single row to a collaborator is
//! equivalent to handing it the whole matrix.
//!
//! The only mutable state is the optional write-through [`value cache`];
//! everything else is read-only, and direct writes report an unsupported
//! operation.
//!
//! [`value cache`]: RandomMatrix::with_cache

mod dense;
mod matrix;
mod vector;

pub use dense::DenseMatrix;
pub use matrix::RandomMatrix;
pub use vector::RandomVector;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::error::{GridError, Result};

/// Sample distribution for a seeded random source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RandomDistribution {
    /// Uniform in [0, 1).
    Linear,
    /// Standard normal.
    Gaussian,
    /// Sum of 12 uniform [0, 1) samples divided by 12: a cheap bell curve
    /// confined near [0, 1].
    Gaussian01,
}

impl RandomDistribution {
    /// Open interval every drawn value must fall strictly inside.
    ///
    /// The uniform-based distributions legitimately produce 0.0, so their
    /// lower bound sits just below zero. The Gaussian is unbounded and only
    /// checked for finiteness.
    pub(crate) fn bounds(self) -> (f64, f64) {
        match self {
            RandomDistribution::Linear | RandomDistribution::Gaussian01 => (-1e-9, 1.0),
            RandomDistribution::Gaussian => (f64::MIN, f64::MAX),
        }
    }
}

/// Seed for one coordinate: base seed plus flat offset, wrapping.
#[inline]
pub(crate) fn derive_seed(base: i64, offset: i64) -> u64 {
    base.wrapping_add(offset) as u64
}

/// Seed a fresh generator and draw exactly one sample.
pub(crate) fn draw(seed: u64, distribution: RandomDistribution) -> f64 {
    let mut rng = StdRng::seed_from_u64(seed);
    match distribution {
        RandomDistribution::Linear => rng.random::<f64>(),
        RandomDistribution::Gaussian => rng.sample(StandardNormal),
        RandomDistribution::Gaussian01 => {
            (0..12).map(|_| rng.random::<f64>()).sum::<f64>() / 12.0
        }
    }
}

/// Draw and validate. A value outside its declared open interval (or a
/// non-finite one) is a broken generator, not bad input: it aborts the
/// operation instead of being clamped.
pub(crate) fn checked_draw(seed: u64, distribution: RandomDistribution) -> Result<f64> {
    let value = draw(seed, distribution);
    let (lower, upper) = distribution.bounds();
    if !value.is_finite() || value <= lower || value >= upper {
        return Err(GridError::Invariant(format!(
            "drawn value {value} outside ({lower}, {upper}) for {distribution:?}"
        )));
    }
    Ok(value)
}

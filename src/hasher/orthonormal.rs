//! Axis-aligned grid snap.

use crate::error::Result;
use crate::hasher::{check_grid_size, check_shape, Hasher};

/// Snaps each coordinate independently: `floor(v / grid_size)`.
///
/// Cells are axis-aligned hypercubes of side `grid_size`, keyed by their
/// lower-left corner.
#[derive(Debug, Clone)]
pub struct OrthonormalHasher {
    dimensions: usize,
    grid_size: f64,
}

impl OrthonormalHasher {
    pub fn new(dimensions: usize, grid_size: f64) -> Result<Self> {
        check_grid_size(grid_size)?;
        Ok(OrthonormalHasher {
            dimensions,
            grid_size,
        })
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }
}

impl Hasher for OrthonormalHasher {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn hash(&self, values: &[f64], out: &mut [i64]) -> Result<()> {
        check_shape(self.dimensions, values, out)?;
        for (value, slot) in values.iter().zip(out.iter_mut()) {
            *slot = (value / self.grid_size).floor() as i64;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_lower_left_corner() {
        let hasher = OrthonormalHasher::new(3, 0.5).unwrap();
        let mut out = [0i64; 3];
        hasher.hash(&[0.0, 0.74, -0.1], &mut out).unwrap();
        assert_eq!(out, [0, 1, -1]);
    }

    #[test]
    fn rejects_wrong_arity() {
        let hasher = OrthonormalHasher::new(2, 1.0).unwrap();
        let mut out = [0i64; 2];
        assert!(hasher.hash(&[1.0], &mut out).is_err());
    }
}

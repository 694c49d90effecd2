//! Simplex-lattice grid snap.

use crate::error::Result;
use crate::hasher::{check_grid_size, check_shape, Hasher};

/// Snaps onto the simplex lattice instead of the hypercube grid.
///
/// Coordinates are scaled by the grid size, sheared by a shared
/// `(sqrt(d+1) - 1) / d` multiple of their sum, then floored. The shear maps
/// hypercube corners onto lattice vertices whose cells are closer to spheres
/// than hypercubes are, which tightens the locality guarantee in high
/// dimensions. The projection needs the whole vector, so this hasher cannot
/// discretize one axis at a time.
#[derive(Debug, Clone)]
pub struct VertexTransitiveHasher {
    dimensions: usize,
    grid_size: f64,
    mu: f64,
}

impl VertexTransitiveHasher {
    pub fn new(dimensions: usize, grid_size: f64) -> Result<Self> {
        check_grid_size(grid_size)?;
        let d = dimensions as f64;
        Ok(VertexTransitiveHasher {
            dimensions,
            grid_size,
            mu: ((d + 1.0).sqrt() - 1.0) / d,
        })
    }

    pub fn grid_size(&self) -> f64 {
        self.grid_size
    }
}

impl Hasher for VertexTransitiveHasher {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn hash(&self, values: &[f64], out: &mut [i64]) -> Result<()> {
        check_shape(self.dimensions, values, out)?;
        let sum: f64 = values.iter().map(|v| v / self.grid_size).sum();
        for (value, slot) in values.iter().zip(out.iter_mut()) {
            *slot = (value / self.grid_size + self.mu * sum).floor() as i64;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_maps_to_origin() {
        let hasher = VertexTransitiveHasher::new(4, 1.0).unwrap();
        let mut out = [0i64; 4];
        hasher.hash(&[0.0; 4], &mut out).unwrap();
        assert_eq!(out, [0; 4]);
    }

    #[test]
    fn nearby_points_share_a_cell() {
        let hasher = VertexTransitiveHasher::new(3, 1.0).unwrap();
        let mut a = [0i64; 3];
        let mut b = [0i64; 3];
        hasher.hash(&[0.40, 0.40, 0.40], &mut a).unwrap();
        hasher.hash(&[0.41, 0.40, 0.40], &mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn distant_points_do_not() {
        let hasher = VertexTransitiveHasher::new(3, 1.0).unwrap();
        let mut a = [0i64; 3];
        let mut b = [0i64; 3];
        hasher.hash(&[0.1, 0.1, 0.1], &mut a).unwrap();
        hasher.hash(&[5.0, 5.0, 5.0], &mut b).unwrap();
        assert_ne!(a, b);
    }
}

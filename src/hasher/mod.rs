//! Discretization strategies: continuous vectors to integer grid coordinates.
//!
//! A [`Hasher`] snaps a continuous coordinate vector onto a grid of the
//! configured size, producing one integer coordinate per dimension. The
//! resulting coordinates identify the cell "corner" a vector belongs to; the
//! [`hash`](crate::hash) module turns them into comparable cell identities.
//!
//! Two strategies are provided:
//!
//! - [`OrthonormalHasher`]: axis-aligned snap, `floor(v / grid_size)` per
//!   coordinate. Cells are hypercubes.
//! - [`VertexTransitiveHasher`]: snap onto the simplex lattice. Cells pack
//!   space more evenly than hypercubes in high dimensions, at the cost of a
//!   whole-vector projection before flooring.
//!
//! Strategies are selected by name prefix (`"ortho..."` / `"vertex..."`) via
//! [`hasher_for`]; an unrecognized selector fails immediately.

mod orthonormal;
mod vertex_transitive;

pub use orthonormal::OrthonormalHasher;
pub use vertex_transitive::VertexTransitiveHasher;

use crate::error::{GridError, Result};

/// Maps a continuous coordinate vector onto integer grid coordinates.
///
/// Implementations see the whole vector at once: lattice snaps need every
/// coordinate to place a point, not one axis at a time.
pub trait Hasher: std::fmt::Debug {
    /// Number of coordinates this hasher expects and produces.
    fn dimensions(&self) -> usize;

    /// Discretize `values` into `out`. Both slices must have exactly
    /// [`dimensions`](Hasher::dimensions) elements.
    fn hash(&self, values: &[f64], out: &mut [i64]) -> Result<()>;
}

pub(crate) fn check_shape(dimensions: usize, values: &[f64], out: &[i64]) -> Result<()> {
    if values.len() != dimensions {
        return Err(GridError::DimensionMismatch {
            expected: dimensions,
            actual: values.len(),
        });
    }
    if out.len() != dimensions {
        return Err(GridError::DimensionMismatch {
            expected: dimensions,
            actual: out.len(),
        });
    }
    Ok(())
}

pub(crate) fn check_grid_size(grid_size: f64) -> Result<()> {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return Err(GridError::InvalidParameter(format!(
            "grid size must be finite and positive, got {grid_size}"
        )));
    }
    Ok(())
}

/// Select a hasher by name prefix: `"ortho..."` for the axis-aligned snap,
/// `"vertex..."` for the simplex-lattice snap. Anything else fails with
/// [`GridError::UnknownHasher`].
pub fn hasher_for(name: &str, dimensions: usize, grid_size: f64) -> Result<Box<dyn Hasher>> {
    if name.starts_with("ortho") {
        Ok(Box::new(OrthonormalHasher::new(dimensions, grid_size)?))
    } else if name.starts_with("vertex") {
        Ok(Box::new(VertexTransitiveHasher::new(dimensions, grid_size)?))
    } else {
        Err(GridError::UnknownHasher {
            name: name.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_by_prefix() {
        assert_eq!(hasher_for("orthonormal", 3, 1.0).unwrap().dimensions(), 3);
        assert_eq!(hasher_for("vertex-transitive", 3, 1.0).unwrap().dimensions(), 3);
    }

    #[test]
    fn unknown_selector_fails_immediately() {
        let err = hasher_for("hexagonal", 3, 1.0).unwrap_err();
        assert!(matches!(err, GridError::UnknownHasher { .. }));
        assert!(err.to_string().contains("ortho"));
    }

    #[test]
    fn grid_size_must_be_positive() {
        assert!(hasher_for("ortho", 3, 0.0).is_err());
        assert!(hasher_for("ortho", 3, f64::NAN).is_err());
    }
}

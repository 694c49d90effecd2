//! Spatial-cell keys and labeled data points.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::hash::{DenseHash, GridHash, MaskedEntries};

/// A grid-cell key: the discretized coordinate identity of the cell a point
/// fell into.
///
/// Equality and hashing delegate to the wrapped [`GridHash`], so corners
/// built from dense and sparse hashes of the same cell are the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Corner {
    hash: GridHash,
}

impl Corner {
    pub fn new(hash: GridHash) -> Self {
        Corner { hash }
    }

    /// Key a cell directly by its integer coordinates, at full detail.
    pub fn from_coordinates(coordinates: Vec<i64>) -> Self {
        Corner {
            hash: GridHash::from(DenseHash::new(coordinates)),
        }
    }

    pub fn grid_hash(&self) -> &GridHash {
        &self.hash
    }

    pub fn dimensions(&self) -> usize {
        self.hash.dimensions()
    }
}

impl fmt::Display for Corner {
    /// Comma-separated coordinates, the corpus/diagnostic spelling.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.hash.dimensions() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.hash.masked_value(i))?;
        }
        Ok(())
    }
}

/// An identifier plus its original (undiscretized) coordinates.
///
/// Points are immutable once loaded. Identity is the id alone: the same id
/// appearing under several corners is the same point.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    id: String,
    values: Vec<f64>,
}

impl Point {
    pub fn new(id: impl Into<String>, values: Vec<f64>) -> Self {
        Point {
            id: id.into(),
            values,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::SparseHash;

    #[test]
    fn corners_from_either_representation_collide() {
        let dense = Corner::from_coordinates(vec![2, 0, 5]);
        let sparse = Corner::new(GridHash::from(SparseHash::new(&[2, 0, 5])));
        assert_eq!(dense, sparse);
    }

    #[test]
    fn corner_displays_coordinates() {
        let corner = Corner::from_coordinates(vec![1, -2, 3]);
        assert_eq!(corner.to_string(), "1,-2,3");
    }

    #[test]
    fn point_identity_is_the_id() {
        let a = Point::new("p1", vec![0.1, 0.2]);
        let b = Point::new("p1", vec![0.9, 0.9]);
        assert_eq!(a, b);
    }
}

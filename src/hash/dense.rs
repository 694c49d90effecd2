//! Dense grid hash: every coordinate stored.

use std::fmt;

use crate::error::Result;
use crate::hash::{check_lod, lod_mask, single_hash, MaskedEntries};

/// A grid-cell hash storing a coordinate for every dimension.
///
/// Coordinates are fixed at construction; only the level of detail can change
/// afterwards. Dimensionality is the length of the coordinate vector.
#[derive(Debug, Clone)]
pub struct DenseHash {
    values: Vec<i64>,
    lod: u32,
    mask: i64,
    unique_sum: i64,
}

impl DenseHash {
    /// Wrap discretized coordinates at level of detail 0.
    pub fn new(values: Vec<i64>) -> Self {
        let mut hash = DenseHash {
            values,
            lod: 0,
            mask: 0,
            unique_sum: 0,
        };
        hash.recompute_sum();
        hash
    }

    /// Wrap discretized coordinates at the given level of detail.
    pub fn with_lod(values: Vec<i64>, lod: u32) -> Result<Self> {
        let mut hash = DenseHash::new(values);
        hash.set_lod(lod)?;
        Ok(hash)
    }

    /// The stored (unmasked) coordinates.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of grid dimensions.
    pub fn dimensions(&self) -> usize {
        self.values.len()
    }

    /// Current level of detail.
    pub fn lod(&self) -> u32 {
        self.lod
    }

    /// Re-point the level of detail and re-derive the masked checksum.
    pub fn set_lod(&mut self, lod: u32) -> Result<()> {
        check_lod(lod)?;
        self.lod = lod;
        self.mask = lod_mask(lod);
        self.recompute_sum();
        Ok(())
    }

    /// Always equals [`dimensions`](DenseHash::dimensions): every coordinate
    /// is explicitly stored.
    pub fn num_entries(&self) -> usize {
        self.values.len()
    }

    /// Whether `index` addresses a stored coordinate.
    pub fn contains_value(&self, index: usize) -> bool {
        index < self.values.len()
    }

    /// The stored coordinate at `index`, present for every in-range index.
    pub fn get_value(&self, index: usize) -> Option<i64> {
        self.values.get(index).copied()
    }

    /// Representation-independent identity code.
    pub fn identity_code(&self) -> u64 {
        super::identity_code(self)
    }

    fn recompute_sum(&mut self) {
        let mask = self.mask;
        self.unique_sum = self
            .values
            .iter()
            .enumerate()
            .fold(0i64, |sum, (i, &v)| sum.wrapping_add(single_hash(i, v & !mask)));
    }
}

impl MaskedEntries for DenseHash {
    fn dimensions(&self) -> usize {
        self.values.len()
    }

    fn lod(&self) -> u32 {
        self.lod
    }

    fn masked_value(&self, index: usize) -> i64 {
        self.values.get(index).copied().unwrap_or(0) & !self.mask
    }

    fn unique_sum(&self) -> i64 {
        self.unique_sum
    }
}

impl PartialEq for DenseHash {
    fn eq(&self, other: &Self) -> bool {
        super::masked_eq(self, other)
    }
}

impl Eq for DenseHash {}

impl PartialEq<super::SparseHash> for DenseHash {
    fn eq(&self, other: &super::SparseHash) -> bool {
        super::masked_eq(self, other)
    }
}

impl fmt::Display for DenseHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for i in 0..self.values.len() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.masked_value(i))?;
        }
        write!(f, "}}")
    }
}

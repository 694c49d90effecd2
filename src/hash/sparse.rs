//! Sparse grid hash: nonzero coordinates only, mutable in place.

use std::collections::HashMap;
use std::fmt;

use smallvec::SmallVec;

use crate::error::{GridError, Result};
use crate::hash::{check_lod, lod_mask, single_hash, MaskedEntries};
use crate::hasher::Hasher;

/// A grid-cell hash storing only its nonzero coordinates.
///
/// Entries live in an unsorted slot array; an index→slot map resolves
/// external dimension indices. An absent index reads as an implicit zero, so
/// a sparse hash and a dense hash of the same cell compare and hash
/// identically.
///
/// Mutation never reclaims storage: overwriting a slot with zero leaves the
/// slot allocated, and only a rebuild compacts it. The aggregate checksum is
/// updated incrementally on every write rather than rescanned. Writers must
/// not race with each other or with an in-progress entry iteration.
#[derive(Debug, Clone)]
pub struct SparseHash {
    /// External dimension index -> slot in `slots`. Slots are unsorted.
    slot_of: HashMap<usize, usize>,
    slots: SmallVec<[i64; 8]>,
    dimensions: usize,
    lod: u32,
    mask: i64,
    unique_sum: i64,
}

impl SparseHash {
    /// Wrap discretized coordinates at level of detail 0, storing only the
    /// nonzero ones.
    pub fn new(values: &[i64]) -> Self {
        let mut hash = SparseHash {
            slot_of: HashMap::new(),
            slots: SmallVec::new(),
            dimensions: values.len(),
            lod: 0,
            mask: 0,
            unique_sum: 0,
        };
        for (index, &value) in values.iter().enumerate() {
            if value != 0 {
                hash.append_slot(index, value);
            }
        }
        hash
    }

    /// Wrap discretized coordinates at the given level of detail.
    pub fn with_lod(values: &[i64], lod: u32) -> Result<Self> {
        let mut hash = SparseHash::new(values);
        hash.set_lod(lod)?;
        Ok(hash)
    }

    /// Build from explicit `(dimension index, coordinate)` pairs. Zero values
    /// are not materialized; later duplicates overwrite earlier ones.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (usize, i64)>,
        dimensions: usize,
        lod: u32,
    ) -> Result<Self> {
        let mut hash = SparseHash::empty(dimensions, lod)?;
        for (index, value) in entries {
            hash.set_value(index, value)?;
        }
        Ok(hash)
    }

    /// Discretize a sparse continuous vector and wrap the result.
    ///
    /// The vector is densified to `dimensions` before hashing so hashers that
    /// look at the whole coordinate set (the lattice snap does) see it all at
    /// once; only nonzero hashed coordinates are stored.
    pub fn from_vector<H: Hasher + ?Sized>(
        hasher: &H,
        entries: &[(usize, f64)],
        dimensions: usize,
        lod: u32,
    ) -> Result<Self> {
        if hasher.dimensions() != dimensions {
            return Err(GridError::DimensionMismatch {
                expected: dimensions,
                actual: hasher.dimensions(),
            });
        }
        let mut values = vec![0.0; dimensions];
        for &(index, value) in entries {
            if index >= dimensions {
                return Err(GridError::Bounds {
                    index: index as i64,
                    limit: dimensions as i64,
                });
            }
            values[index] = value;
        }
        let mut hashed = vec![0i64; dimensions];
        hasher.hash(&values, &mut hashed)?;
        SparseHash::with_lod(&hashed, lod)
    }

    /// Copy this hash at a different level of detail.
    pub fn at_lod(&self, lod: u32) -> Result<Self> {
        let mut copy = self.clone();
        copy.set_lod(lod)?;
        Ok(copy)
    }

    fn empty(dimensions: usize, lod: u32) -> Result<Self> {
        check_lod(lod)?;
        Ok(SparseHash {
            slot_of: HashMap::new(),
            slots: SmallVec::new(),
            dimensions,
            lod,
            mask: lod_mask(lod),
            unique_sum: 0,
        })
    }

    /// Number of grid dimensions.
    pub fn dimensions(&self) -> usize {
        self.dimensions
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
        let mut sum = 0i64;
        for (&index, &slot) in &self.slot_of {
            sum = sum.wrapping_add(single_hash(index, self.slots[slot] & !self.mask));
        }
        self.unique_sum = sum;
        Ok(())
    }

    /// Count of explicitly stored entries. Zeroed-out slots still count:
    /// storage only grows under mutation.
    pub fn num_entries(&self) -> usize {
        self.slots.len()
    }

    /// Whether a slot exists for `index`.
    pub fn contains_value(&self, index: usize) -> bool {
        self.slot_of.contains_key(&index)
    }

    /// The stored (unmasked) coordinate at `index`, if a slot exists for it.
    pub fn get_value(&self, index: usize) -> Option<i64> {
        self.slot_of.get(&index).map(|&slot| self.slots[slot])
    }

    /// Overwrite the coordinate at `index`.
    ///
    /// An existing slot is updated in place, even to zero; a new slot is
    /// appended only for a nonzero value. The aggregate checksum is adjusted
    /// by the difference, never rescanned.
    pub fn set_value(&mut self, index: usize, value: i64) -> Result<()> {
        if index >= self.dimensions {
            return Err(GridError::Bounds {
                index: index as i64,
                limit: self.dimensions as i64,
            });
        }
        if let Some(&slot) = self.slot_of.get(&index) {
            let old = self.slots[slot];
            self.slots[slot] = value;
            self.change_sum(index, old, value);
        } else if value != 0 {
            self.append_slot(index, value);
        }
        Ok(())
    }

    /// Iterate stored `(dimension index, coordinate)` pairs in slot order,
    /// which is not index order. Must not overlap with mutation.
    pub fn entries(&self) -> impl Iterator<Item = (usize, i64)> + '_ {
        self.slot_of
            .iter()
            .map(|(&index, &slot)| (index, self.slots[slot]))
    }

    /// Representation-independent identity code.
    pub fn identity_code(&self) -> u64 {
        super::identity_code(self)
    }

    fn append_slot(&mut self, index: usize, value: i64) {
        self.slots.push(value);
        self.slot_of.insert(index, self.slots.len() - 1);
        self.change_sum(index, 0, value);
    }

    fn change_sum(&mut self, index: usize, old: i64, new: i64) {
        self.unique_sum = self
            .unique_sum
            .wrapping_sub(single_hash(index, old & !self.mask))
            .wrapping_add(single_hash(index, new & !self.mask));
    }
}

impl MaskedEntries for SparseHash {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn lod(&self) -> u32 {
        self.lod
    }

    fn masked_value(&self, index: usize) -> i64 {
        self.get_value(index).unwrap_or(0) & !self.mask
    }

    fn unique_sum(&self) -> i64 {
        self.unique_sum
    }
}

impl PartialEq for SparseHash {
    fn eq(&self, other: &Self) -> bool {
        super::masked_eq(self, other)
    }
}

impl Eq for SparseHash {}

impl PartialEq<super::DenseHash> for SparseHash {
    fn eq(&self, other: &super::DenseHash) -> bool {
        super::masked_eq(self, other)
    }
}

impl fmt::Display for SparseHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for i in 0..self.dimensions {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", self.masked_value(i))?;
        }
        write!(f, "}}")
    }
}

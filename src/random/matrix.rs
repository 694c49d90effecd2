//! Coordinate-addressable seeded random matrix.

use std::cell::RefCell;

use crate::error::{GridError, Result};
use crate::random::{checked_draw, derive_seed, DenseMatrix, RandomDistribution, RandomVector};

/// Write-through cache for generated values.
///
/// Presence is tracked per cell, so a genuine zero-valued sample caches just
/// like any other value. The cache doubles as the shape template behind
/// [`RandomMatrix::like`].
#[derive(Debug)]
struct ValueCache {
    rows: usize,
    columns: usize,
    slots: Vec<Option<f64>>,
}

impl ValueCache {
    fn new(rows: usize, columns: usize) -> Self {
        ValueCache {
            rows,
            columns,
            slots: vec![None; rows * columns],
        }
    }

    fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.slots[row * self.columns + column]
    }

    fn put(&mut self, row: usize, column: usize, value: f64) {
        self.slots[row * self.columns + column] = Some(value);
    }

    /// Writable container with the cache's shape and storage profile.
    fn like(&self) -> DenseMatrix {
        DenseMatrix::new(self.rows, self.columns)
    }
}

/// A matrix of random but consistent values.
///
/// The value at `(row, col)` is a pure function of the base seed, the
/// coordinate, and the distribution: the derived seed is
/// `base_seed + row * columns + col`, and each read seeds a fresh generator
/// and draws one sample. Rows and columns sliced off via
/// [`row`](RandomMatrix::row) / [`column`](RandomMatrix::column) reproduce
/// the matrix values exactly.
///
/// The matrix is read-only; `set_value` and `assign` report an unsupported
/// operation. An optional write-through cache remembers generated values.
/// The cache makes reads interiorly mutable, so a cached matrix is for one
/// owner at a time, not for sharing across threads.
#[derive(Debug)]
pub struct RandomMatrix {
    rows: usize,
    columns: usize,
    seed: i64,
    distribution: RandomDistribution,
    cache: Option<RefCell<ValueCache>>,
}

impl RandomMatrix {
    /// An uncached source of the given shape, seed, and distribution.
    pub fn new(rows: usize, columns: usize, seed: i64, distribution: RandomDistribution) -> Self {
        RandomMatrix {
            rows,
            columns,
            seed,
            distribution,
            cache: None,
        }
    }

    /// Same as [`new`](RandomMatrix::new), with a write-through value cache.
    pub fn with_cache(
        rows: usize,
        columns: usize,
        seed: i64,
        distribution: RandomDistribution,
    ) -> Self {
        RandomMatrix {
            cache: Some(RefCell::new(ValueCache::new(rows, columns))),
            ..RandomMatrix::new(rows, columns, seed, distribution)
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn distribution(&self) -> RandomDistribution {
        self.distribution
    }

    /// The value at `(row, column)`.
    ///
    /// Checks the cache first when one is configured, then generates and
    /// validates the sample, writing it through on success.
    pub fn value_at(&self, row: usize, column: usize) -> Result<f64> {
        self.check(row, column)?;
        if let Some(cache) = &self.cache {
            if let Some(value) = cache.borrow().get(row, column) {
                return Ok(value);
            }
        }
        let offset = (row * self.columns + column) as i64;
        let value = checked_draw(derive_seed(self.seed, offset), self.distribution)?;
        if let Some(cache) = &self.cache {
            cache.borrow_mut().put(row, column, value);
        }
        Ok(value)
    }

    /// Row `row` as a vector source reproducing this matrix's values.
    pub fn row(&self, row: usize) -> Result<RandomVector> {
        if row >= self.rows {
            return Err(GridError::Bounds {
                index: row as i64,
                limit: self.rows as i64,
            });
        }
        Ok(RandomVector::new(
            self.columns,
            self.seed.wrapping_add((row * self.columns) as i64),
            1,
            self.distribution,
        ))
    }

    /// Column `column` as a vector source reproducing this matrix's values.
    pub fn column(&self, column: usize) -> Result<RandomVector> {
        if column >= self.columns {
            return Err(GridError::Bounds {
                index: column as i64,
                limit: self.columns as i64,
            });
        }
        Ok(RandomVector::new(
            self.rows,
            self.seed.wrapping_add(column as i64),
            self.columns as i64,
            self.distribution,
        ))
    }

    /// Project a vector through this matrix: one dot product per row.
    ///
    /// This is the random-projection step of an LSH build; the projection is
    /// as reproducible as the matrix itself.
    pub fn project(&self, values: &[f64]) -> Result<Vec<f64>> {
        if values.len() != self.columns {
            return Err(GridError::DimensionMismatch {
                expected: self.columns,
                actual: values.len(),
            });
        }
        let mut projected = Vec::with_capacity(self.rows);
        for row in 0..self.rows {
            let mut dot = 0.0;
            for (column, value) in values.iter().enumerate() {
                dot += self.value_at(row, column)? * value;
            }
            projected.push(dot);
        }
        Ok(projected)
    }

    /// A writable matrix of this shape: the cache's template when one is
    /// configured, a default dense container otherwise.
    pub fn like(&self) -> DenseMatrix {
        match &self.cache {
            Some(cache) => cache.borrow().like(),
            None => DenseMatrix::new(self.rows, self.columns),
        }
    }

    /// Direct writes are unsupported: the source is read-only except through
    /// its cache.
    pub fn set_value(&mut self, _row: usize, _column: usize, _value: f64) -> Result<()> {
        Err(GridError::Unsupported(
            "random matrix values are derived from the seed, not stored",
        ))
    }

    /// Bulk writes are unsupported for the same reason as `set_value`.
    pub fn assign(&mut self, _value: f64) -> Result<()> {
        Err(GridError::Unsupported(
            "random matrix values are derived from the seed, not stored",
        ))
    }

    fn check(&self, row: usize, column: usize) -> Result<()> {
        if row >= self.rows {
            return Err(GridError::Bounds {
                index: row as i64,
                limit: self.rows as i64,
            });
        }
        if column >= self.columns {
            return Err(GridError::Bounds {
                index: column as i64,
                limit: self.columns as i64,
            });
        }
        Ok(())
    }
}

//! Minimal writable dense matrix.

use crate::error::{GridError, Result};

/// A plain row-major dense matrix of `f64`.
///
/// This is the writable counterpart a [`RandomMatrix`](super::RandomMatrix)
/// hands out from `like()`, and the shape template behind its value cache.
/// It is deliberately small: shape plus checked element access, no algebra.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl DenseMatrix {
    /// A zeroed matrix of the given shape.
    pub fn new(rows: usize, columns: usize) -> Self {
        DenseMatrix {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> Result<f64> {
        self.check(row, column)?;
        Ok(self.values[row * self.columns + column])
    }

    pub fn set(&mut self, row: usize, column: usize, value: f64) -> Result<()> {
        self.check(row, column)?;
        self.values[row * self.columns + column] = value;
        Ok(())
    }

    /// A writable matrix of the same shape and storage profile, zeroed.
    pub fn like(&self) -> DenseMatrix {
        DenseMatrix::new(self.rows, self.columns)
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

//! Compressed Sparse Row matrix.

use std::ops::Range;

use crate::error::{Result, StencilError};

/// Immutable sparse matrix in Compressed Sparse Row format.
///
/// Rows are sorted by column index and hold no duplicate columns.
#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix {
    nrows: usize,
    ncols: usize,
    row_ptr: Vec<usize>,
    col_indices: Vec<usize>,
    values: Vec<f64>,
}

impl CsrMatrix {
    pub(crate) fn from_parts(
        nrows: usize,
        ncols: usize,
        row_ptr: Vec<usize>,
        col_indices: Vec<usize>,
        values: Vec<f64>,
    ) -> Self {
        debug_assert_eq!(row_ptr.len(), nrows + 1);
        debug_assert_eq!(col_indices.len(), values.len());
        Self {
            nrows,
            ncols,
            row_ptr,
            col_indices,
            values,
        }
    }

    /// Number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Number of stored entries.
    pub fn nnz(&self) -> usize {
        self.values.len()
    }

    /// Row pointer array (length `nrows + 1`).
    pub fn row_ptr(&self) -> &[usize] {
        &self.row_ptr
    }

    /// Column index array.
    pub fn col_indices(&self) -> &[usize] {
        &self.col_indices
    }

    /// Value array.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn row_range(&self, row: usize) -> Range<usize> {
        self.row_ptr[row]..self.row_ptr[row + 1]
    }

    /// Iterate over the `(col, value)` entries of a row.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.row_range(row);
        self.col_indices[range.clone()]
            .iter()
            .copied()
            .zip(self.values[range].iter().copied())
    }

    /// Number of stored entries in a row.
    pub fn row_nnz(&self, row: usize) -> usize {
        self.row_range(row).len()
    }

    /// Get the value at (row, col), zero if not stored.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        let range = self.row_range(row);
        match self.col_indices[range.clone()].binary_search(&col) {
            Ok(pos) => self.values[range.start + pos],
            Err(_) => 0.0,
        }
    }

    /// Diagonal entries.
    pub fn diagonal(&self) -> Vec<f64> {
        (0..self.nrows.min(self.ncols))
            .map(|r| self.get(r, r))
            .collect()
    }

    /// Expand into a dense row-major matrix.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.nrows * self.ncols];
        for r in 0..self.nrows {
            for (c, v) in self.row(r) {
                dense[r * self.ncols + c] += v;
            }
        }
        dense
    }

    /// Compute y = A * x.
    ///
    /// Fails with [`StencilError::DimensionMismatch`] unless `x` has one
    /// entry per column.
    pub fn matvec(&self, x: &[f64]) -> Result<Vec<f64>> {
        if x.len() != self.ncols {
            return Err(StencilError::dimension_mismatch(self.ncols, x.len()));
        }
        Ok((0..self.nrows)
            .map(|r| self.row(r).map(|(c, v)| v * x[c]).sum::<f64>())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> CsrMatrix {
        // [ 2 -1  0 ]
        // [ 0  1  0 ]
        // [-1  0  3 ]
        CsrMatrix::from_parts(
            3,
            3,
            vec![0, 2, 3, 5],
            vec![0, 1, 1, 0, 2],
            vec![2.0, -1.0, 1.0, -1.0, 3.0],
        )
    }

    #[test]
    fn test_accessors() {
        let m = sample();
        assert_eq!(m.nrows(), 3);
        assert_eq!(m.ncols(), 3);
        assert_eq!(m.nnz(), 5);
        assert_eq!(m.row_nnz(0), 2);
        assert_eq!(m.get(0, 1), -1.0);
        assert_eq!(m.get(1, 0), 0.0);
        assert_eq!(m.get(2, 2), 3.0);
        assert_eq!(m.diagonal(), vec![2.0, 1.0, 3.0]);
        assert_eq!(m.row(2).collect::<Vec<_>>(), vec![(0, -1.0), (2, 3.0)]);
    }

    #[test]
    fn test_to_dense() {
        let m = sample();
        assert_eq!(
            m.to_dense(),
            vec![2.0, -1.0, 0.0, 0.0, 1.0, 0.0, -1.0, 0.0, 3.0]
        );
    }

    #[test]
    fn test_matvec() {
        let m = sample();
        let y = m.matvec(&[1.0, 0.5, 0.25]).unwrap();
        assert_relative_eq!(y[0], 1.5, epsilon = 1e-12);
        assert_relative_eq!(y[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(y[2], -0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_matvec_rejects_wrong_length() {
        let m = sample();
        assert!(matches!(
            m.matvec(&[1.0, 2.0]),
            Err(StencilError::DimensionMismatch {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            m.matvec(&[1.0; 4]),
            Err(StencilError::DimensionMismatch {
                expected: 3,
                found: 4
            })
        ));
    }
}

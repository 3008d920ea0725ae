//! Coordinate (triplet) list used while assembling.

use crate::error::{Result, StencilError};

use super::csr::CsrMatrix;

/// A single `(row, col, value)` entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triplet {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

/// Append-only collector of matrix entries for a square `dim x dim` matrix.
///
/// Duplicate positions are kept as separate entries until [`build`](Self::build),
/// where they are summed.
#[derive(Debug, Clone)]
pub struct TripletBuilder {
    dim: usize,
    entries: Vec<Triplet>,
}

impl TripletBuilder {
    /// Create an empty builder for a `dim x dim` matrix.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Create an empty builder with room for `capacity` entries.
    pub fn with_capacity(dim: usize, capacity: usize) -> Self {
        Self {
            dim,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of raw entries (duplicates counted separately).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries have been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw entries in emission order.
    pub fn entries(&self) -> &[Triplet] {
        &self.entries
    }

    /// Append an entry.
    ///
    /// Fails with [`StencilError::IndexOutOfRange`] if `row` or `col` is not
    /// below the matrix dimension.
    pub fn push(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        if row >= self.dim {
            return Err(StencilError::index_out_of_range(row, row as i64, self.dim));
        }
        if col >= self.dim {
            return Err(StencilError::index_out_of_range(row, col as i64, self.dim));
        }
        self.entries.push(Triplet { row, col, value });
        Ok(())
    }

    /// Append all entries of another builder of the same dimension.
    ///
    /// Fails with [`StencilError::DimensionMismatch`] if the dimensions differ;
    /// `self` is left unchanged.
    pub fn extend(&mut self, other: TripletBuilder) -> Result<()> {
        if other.dim != self.dim {
            return Err(StencilError::dimension_mismatch(self.dim, other.dim));
        }
        self.entries.extend(other.entries);
        Ok(())
    }

    /// Sum the raw entries directly into a dense row-major matrix.
    pub fn to_dense(&self) -> Vec<f64> {
        let mut dense = vec![0.0; self.dim * self.dim];
        for t in &self.entries {
            dense[t.row * self.dim + t.col] += t.value;
        }
        dense
    }

    /// Compact into a CSR matrix, summing duplicate positions.
    pub fn build(self) -> CsrMatrix {
        let dim = self.dim;

        // Bucket entries per row
        let mut rows: Vec<Vec<(usize, f64)>> = vec![Vec::new(); dim];
        for t in self.entries {
            rows[t.row].push((t.col, t.value));
        }

        let mut row_ptr = Vec::with_capacity(dim + 1);
        let mut col_indices = Vec::new();
        let mut values: Vec<f64> = Vec::new();
        row_ptr.push(0);

        for row in &mut rows {
            row.sort_by_key(|&(col, _)| col);

            let row_start = col_indices.len();
            for &(col, val) in row.iter() {
                if col_indices.len() > row_start && col_indices.last() == Some(&col) {
                    if let Some(last) = values.last_mut() {
                        *last += val;
                    }
                    continue;
                }
                col_indices.push(col);
                values.push(val);
            }
            row_ptr.push(col_indices.len());
        }

        CsrMatrix::from_parts(dim, dim, row_ptr, col_indices, values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_rejects_out_of_range() {
        let mut builder = TripletBuilder::new(3);
        assert!(builder.push(2, 2, 1.0).is_ok());
        assert!(matches!(
            builder.push(3, 0, 1.0),
            Err(StencilError::IndexOutOfRange { row: 3, .. })
        ));
        assert!(matches!(
            builder.push(0, 3, 1.0),
            Err(StencilError::IndexOutOfRange { col: 3, dim: 3, .. })
        ));
        assert_eq!(builder.len(), 1);
    }

    #[test]
    fn test_duplicates_are_summed() {
        let mut builder = TripletBuilder::new(2);
        builder.push(0, 1, -1.0).unwrap();
        builder.push(0, 0, 2.0).unwrap();
        builder.push(0, 1, -1.0).unwrap();
        builder.push(1, 1, 1.0).unwrap();
        assert_eq!(builder.len(), 4);

        let dense = builder.to_dense();
        assert_eq!(dense, vec![2.0, -2.0, 0.0, 1.0]);

        let csr = builder.build();
        assert_eq!(csr.nnz(), 3);
        assert_eq!(csr.get(0, 1), -2.0);
        assert_eq!(csr.row_ptr(), &[0, 2, 3]);
        assert_eq!(csr.col_indices(), &[0, 1, 1]);
    }

    #[test]
    fn test_build_sorts_rows() {
        let mut builder = TripletBuilder::new(3);
        builder.push(1, 2, 3.0).unwrap();
        builder.push(1, 0, 1.0).unwrap();
        builder.push(0, 1, 5.0).unwrap();
        let csr = builder.build();
        assert_eq!(csr.row_ptr(), &[0, 1, 3, 3]);
        assert_eq!(csr.col_indices(), &[1, 0, 2]);
        assert_eq!(csr.values(), &[5.0, 1.0, 3.0]);
    }

    #[test]
    fn test_extend_concatenates() {
        let mut a = TripletBuilder::new(2);
        a.push(0, 0, 1.0).unwrap();
        let mut b = TripletBuilder::new(2);
        b.push(0, 0, 1.0).unwrap();
        b.push(1, 0, 4.0).unwrap();
        a.extend(b).unwrap();
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_dense(), vec![2.0, 0.0, 4.0, 0.0]);
    }

    #[test]
    fn test_extend_rejects_other_dimension() {
        let mut a = TripletBuilder::new(2);
        a.push(1, 1, 1.0).unwrap();
        let mut wide = TripletBuilder::new(5);
        wide.push(4, 4, 1.0).unwrap();

        assert!(matches!(
            a.extend(wide),
            Err(StencilError::DimensionMismatch {
                expected: 2,
                found: 5
            })
        ));
        assert_eq!(a.len(), 1);

        let csr = a.build();
        assert_eq!(csr.nnz(), 1);
        assert_eq!(csr.get(1, 1), 1.0);
    }
}

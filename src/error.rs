//! Error types for the brick stencil assembler.
//!
//! This module provides a unified error type [`StencilError`] that covers
//! all error conditions that can occur during grid construction, matrix
//! assembly, and writing the assembled operator.

use thiserror::Error;

/// Result type alias using [`StencilError`].
pub type Result<T> = std::result::Result<T, StencilError>;

/// Unified error type for all stencil operations.
#[derive(Error, Debug)]
pub enum StencilError {
    // ============ Assembly Errors ============
    /// Grid dimension too small for the boundary rules, or too large to index
    #[error(
        "Invalid grid dimension {n}: N must be at least {min} and N² entries must be addressable",
        min = crate::MIN_DIMENSION
    )]
    InvalidDimension { n: usize },

    /// Operand sizes disagree
    #[error("Dimension mismatch: expected {expected}, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A coupling referenced an unknown outside the operator
    #[error("Index out of range in row {row}: column {col} is outside [0, {dim})")]
    IndexOutOfRange { row: usize, col: i64, dim: usize },

    // ============ Output Errors ============
    /// Error writing the assembled matrix
    #[error("Output error: {message}")]
    OutputError { message: String },

    /// Error creating or writing an output file
    #[error("Failed to write output file '{path}': {source}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StencilError {
    /// Create an invalid dimension error
    pub fn invalid_dimension(n: usize) -> Self {
        Self::InvalidDimension { n }
    }

    /// Create an index out of range error
    pub fn index_out_of_range(row: usize, col: i64, dim: usize) -> Self {
        Self::IndexOutOfRange { row, col, dim }
    }

    /// Create a dimension mismatch error
    pub fn dimension_mismatch(expected: usize, found: usize) -> Self {
        Self::DimensionMismatch { expected, found }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>) -> Self {
        Self::OutputError {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StencilError::invalid_dimension(1);
        assert_eq!(
            err.to_string(),
            "Invalid grid dimension 1: N must be at least 2 and N² entries must be addressable"
        );

        let err = StencilError::dimension_mismatch(4, 3);
        assert_eq!(err.to_string(), "Dimension mismatch: expected 4, found 3");

        let err = StencilError::index_out_of_range(8, 9, 9);
        assert_eq!(
            err.to_string(),
            "Index out of range in row 8: column 9 is outside [0, 9)"
        );
    }
}

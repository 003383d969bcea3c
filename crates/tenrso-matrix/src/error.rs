//! Error types for matrix access, reshape and region traversal
//!
//! Every failure in this crate is a contract violation by the caller: an index
//! past the current shape, a region that does not fit, a shape whose element
//! count cannot be addressed. None of them are retried or clamped internally.
//!
//! # Examples
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix, MatrixError};
//!
//! let m = DenseMatrix::zeros(2, 2);
//! let err = m.get(2, 0).unwrap_err();
//! assert!(matches!(err, MatrixError::IndexOutOfBounds { row: 2, col: 0, .. }));
//! ```

use thiserror::Error;

use crate::types::Region;

/// Error type for all matrix operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixError {
    /// Requested shape has an element count that cannot be addressed
    #[error("Invalid dimension: {rows}×{cols} exceeds the addressable element count")]
    InvalidDimension { rows: usize, cols: usize },

    /// Element access outside `[0, rows) × [0, cols)`
    #[error("Index out of bounds: ({row}, {col}) exceeds shape {rows}×{cols}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// Region bounds violate `min <= max < dimension`
    #[error("Invalid region: {region} does not fit shape {rows}×{cols}")]
    InvalidRegion {
        region: Region,
        rows: usize,
        cols: usize,
    },

    /// Advance requested on an exhausted region iterator
    #[error("Region iterator is exhausted")]
    IteratorExhausted,

    /// Write-through requested before the iterator yielded anything
    #[error("Region iterator has not yielded an element yet")]
    NoCurrentElement,

    /// Flat data length does not match the requested shape
    #[error("Data length mismatch: expected {expected} elements, got {got}")]
    DataLength { expected: usize, got: usize },
}

/// Result type alias for matrix operations
pub type MatrixResult<T> = Result<T, MatrixError>;

impl MatrixError {
    /// Create an index out of bounds error
    pub fn index_out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        MatrixError::IndexOutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Create an invalid region error
    pub fn invalid_region(region: Region, rows: usize, cols: usize) -> Self {
        MatrixError::InvalidRegion { region, rows, cols }
    }

    /// Create a data length error
    pub fn data_length(expected: usize, got: usize) -> Self {
        MatrixError::DataLength { expected, got }
    }
}

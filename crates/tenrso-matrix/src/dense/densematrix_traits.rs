//! # DenseMatrix - Trait Implementations
//!
//! - `Index<(usize, usize)>` / `IndexMut<(usize, usize)>`
//! - `PartialEq` (shape and logical elements; capacity is ignored)
//! - `Debug`

use super::types::DenseMatrix;
use std::fmt;

impl DenseMatrix {
    fn offset_or_panic(&self, row: usize, col: usize) -> usize {
        match self.index_of(row, col) {
            Ok(idx) => idx,
            Err(err) => panic!("{err}"),
        }
    }
}

/// Panicking element access, like slice indexing.
/// Use [`Matrix::get`](crate::Matrix::get) for a checked read.
impl std::ops::Index<(usize, usize)> for DenseMatrix {
    type Output = f64;
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[self.offset_or_panic(row, col)]
    }
}

impl std::ops::IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let idx = self.offset_or_panic(row, col);
        &mut self.data[idx]
    }
}

impl PartialEq for DenseMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseMatrix")
            .field("rows", &self.shape.rows)
            .field("cols", &self.shape.cols)
            .field("capacity", &self.data.len())
            .field("data", &self.as_slice())
            .finish()
    }
}

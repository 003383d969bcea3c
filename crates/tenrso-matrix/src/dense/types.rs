//! Dense matrix type definition and basic accessors
//!
//! This module defines the core `DenseMatrix` type. Construction lives in
//! `creation`, the [`Matrix`](crate::Matrix) implementation and reshape in
//! `shape_ops`.

use crate::error::MatrixResult;
use crate::types::MatrixShape;

/// Row-major dense matrix of `f64`.
///
/// Element `(row, col)` lives at `row * cols + col` in the backing buffer.
/// The buffer may be longer than `rows * cols`: its length is the capacity,
/// which a reshape reuses before allocating and never gives back on its
/// own (see [`DenseMatrix::shrink_to_fit`]).
///
/// # Examples
///
/// ```
/// use tenrso_matrix::{DenseMatrix, Matrix};
///
/// let m = DenseMatrix::zeros(2, 3);
/// assert_eq!(m.num_rows(), 2);
/// assert_eq!(m.num_cols(), 3);
/// assert_eq!(m.capacity(), 6);
/// ```
#[derive(Clone, Default)]
pub struct DenseMatrix {
    pub(crate) shape: MatrixShape,
    /// Backing storage; `data.len()` is the capacity
    pub(crate) data: Vec<f64>,
}

impl DenseMatrix {
    /// Number of elements the backing storage holds without reallocating
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Check if the matrix has zero elements
    pub fn is_empty(&self) -> bool {
        self.shape.is_empty()
    }

    /// Check if this is a square matrix
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::DenseMatrix;
    ///
    /// assert!(DenseMatrix::zeros(3, 3).is_square());
    /// assert!(!DenseMatrix::zeros(3, 4).is_square());
    /// ```
    pub fn is_square(&self) -> bool {
        self.shape.rows == self.shape.cols
    }

    /// Linear offset of `(row, col)` in the backing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`](crate::MatrixError::IndexOutOfBounds)
    /// if the position is outside the current shape.
    pub fn index_of(&self, row: usize, col: usize) -> MatrixResult<usize> {
        self.shape.check_index(row, col)?;
        Ok(row * self.shape.cols + col)
    }

    /// Logical elements in row-major order (excludes spare capacity)
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::DenseMatrix;
    ///
    /// let m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn as_slice(&self) -> &[f64] {
        &self.data[..self.shape.num_elements()]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        let n = self.shape.num_elements();
        &mut self.data[..n]
    }

    /// Copy the logical elements into a new vector in row-major order
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }

    /// Set every logical element to `value`
    pub fn fill(&mut self, value: f64) {
        self.as_mut_slice().fill(value);
    }

    /// Fill the matrix with values produced by a function of `(row, col)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let mut m = DenseMatrix::zeros(2, 3);
    /// m.fill_with(|r, c| (r + c) as f64);
    /// assert_eq!(m.get(1, 2).unwrap(), 3.0);
    /// ```
    pub fn fill_with<F>(&mut self, mut f: F)
    where
        F: FnMut(usize, usize) -> f64,
    {
        let cols = self.shape.cols;
        if cols == 0 {
            return;
        }
        for (i, slot) in self.as_mut_slice().iter_mut().enumerate() {
            *slot = f(i / cols, i % cols);
        }
    }

    /// Drop spare capacity so the buffer holds exactly `rows * cols` elements
    pub fn shrink_to_fit(&mut self) {
        let n = self.shape.num_elements();
        self.data.truncate(n);
        self.data.shrink_to_fit();
    }
}

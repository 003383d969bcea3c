//! Dense matrix creation and initialization methods

use super::types::DenseMatrix;
use crate::error::{MatrixError, MatrixResult};
use crate::types::MatrixShape;

/// Shape for the infallible constructors; these panic the same way
/// `Vec::with_capacity` does on an unaddressable size.
fn shape_or_panic(rows: usize, cols: usize) -> MatrixShape {
    match MatrixShape::checked(rows, cols) {
        Ok(shape) => shape,
        Err(err) => panic!("{err}"),
    }
}

impl DenseMatrix {
    /// Create a matrix of zeros
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cannot be addressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let m = DenseMatrix::zeros(2, 3);
    /// assert_eq!(m.get(1, 2).unwrap(), 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_elem(rows, cols, 0.0)
    }

    /// Create a matrix filled with `value`
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cannot be addressed.
    pub fn from_elem(rows: usize, cols: usize, value: f64) -> Self {
        let shape = shape_or_panic(rows, cols);
        Self {
            shape,
            data: vec![value; shape.num_elements()],
        }
    }

    /// Create a zeroed matrix whose storage holds at least `capacity`
    /// elements, so later reshapes up to that size do not allocate.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cannot be addressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let mut m = DenseMatrix::with_capacity(2, 2, 16);
    /// assert_eq!(m.capacity(), 16);
    /// m.reshape(4, 4, true).unwrap();
    /// assert_eq!(m.capacity(), 16);
    /// ```
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        let shape = shape_or_panic(rows, cols);
        Self {
            shape,
            data: vec![0.0; capacity.max(shape.num_elements())],
        }
    }

    /// Create a matrix from row-major data
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] if the shape cannot be
    /// addressed, or [`MatrixError::DataLength`] if `data.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
    /// assert_eq!(m.get(1, 0).unwrap(), 4.0);
    ///
    /// assert!(DenseMatrix::from_vec(vec![1.0, 2.0], 2, 3).is_err());
    /// ```
    pub fn from_vec(data: Vec<f64>, rows: usize, cols: usize) -> MatrixResult<Self> {
        let shape = MatrixShape::checked(rows, cols)?;
        if data.len() != shape.num_elements() {
            return Err(MatrixError::data_length(shape.num_elements(), data.len()));
        }
        Ok(Self { shape, data })
    }

    /// Create a matrix from a slice of equally long rows
    ///
    /// An empty slice gives a `0×0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::DataLength`] if the rows are ragged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
    /// assert_eq!(m.get(1, 1).unwrap(), 4.0);
    ///
    /// let ragged: [&[f64]; 2] = [&[1.0, 2.0], &[3.0]];
    /// assert!(DenseMatrix::from_rows(&ragged).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> MatrixResult<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(MatrixError::data_length(cols, row.len()));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(data, rows.len(), cols)
    }

    /// Create a matrix whose element `(row, col)` is `f(row, col)`
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` cannot be addressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let m = DenseMatrix::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
    /// assert_eq!(m.get(2, 1).unwrap(), 7.0);
    /// ```
    pub fn from_fn<F>(rows: usize, cols: usize, f: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut m = Self::zeros(rows, cols);
        m.fill_with(f);
        m
    }

    /// Create an identity matrix
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |r, c| if r == c { 1.0 } else { 0.0 })
    }
}

//! The [`Matrix`] capability set implemented by every storage variant.
//!
//! Higher-level routines (decompositions, solvers, kernels) only talk to a
//! matrix through this trait. They rely on three guarantees:
//!
//! - indices are 0-based, rows in `[0, num_rows)` and columns in `[0, num_cols)`
//! - [`Matrix::num_elements`] is always `num_rows * num_cols`, the logical
//!   count, even for variants whose physical storage is smaller or larger
//! - the shape only changes through construction or [`Matrix::reshape`]
//!
//! # Examples
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix, Region, TraversalOrder};
//!
//! let mut m = DenseMatrix::zeros(2, 3);
//! m.set(1, 2, 7.5).unwrap();
//! assert_eq!(m.get(1, 2).unwrap(), 7.5);
//!
//! m.reshape(3, 3, true).unwrap();
//! assert_eq!(m.num_elements(), 9);
//! assert_eq!(m.get(1, 2).unwrap(), 7.5);
//!
//! let values: Vec<f64> = m
//!     .region_iter(TraversalOrder::ColumnMajor, Region::new(0, 2, 1, 2))
//!     .unwrap()
//!     .map(|e| e.value)
//!     .collect();
//! assert_eq!(values, vec![0.0, 7.5]);
//! ```

use crate::error::MatrixResult;
use crate::iterators::{RegionIter, RegionIterMut};
use crate::types::{MatrixShape, Region, TraversalOrder};

/// Rectangular, row/column addressable matrix of `f64`.
///
/// Implementors own their storage; the trait never holds any. A variant
/// typically embeds a [`MatrixShape`] and returns it from [`Matrix::shape`],
/// and drives [`Matrix::reshape`] through a [`ReshapePlan`](crate::ReshapePlan).
///
/// # Iterator validity
///
/// Region iterators borrow the matrix, so `set` and `reshape` through any
/// other path are rejected at compile time while one is alive. A reshape
/// therefore can never leave an iterator pointing past the new bounds.
pub trait Matrix {
    /// Current shape; always consistent with the last construction or reshape.
    ///
    /// Implementations should only report shapes built through
    /// [`MatrixShape::checked`].
    fn shape(&self) -> MatrixShape;

    /// Read the element at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`](crate::MatrixError::IndexOutOfBounds)
    /// if `row >= num_rows()` or `col >= num_cols()`.
    fn get(&self, row: usize, col: usize) -> MatrixResult<f64>;

    /// Overwrite the element at `(row, col)` with `val`.
    ///
    /// Only that element changes.
    ///
    /// # Errors
    ///
    /// Same bounds contract as [`Matrix::get`].
    fn set(&mut self, row: usize, col: usize, val: f64) -> MatrixResult<()>;

    /// Change the shape to `rows × cols`.
    ///
    /// No storage is allocated if the existing storage holds `rows * cols`
    /// elements. With `save_values`, every element at `(r, c)` with
    /// `r < min(old_rows, rows)` and `c < min(old_cols, cols)` keeps its value;
    /// every other element is unspecified. Without `save_values` all
    /// elements are unspecified afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`](crate::MatrixError::InvalidDimension)
    /// if `rows * cols` cannot be addressed. The matrix is unchanged on error.
    fn reshape(&mut self, rows: usize, cols: usize, save_values: bool) -> MatrixResult<()>;

    fn num_rows(&self) -> usize {
        self.shape().rows
    }

    fn num_cols(&self) -> usize {
        self.shape().cols
    }

    /// Logical element count, `num_rows() * num_cols()`.
    fn num_elements(&self) -> usize {
        self.shape().num_elements()
    }

    /// Walk `region` in `order`, reading values.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRegion`](crate::MatrixError::InvalidRegion)
    /// unless `min <= max < dimension` holds on both axes.
    fn region_iter(&self, order: TraversalOrder, region: Region) -> MatrixResult<RegionIter<'_, Self>>
    where
        Self: Sized,
    {
        RegionIter::new(self, order, region)
    }

    /// Walk `region` in `order` with write-through via
    /// [`RegionIterMut::set`].
    ///
    /// # Errors
    ///
    /// Same region contract as [`Matrix::region_iter`].
    fn region_iter_mut(
        &mut self,
        order: TraversalOrder,
        region: Region,
    ) -> MatrixResult<RegionIterMut<'_, Self>>
    where
        Self: Sized,
    {
        RegionIterMut::new(self, order, region)
    }

    /// Flag-and-bounds form of [`Matrix::region_iter`]: bounds are inclusive
    /// and the walk starts at `(min_row, min_col)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{DenseMatrix, Matrix};
    ///
    /// let m = DenseMatrix::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
    /// let values: Vec<f64> = m.iterator(true, 0, 1, 1, 2).unwrap().map(|e| e.value).collect();
    /// assert_eq!(values, vec![1.0, 2.0, 4.0, 5.0]);
    /// ```
    fn iterator(
        &self,
        row_major: bool,
        min_row: usize,
        min_col: usize,
        max_row: usize,
        max_col: usize,
    ) -> MatrixResult<RegionIter<'_, Self>>
    where
        Self: Sized,
    {
        self.region_iter(
            TraversalOrder::from_row_major(row_major),
            Region::new(min_row, min_col, max_row, max_col),
        )
    }
}

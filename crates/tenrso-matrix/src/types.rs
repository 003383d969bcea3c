//! Core type definitions shared by every matrix variant.
//!
//! - [`MatrixShape`]: the two dimension fields each variant embeds
//! - [`TraversalOrder`]: row-major or column-major walk order
//! - [`Region`]: a rectangular sub-region given by four inclusive bounds
//!
//! # Examples
//!
//! ```
//! use tenrso_matrix::{MatrixShape, Region};
//!
//! let shape = MatrixShape::checked(3, 4).unwrap();
//! assert_eq!(shape.num_elements(), 12);
//!
//! let region = Region::new(0, 1, 1, 2);
//! assert_eq!(region.len(), 4);
//! assert!(region.validate(shape).is_ok());
//! ```

use std::fmt;

use crate::error::{MatrixError, MatrixResult};

/// Largest element count a matrix of `f64` can address.
pub const MAX_ELEMENTS: usize = isize::MAX as usize / std::mem::size_of::<f64>();

/// Number of rows and columns of a matrix.
///
/// Variants embed this instead of tracking the two counts separately, so
/// `rows * cols` is always the logical element count.
///
/// The fields are public for pattern matching and literals, but a shape a
/// variant reports from [`Matrix::shape`](crate::Matrix::shape) must have
/// passed [`MatrixShape::checked`]. An unchecked shape whose product
/// overflows reports a saturated [`num_elements`](Self::num_elements).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MatrixShape {
    /// Number of rows
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
}

impl MatrixShape {
    /// Create a shape, failing when `rows * cols` cannot be addressed.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidDimension`] when the element count
    /// overflows or exceeds [`MAX_ELEMENTS`].
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::MatrixShape;
    ///
    /// assert!(MatrixShape::checked(0, 5).is_ok());
    /// assert!(MatrixShape::checked(usize::MAX, 2).is_err());
    /// ```
    pub fn checked(rows: usize, cols: usize) -> MatrixResult<Self> {
        match rows.checked_mul(cols) {
            Some(n) if n <= MAX_ELEMENTS => Ok(Self { rows, cols }),
            _ => Err(MatrixError::InvalidDimension { rows, cols }),
        }
    }

    /// Total number of logical elements
    ///
    /// Saturates at `usize::MAX` for a shape that never went through
    /// [`MatrixShape::checked`].
    pub fn num_elements(&self) -> usize {
        self.rows.saturating_mul(self.cols)
    }

    /// Check if the shape holds zero elements
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Check if `(row, col)` addresses an element of this shape
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Bounds-check `(row, col)` against this shape.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IndexOutOfBounds`] when either index is past
    /// its dimension.
    pub fn check_index(&self, row: usize, col: usize) -> MatrixResult<()> {
        if self.contains(row, col) {
            Ok(())
        } else {
            Err(MatrixError::index_out_of_bounds(
                row, col, self.rows, self.cols,
            ))
        }
    }

    /// Elementwise minimum of two shapes (the overlapping top-left block)
    pub fn overlap(&self, other: MatrixShape) -> MatrixShape {
        MatrixShape {
            rows: self.rows.min(other.rows),
            cols: self.cols.min(other.cols),
        }
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}×{}", self.rows, self.cols)
    }
}

/// Order in which a region is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Columns advance fastest, rows slowest
    #[default]
    RowMajor,
    /// Rows advance fastest, columns slowest
    ColumnMajor,
}

impl TraversalOrder {
    /// Map a `row_major` flag onto an order
    pub fn from_row_major(row_major: bool) -> Self {
        if row_major {
            TraversalOrder::RowMajor
        } else {
            TraversalOrder::ColumnMajor
        }
    }

    pub fn is_row_major(&self) -> bool {
        matches!(self, TraversalOrder::RowMajor)
    }
}

/// Rectangular sub-region of a matrix.
///
/// All four bounds are inclusive: `Region::new(0, 0, 1, 1)` covers rows 0
/// and 1 and columns 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
    pub min_row: usize,
    pub min_col: usize,
    pub max_row: usize,
    pub max_col: usize,
}

impl Region {
    /// Create a region from inclusive bounds.
    ///
    /// The bounds are not checked here; see [`Region::validate`].
    pub fn new(min_row: usize, min_col: usize, max_row: usize, max_col: usize) -> Self {
        Self {
            min_row,
            min_col,
            max_row,
            max_col,
        }
    }

    /// The region covering every element of `shape`.
    ///
    /// Returns `None` for an empty shape, which has no valid region.
    ///
    /// # Examples
    ///
    /// ```
    /// use tenrso_matrix::{MatrixShape, Region};
    ///
    /// let full = Region::full(MatrixShape { rows: 2, cols: 3 }).unwrap();
    /// assert_eq!(full, Region::new(0, 0, 1, 2));
    /// assert!(Region::full(MatrixShape { rows: 0, cols: 3 }).is_none());
    /// ```
    pub fn full(shape: MatrixShape) -> Option<Self> {
        if shape.is_empty() {
            return None;
        }
        Some(Self::new(0, 0, shape.rows - 1, shape.cols - 1))
    }

    /// Number of rows covered, or 0 if the bounds are inverted
    pub fn num_rows(&self) -> usize {
        if self.max_row < self.min_row {
            0
        } else {
            self.max_row - self.min_row + 1
        }
    }

    /// Number of columns covered, or 0 if the bounds are inverted
    pub fn num_cols(&self) -> usize {
        if self.max_col < self.min_col {
            0
        } else {
            self.max_col - self.min_col + 1
        }
    }

    /// Number of positions in the region
    pub fn len(&self) -> usize {
        self.num_rows() * self.num_cols()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if `(row, col)` lies inside the region
    pub fn contains(&self, row: usize, col: usize) -> bool {
        (self.min_row..=self.max_row).contains(&row) && (self.min_col..=self.max_col).contains(&col)
    }

    /// Check `min <= max < dimension` on both axes.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRegion`] if either axis is inverted or
    /// reaches past `shape`.
    pub fn validate(&self, shape: MatrixShape) -> MatrixResult<()> {
        let rows_ok = self.min_row <= self.max_row && self.max_row < shape.rows;
        let cols_ok = self.min_col <= self.max_col && self.max_col < shape.cols;
        if rows_ok && cols_ok {
            Ok(())
        } else {
            Err(MatrixError::invalid_region(*self, shape.rows, shape.cols))
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={}, cols {}..={}",
            self.min_row, self.max_row, self.min_col, self.max_col
        )
    }
}

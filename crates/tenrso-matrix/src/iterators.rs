//! Cursor-style iterators over rectangular sub-regions of a matrix
//!
//! A region iterator visits every position of a [`Region`] exactly once, in
//! row-major or column-major order, starting at `(min_row, min_col)` and
//! ending at `(max_row, max_col)`. It is finite and cannot be rewound;
//! build a new one to walk the region again.
//!
//! Two flavours share the same cursor:
//!
//! - [`RegionIter`] borrows the matrix immutably; several can walk the same
//!   matrix at once
//! - [`RegionIterMut`] borrows it mutably and can write the most recently
//!   yielded element through [`Matrix::set`]
//!
//! # Examples
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix, Region, TraversalOrder};
//!
//! let m = DenseMatrix::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
//!
//! for entry in m.region_iter(TraversalOrder::RowMajor, Region::new(0, 1, 1, 2)).unwrap() {
//!     println!("({}, {}) = {}", entry.row, entry.col, entry.value);
//! }
//! ```

use std::fmt;
use std::iter::FusedIterator;

use crate::error::{MatrixError, MatrixResult};
use crate::matrix::Matrix;
use crate::types::{Region, TraversalOrder};

/// Lifecycle of a region cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionState {
    /// At least one position is still unvisited
    Ready,
    /// Every position has been visited (terminal)
    Exhausted,
}

/// One visited position and the value read there
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionEntry {
    pub row: usize,
    pub col: usize,
    pub value: f64,
}

// ============================================================================
// Cursor
// ============================================================================

#[derive(Debug, Clone)]
struct RegionCursor {
    order: TraversalOrder,
    region: Region,
    row: usize,
    col: usize,
    state: RegionState,
    /// Positions yielded so far
    index: usize,
    /// Most recently yielded position
    last: Option<(usize, usize)>,
}

impl RegionCursor {
    fn new<M: Matrix + ?Sized>(matrix: &M, order: TraversalOrder, region: Region) -> MatrixResult<Self> {
        region.validate(matrix.shape())?;
        tracing::trace!(%region, ?order, "region cursor created");
        Ok(Self {
            order,
            region,
            row: region.min_row,
            col: region.min_col,
            state: RegionState::Ready,
            index: 0,
            last: None,
        })
    }

    /// Return the current position and move to the next one.
    fn step(&mut self) -> Option<(usize, usize)> {
        if self.state == RegionState::Exhausted {
            return None;
        }
        let pos = (self.row, self.col);
        let r = self.region;

        // compare against the max bound before incrementing so a bound at
        // usize::MAX cannot overflow
        match self.order {
            TraversalOrder::RowMajor => {
                if self.col == r.max_col {
                    self.col = r.min_col;
                    if self.row == r.max_row {
                        self.state = RegionState::Exhausted;
                    } else {
                        self.row += 1;
                    }
                } else {
                    self.col += 1;
                }
            }
            TraversalOrder::ColumnMajor => {
                if self.row == r.max_row {
                    self.row = r.min_row;
                    if self.col == r.max_col {
                        self.state = RegionState::Exhausted;
                    } else {
                        self.col += 1;
                    }
                } else {
                    self.row += 1;
                }
            }
        }

        self.index += 1;
        self.last = Some(pos);
        Some(pos)
    }

    fn remaining(&self) -> usize {
        match self.state {
            RegionState::Ready => self.region.len() - self.index,
            RegionState::Exhausted => 0,
        }
    }

    fn finish(&mut self) {
        self.state = RegionState::Exhausted;
    }
}

// ============================================================================
// Read-only iterator
// ============================================================================

/// Iterator over a sub-region of a borrowed matrix.
///
/// Yields [`RegionEntry`] values; exactly `region.len()` of them.
pub struct RegionIter<'a, M: Matrix + ?Sized> {
    matrix: &'a M,
    cursor: RegionCursor,
}

impl<'a, M: Matrix + ?Sized> RegionIter<'a, M> {
    /// Bind a new iterator to `matrix`, positioned at `(min_row, min_col)`.
    ///
    /// Works for trait objects too, e.g. `RegionIter::new(m as &dyn Matrix, ..)`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRegion`] if `region` does not fit the
    /// matrix.
    pub fn new(matrix: &'a M, order: TraversalOrder, region: Region) -> MatrixResult<Self> {
        let cursor = RegionCursor::new(matrix, order, region)?;
        Ok(Self { matrix, cursor })
    }

    /// Check if another element is available without consuming it
    pub fn has_next(&self) -> bool {
        self.cursor.state == RegionState::Ready
    }

    pub fn state(&self) -> RegionState {
        self.cursor.state
    }

    /// Number of elements yielded so far, which is also the offset of the
    /// next element within the region.
    pub fn index(&self) -> usize {
        self.cursor.index
    }

    pub fn order(&self) -> TraversalOrder {
        self.cursor.order
    }

    pub fn is_row_major(&self) -> bool {
        self.cursor.order.is_row_major()
    }

    pub fn region(&self) -> Region {
        self.cursor.region
    }

    /// Position of the element most recently yielded
    pub fn current(&self) -> Option<(usize, usize)> {
        self.cursor.last
    }

    /// Yield the next element, failing once the region is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IteratorExhausted`] after the last element, or
    /// whatever the matrix's `get` reports.
    pub fn advance(&mut self) -> MatrixResult<RegionEntry> {
        let (row, col) = self.cursor.step().ok_or(MatrixError::IteratorExhausted)?;
        let value = self.matrix.get(row, col)?;
        Ok(RegionEntry { row, col, value })
    }
}

impl<'a, M: Matrix + ?Sized> Iterator for RegionIter<'a, M> {
    type Item = RegionEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(entry) => Some(entry),
            Err(_) => {
                self.cursor.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, M: Matrix + ?Sized> ExactSizeIterator for RegionIter<'a, M> {}

impl<'a, M: Matrix + ?Sized> FusedIterator for RegionIter<'a, M> {}

impl<'a, M: Matrix + ?Sized> fmt::Debug for RegionIter<'a, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionIter")
            .field("shape", &self.matrix.shape())
            .field("cursor", &self.cursor)
            .finish()
    }
}

// ============================================================================
// Write-through iterator
// ============================================================================

/// Iterator over a sub-region of a mutably borrowed matrix.
///
/// Besides yielding entries like [`RegionIter`], it can overwrite the element
/// it yielded last:
///
/// ```
/// use tenrso_matrix::{DenseMatrix, Matrix, Region, TraversalOrder};
///
/// let mut m = DenseMatrix::zeros(2, 2);
/// let mut it = m.region_iter_mut(TraversalOrder::RowMajor, Region::new(0, 0, 1, 1)).unwrap();
/// while let Some(entry) = it.next() {
///     it.set((entry.row * 10 + entry.col) as f64).unwrap();
/// }
/// assert_eq!(m.get(1, 1).unwrap(), 11.0);
/// ```
pub struct RegionIterMut<'a, M: Matrix + ?Sized> {
    matrix: &'a mut M,
    cursor: RegionCursor,
}

impl<'a, M: Matrix + ?Sized> RegionIterMut<'a, M> {
    /// Bind a new write-through iterator to `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRegion`] if `region` does not fit the
    /// matrix.
    pub fn new(matrix: &'a mut M, order: TraversalOrder, region: Region) -> MatrixResult<Self> {
        let cursor = RegionCursor::new(&*matrix, order, region)?;
        Ok(Self { matrix, cursor })
    }

    pub fn has_next(&self) -> bool {
        self.cursor.state == RegionState::Ready
    }

    pub fn state(&self) -> RegionState {
        self.cursor.state
    }

    pub fn index(&self) -> usize {
        self.cursor.index
    }

    pub fn order(&self) -> TraversalOrder {
        self.cursor.order
    }

    pub fn region(&self) -> Region {
        self.cursor.region
    }

    pub fn current(&self) -> Option<(usize, usize)> {
        self.cursor.last
    }

    /// Yield the next element, failing once the region is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::IteratorExhausted`] after the last element.
    pub fn advance(&mut self) -> MatrixResult<RegionEntry> {
        let (row, col) = self.cursor.step().ok_or(MatrixError::IteratorExhausted)?;
        let value = self.matrix.get(row, col)?;
        Ok(RegionEntry { row, col, value })
    }

    /// Overwrite the element most recently yielded.
    ///
    /// Goes through [`Matrix::set`], so the usual bounds check applies.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::NoCurrentElement`] before the first advance.
    pub fn set(&mut self, value: f64) -> MatrixResult<()> {
        let (row, col) = self.cursor.last.ok_or(MatrixError::NoCurrentElement)?;
        self.matrix.set(row, col, value)
    }
}

impl<'a, M: Matrix + ?Sized> Iterator for RegionIterMut<'a, M> {
    type Item = RegionEntry;

    fn next(&mut self) -> Option<Self::Item> {
        match self.advance() {
            Ok(entry) => Some(entry),
            Err(_) => {
                self.cursor.finish();
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.cursor.remaining();
        (remaining, Some(remaining))
    }
}

impl<'a, M: Matrix + ?Sized> ExactSizeIterator for RegionIterMut<'a, M> {}

impl<'a, M: Matrix + ?Sized> FusedIterator for RegionIterMut<'a, M> {}

impl<'a, M: Matrix + ?Sized> fmt::Debug for RegionIterMut<'a, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionIterMut")
            .field("shape", &self.matrix.shape())
            .field("cursor", &self.cursor)
            .finish()
    }
}

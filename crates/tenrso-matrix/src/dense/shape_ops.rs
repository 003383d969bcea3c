//! [`Matrix`] implementation for `DenseMatrix`, including reshape
//!
//! Reshape follows the [`ReshapePlan`] computed from the current capacity:
//! an in-place plan reuses the buffer, a reallocating plan swaps in a new
//! zeroed buffer of exactly `rows * cols` elements. In both cases the
//! preserved block is moved row by row so each value keeps its `(row, col)`.

use super::types::DenseMatrix;
use crate::error::MatrixResult;
use crate::matrix::Matrix;
use crate::reshape::ReshapePlan;
use crate::types::MatrixShape;

impl Matrix for DenseMatrix {
    fn shape(&self) -> MatrixShape {
        self.shape
    }

    fn get(&self, row: usize, col: usize) -> MatrixResult<f64> {
        let idx = self.index_of(row, col)?;
        Ok(self.data[idx])
    }

    fn set(&mut self, row: usize, col: usize, val: f64) -> MatrixResult<()> {
        let idx = self.index_of(row, col)?;
        self.data[idx] = val;
        Ok(())
    }

    fn reshape(&mut self, rows: usize, cols: usize, save_values: bool) -> MatrixResult<()> {
        let target = MatrixShape::checked(rows, cols)?;
        let plan = ReshapePlan::new(self.shape, target, self.data.len(), save_values);

        match plan {
            ReshapePlan::InPlace { preserve } => {
                tracing::trace!(from = %self.shape, to = %target, ?preserve, "in-place reshape");
                if let Some(block) = preserve {
                    relocate_in_place(&mut self.data, self.shape.cols, target.cols, block);
                }
            }
            ReshapePlan::Reallocate { preserve } => {
                tracing::debug!(
                    from = %self.shape,
                    to = %target,
                    capacity = self.data.len(),
                    ?preserve,
                    "reshape reallocating storage"
                );
                let mut data = vec![0.0; target.num_elements()];
                if let Some(block) = preserve {
                    for r in 0..block.rows {
                        let src = r * self.shape.cols;
                        let dst = r * target.cols;
                        data[dst..dst + block.cols].copy_from_slice(&self.data[src..src + block.cols]);
                    }
                }
                self.data = data;
            }
        }

        self.shape = target;
        Ok(())
    }
}

/// Move the top-left `block` from a row stride of `old_cols` to `new_cols`
/// inside the same buffer.
///
/// Shrinking the stride moves rows front to back, growing it back to front,
/// so no row is overwritten before it has been moved.
fn relocate_in_place(data: &mut [f64], old_cols: usize, new_cols: usize, block: MatrixShape) {
    let move_row = |data: &mut [f64], r: usize| {
        let src = r * old_cols;
        data.copy_within(src..src + block.cols, r * new_cols);
    };

    if new_cols < old_cols {
        for r in 0..block.rows {
            move_row(data, r);
        }
    } else if new_cols > old_cols {
        for r in (0..block.rows).rev() {
            move_row(data, r);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatrixError;

    fn numbered(rows: usize, cols: usize) -> DenseMatrix {
        DenseMatrix::from_fn(rows, cols, |r, c| (r * cols + c) as f64)
    }

    fn assert_preserved(before: &DenseMatrix, after: &DenseMatrix) {
        let keep = before.shape().overlap(after.shape());
        for r in 0..keep.rows {
            for c in 0..keep.cols {
                assert_eq!(
                    before.get(r, c).unwrap(),
                    after.get(r, c).unwrap(),
                    "value moved at ({}, {})",
                    r,
                    c
                );
            }
        }
    }

    #[test]
    fn test_get_set() {
        let mut m = DenseMatrix::zeros(2, 3);
        m.set(1, 2, 4.25).unwrap();
        assert_eq!(m.get(1, 2).unwrap(), 4.25);
        assert_eq!(m.get(0, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_get_set_out_of_bounds() {
        let mut m = DenseMatrix::zeros(2, 3);
        assert_eq!(
            m.get(2, 0),
            Err(MatrixError::index_out_of_bounds(2, 0, 2, 3))
        );
        assert_eq!(
            m.set(0, 3, 1.0),
            Err(MatrixError::index_out_of_bounds(0, 3, 2, 3))
        );
        // no implicit resize
        assert_eq!(m.shape(), MatrixShape { rows: 2, cols: 3 });
    }

    #[test]
    fn test_spare_capacity_is_not_addressable() {
        let mut m = DenseMatrix::with_capacity(2, 2, 9);
        assert!(m.get(2, 0).is_err());
        assert!(m.set(0, 2, 1.0).is_err());
    }

    #[test]
    fn test_reshape_grow_reallocates_and_preserves() {
        let before = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
        let mut m = before.clone();
        m.reshape(4, 4, true).unwrap();
        assert_eq!(m.num_elements(), 16);
        assert_eq!(m.capacity(), 16);
        assert_preserved(&before, &m);
    }

    #[test]
    fn test_reshape_shrink_in_place_preserves() {
        let before = numbered(3, 3);
        let mut m = before.clone();
        m.reshape(2, 2, true).unwrap();
        assert_eq!(m.capacity(), 9);
        assert_eq!(m.as_slice(), &[0.0, 1.0, 3.0, 4.0]);
        assert_preserved(&before, &m);
    }

    #[test]
    fn test_reshape_wider_in_place_preserves() {
        let before = numbered(4, 2);
        let mut m = before.clone();
        m.reshape(2, 4, true).unwrap();
        assert_eq!(m.capacity(), 8);
        assert_preserved(&before, &m);
        assert_eq!(m.get(1, 0).unwrap(), 2.0);
        assert_eq!(m.get(1, 1).unwrap(), 3.0);
    }

    #[test]
    fn test_reshape_in_spare_capacity_preserves() {
        let mut m = DenseMatrix::with_capacity(2, 2, 20);
        m.fill_with(|r, c| (r * 2 + c + 1) as f64);
        let before = m.clone();
        m.reshape(3, 5, true).unwrap();
        assert_eq!(m.capacity(), 20);
        assert_preserved(&before, &m);
    }

    #[test]
    fn test_reshape_without_saving_keeps_shape_contract() {
        let mut m = numbered(3, 3);
        m.reshape(5, 1, false).unwrap();
        assert_eq!(m.num_rows(), 5);
        assert_eq!(m.num_cols(), 1);
        assert_eq!(m.num_elements(), 5);
        assert!(m.get(4, 0).is_ok());
        assert!(m.get(0, 1).is_err());
    }

    #[test]
    fn test_reshape_to_empty_and_back() {
        let mut m = numbered(2, 2);
        m.reshape(0, 0, true).unwrap();
        assert_eq!(m.num_elements(), 0);
        m.reshape(3, 3, false).unwrap();
        assert_eq!(m.num_elements(), 9);
    }

    #[test]
    fn test_reshape_invalid_dimension_leaves_matrix_untouched() {
        let mut m = numbered(2, 2);
        assert_eq!(
            m.reshape(usize::MAX, 3, true),
            Err(MatrixError::InvalidDimension {
                rows: usize::MAX,
                cols: 3
            })
        );
        assert_eq!(m, numbered(2, 2));
    }
}

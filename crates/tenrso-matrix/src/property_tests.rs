//! Property-based tests for the matrix contract
//!
//! This module uses proptest to check the shape, preservation, bounds and
//! traversal laws across randomly generated shapes and regions.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::{DenseMatrix, Matrix, MatrixError, Region, RegionIter, TraversalOrder};
    use proptest::prelude::*;

    fn dim() -> impl Strategy<Value = usize> {
        0usize..12
    }

    fn order_strategy() -> impl Strategy<Value = TraversalOrder> {
        prop_oneof![
            Just(TraversalOrder::RowMajor),
            Just(TraversalOrder::ColumnMajor)
        ]
    }

    /// A non-empty shape together with a region that fits inside it
    fn shape_and_region() -> impl Strategy<Value = (usize, usize, Region)> {
        (1usize..10, 1usize..10).prop_flat_map(|(rows, cols)| {
            (0..rows, 0..cols).prop_flat_map(move |(min_row, min_col)| {
                (min_row..rows, min_col..cols).prop_map(move |(max_row, max_col)| {
                    (rows, cols, Region::new(min_row, min_col, max_row, max_col))
                })
            })
        })
    }

    fn numbered(rows: usize, cols: usize) -> DenseMatrix {
        DenseMatrix::from_fn(rows, cols, |r, c| (r * 1000 + c) as f64)
    }

    proptest! {
        #[test]
        fn prop_reshape_postcondition(
            r0 in dim(), c0 in dim(), r1 in dim(), c1 in dim(), save in any::<bool>()
        ) {
            let mut m = DenseMatrix::zeros(r0, c0);
            m.reshape(r1, c1, save).unwrap();
            prop_assert_eq!(m.num_rows(), r1);
            prop_assert_eq!(m.num_cols(), c1);
            prop_assert_eq!(m.num_elements(), r1 * c1);
        }

        #[test]
        fn prop_reshape_preserves_overlap(
            r0 in dim(), c0 in dim(), r1 in dim(), c1 in dim()
        ) {
            let before = numbered(r0, c0);
            let mut m = before.clone();
            m.reshape(r1, c1, true).unwrap();

            for r in 0..r0.min(r1) {
                for c in 0..c0.min(c1) {
                    prop_assert_eq!(m.get(r, c).unwrap(), before.get(r, c).unwrap());
                }
            }
        }

        #[test]
        fn prop_reshape_chain_preserves_overlap(
            shapes in prop::collection::vec((dim(), dim()), 1..5)
        ) {
            // track the block that survived every reshape so far
            let mut m = numbered(6, 6);
            let mut keep = (6usize, 6usize);
            for (rows, cols) in shapes {
                m.reshape(rows, cols, true).unwrap();
                keep = (keep.0.min(rows), keep.1.min(cols));
            }
            for r in 0..keep.0 {
                for c in 0..keep.1 {
                    prop_assert_eq!(m.get(r, c).unwrap(), (r * 1000 + c) as f64);
                }
            }
        }

        #[test]
        fn prop_out_of_bounds_rejected(
            rows in dim(), cols in dim(), dr in 0usize..5, dc in 0usize..5
        ) {
            let mut m = DenseMatrix::zeros(rows, cols);
            let row = rows + dr;
            let get_oob = matches!(m.get(row, 0), Err(MatrixError::IndexOutOfBounds { .. }));
            let set_oob = matches!(m.set(row, 0, 1.0), Err(MatrixError::IndexOutOfBounds { .. }));
            prop_assert!(get_oob);
            prop_assert!(set_oob);

            let col = cols + dc;
            let get_oob = matches!(m.get(0, col), Err(MatrixError::IndexOutOfBounds { .. }));
            let set_oob = matches!(m.set(0, col, 1.0), Err(MatrixError::IndexOutOfBounds { .. }));
            prop_assert!(get_oob);
            prop_assert!(set_oob);
        }

        #[test]
        fn prop_set_touches_one_element(
            (rows, cols, region) in shape_and_region(), value in -1e6f64..1e6
        ) {
            let before = numbered(rows, cols);
            let mut m = before.clone();
            m.set(region.min_row, region.min_col, value).unwrap();

            for r in 0..rows {
                for c in 0..cols {
                    let expected = if (r, c) == (region.min_row, region.min_col) {
                        value
                    } else {
                        before.get(r, c).unwrap()
                    };
                    prop_assert_eq!(m.get(r, c).unwrap(), expected);
                }
            }
        }

        #[test]
        fn prop_region_completeness(
            (rows, cols, region) in shape_and_region(), order in order_strategy()
        ) {
            let m = numbered(rows, cols);
            let it = RegionIter::new(&m, order, region).unwrap();
            prop_assert_eq!(it.len(), region.len());

            let entries: Vec<_> = it.collect();
            prop_assert_eq!(
                entries.len(),
                (region.max_row - region.min_row + 1) * (region.max_col - region.min_col + 1)
            );

            let seen: HashSet<(usize, usize)> = entries.iter().map(|e| (e.row, e.col)).collect();
            prop_assert_eq!(seen.len(), entries.len());
            for r in region.min_row..=region.max_row {
                for c in region.min_col..=region.max_col {
                    prop_assert!(seen.contains(&(r, c)));
                }
            }
            for e in &entries {
                prop_assert_eq!(e.value, m.get(e.row, e.col).unwrap());
            }
        }

        #[test]
        fn prop_region_order(
            (rows, cols, region) in shape_and_region(), order in order_strategy()
        ) {
            let m = numbered(rows, cols);
            let entries: Vec<_> = RegionIter::new(&m, order, region).unwrap().collect();

            prop_assert_eq!((entries[0].row, entries[0].col), (region.min_row, region.min_col));
            let last = entries[entries.len() - 1];
            prop_assert_eq!((last.row, last.col), (region.max_row, region.max_col));

            for pair in entries.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                let ok = match order {
                    TraversalOrder::RowMajor => {
                        (a.row == b.row && b.col == a.col + 1)
                            || (b.row == a.row + 1 && b.col == region.min_col)
                    }
                    TraversalOrder::ColumnMajor => {
                        (a.col == b.col && b.row == a.row + 1)
                            || (b.col == a.col + 1 && b.row == region.min_row)
                    }
                };
                prop_assert!(ok, "bad step {:?} -> {:?}", (a.row, a.col), (b.row, b.col));
            }
        }

        #[test]
        fn prop_region_past_bounds_rejected(
            rows in 1usize..8, cols in 1usize..8, extra in 0usize..4
        ) {
            let m = DenseMatrix::zeros(rows, cols);
            let err = m.iterator(true, 0, 0, rows + extra, cols - 1).unwrap_err();
            let is_invalid_region = matches!(err, MatrixError::InvalidRegion { .. });
            prop_assert!(is_invalid_region);
            prop_assert!(m.iterator(false, 0, 0, rows - 1, cols + extra).is_err());
        }
    }
}

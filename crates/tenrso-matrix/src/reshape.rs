//! Reshape planning shared by all storage variants
//!
//! A reshape decides two things independently of how a variant stores its
//! elements: whether the existing backing storage is large enough, and which
//! block of old values has to survive. [`ReshapePlan`] captures that
//! decision; the variant then carries it out against its own storage.
//!
//! # Examples
//!
//! ```
//! use tenrso_matrix::{MatrixShape, ReshapePlan};
//!
//! let current = MatrixShape { rows: 2, cols: 2 };
//! let target = MatrixShape { rows: 4, cols: 4 };
//!
//! let plan = ReshapePlan::new(current, target, 4, true);
//! assert_eq!(
//!     plan,
//!     ReshapePlan::Reallocate { preserve: Some(MatrixShape { rows: 2, cols: 2 }) }
//! );
//! ```

use crate::types::MatrixShape;

/// What a variant has to do to move from one shape to another.
///
/// `preserve` is the top-left block whose values must keep their `(row, col)`
/// positions. It is `None` when values need not be kept, either because the
/// caller did not ask for it or because the block is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReshapePlan {
    /// Existing storage holds the new shape; nothing is allocated
    InPlace { preserve: Option<MatrixShape> },
    /// Storage is too small; a new buffer of the target size is needed
    Reallocate { preserve: Option<MatrixShape> },
}

impl ReshapePlan {
    /// Plan a reshape from `current` to `target` given the storage `capacity`
    /// (in elements).
    pub fn new(
        current: MatrixShape,
        target: MatrixShape,
        capacity: usize,
        save_values: bool,
    ) -> Self {
        let overlap = current.overlap(target);
        let preserve = if save_values && !overlap.is_empty() {
            Some(overlap)
        } else {
            None
        };

        if target.num_elements() <= capacity {
            ReshapePlan::InPlace { preserve }
        } else {
            ReshapePlan::Reallocate { preserve }
        }
    }

    /// Check if the plan requires new storage
    pub fn allocates(&self) -> bool {
        matches!(self, ReshapePlan::Reallocate { .. })
    }

    /// Block of values that must survive the reshape
    pub fn preserve(&self) -> Option<MatrixShape> {
        match self {
            ReshapePlan::InPlace { preserve } | ReshapePlan::Reallocate { preserve } => *preserve,
        }
    }
}

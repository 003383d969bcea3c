//! Row-major dense matrix
//!
//! The reference [`Matrix`](crate::Matrix) variant, organized into
//! functional sub-modules.

// Core type definition
pub mod types;

// Operation modules
mod creation;
mod shape_ops;

// Supporting modules
pub mod densematrix_traits;

pub use types::DenseMatrix;

//! # tenrso-matrix
//!
//! Row/column addressable `f64` matrix contract and sub-region traversal for TenRSo.
//!
//! This crate provides the shape and traversal layer every concrete matrix
//! storage in the TenRSo stack builds on:
//!
//! - **Matrix contract** ([`Matrix`]): dimensions, checked element access,
//!   reshape with optional value preservation, logical element count
//! - **Region iterators** ([`RegionIter`], [`RegionIterMut`]): walk an
//!   inclusive rectangular sub-region in row-major or column-major order
//! - **Reshape planning** ([`ReshapePlan`]): decides when storage must be
//!   reallocated and which block of values survives
//! - **Dense row-major storage** ([`DenseMatrix`]): the reference variant
//!
//! ## Core Principles
//!
//! ### Indexing
//!
//! Rows and columns are 0-based. Every access through [`Matrix`] is
//! bounds-checked and reports [`MatrixError::IndexOutOfBounds`]; nothing is
//! clamped and nothing is resized implicitly.
//!
//! ### Element Count
//!
//! [`Matrix::num_elements`] is always `num_rows() * num_cols()`, the logical
//! count. Spare capacity held by a variant is never visible through it.
//!
//! ### Safety
//!
//! No unsafe code. Region iterators borrow the matrix, so a reshape cannot
//! invalidate a live iterator.
//!
//! ## Quick Start
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix};
//!
//! let mut m = DenseMatrix::from_fn(3, 3, |r, c| (r * 3 + c) as f64);
//! assert_eq!(m.num_elements(), 9);
//!
//! // Row-major walk over rows 0..=1, cols 1..=2
//! let values: Vec<f64> = m.iterator(true, 0, 1, 1, 2).unwrap().map(|e| e.value).collect();
//! assert_eq!(values, vec![1.0, 2.0, 4.0, 5.0]);
//!
//! // Grow, keeping the overlapping block in place
//! m.reshape(4, 4, true).unwrap();
//! assert_eq!(m.get(2, 2).unwrap(), 8.0);
//! ```
//!
//! ## Reshape
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix};
//!
//! let mut m = DenseMatrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! m.reshape(2, 2, false).unwrap();
//! m.reshape(4, 4, true).unwrap();
//!
//! assert_eq!(m.get(0, 0).unwrap(), 1.0);
//! assert_eq!(m.get(0, 1).unwrap(), 2.0);
//! assert_eq!(m.get(1, 0).unwrap(), 3.0);
//! assert_eq!(m.get(1, 1).unwrap(), 4.0);
//! ```
//!
//! ## Error Handling
//!
//! Operations return [`MatrixResult`]:
//!
//! ```
//! use tenrso_matrix::{DenseMatrix, Matrix, MatrixError};
//!
//! let m = DenseMatrix::zeros(2, 3);
//!
//! // Out of range element
//! assert!(matches!(m.get(0, 3), Err(MatrixError::IndexOutOfBounds { .. })));
//!
//! // Region past the last row
//! assert!(matches!(m.iterator(true, 0, 0, 2, 0), Err(MatrixError::InvalidRegion { .. })));
//! ```
//!
//! ## Logging
//!
//! Reallocating reshapes emit `tracing` events at `debug` level; in-place
//! reshapes and iterator construction at `trace`. Install any `tracing`
//! subscriber to see them.

#![deny(warnings)]

pub mod dense;
pub mod error;
pub mod iterators;
pub mod matrix;
pub mod reshape;
pub mod types;

#[cfg(test)]
mod property_tests;

pub use dense::DenseMatrix;
pub use error::{MatrixError, MatrixResult};
pub use iterators::{RegionEntry, RegionIter, RegionIterMut, RegionState};
pub use matrix::Matrix;
pub use reshape::ReshapePlan;
pub use types::{MatrixShape, Region, TraversalOrder, MAX_ELEMENTS};

//! Small ndarray-like types used throughout the crate.
//!
//! `Array2` is the dataset type accepted by the scalers (rows are samples,
//! columns are features) and `Array1` holds a single column. Both convert to
//! and from `ndarray` where callers already work with it.
pub mod matrix;
pub mod vector;

pub use matrix::{Array2, ShapeError};
pub use vector::Array1;

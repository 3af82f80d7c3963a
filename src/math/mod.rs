//! Small ndarray-like matrix type used throughout the crate.
//!
//! Provides a row-major `Matrix<T>` container with minimal convenience
//! methods, generic over the [`Element`] types the filtering code needs
//! (`f64` and `i32`). Intentionally small to keep the crate portable and
//! easy to test.
pub mod element;
pub mod matrix;

pub use element::Element;
pub use matrix::{Matrix, ShapeError, ShapeMismatchError};

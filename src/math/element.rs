use std::fmt;
use std::ops::Mul;

use num_traits::Zero;

/// Numeric element type a [`Matrix`](crate::math::Matrix) can hold.
///
/// Implemented for `f64` (real samples) and `i32` (integer samples). The
/// conversions route every convolution accumulation through `f64` so the
/// integer variant does not truncate until the final write-back.
pub trait Element:
    Copy + PartialEq + Zero + Mul<Output = Self> + fmt::Display + Send + Sync + 'static
{
    /// Widen an integer scalar into this element type.
    fn from_scalar(k: i32) -> Self;

    /// Widen this element into the accumulation domain.
    fn to_accum(self) -> f64;

    /// Narrow an accumulated value back into this element type.
    /// Integer types truncate toward zero.
    fn from_accum(acc: f64) -> Self;
}

impl Element for f64 {
    fn from_scalar(k: i32) -> Self {
        k as f64
    }

    fn to_accum(self) -> f64 {
        self
    }

    fn from_accum(acc: f64) -> Self {
        acc
    }
}

impl Element for i32 {
    fn from_scalar(k: i32) -> Self {
        k
    }

    fn to_accum(self) -> f64 {
        self as f64
    }

    fn from_accum(acc: f64) -> Self {
        acc as i32
    }
}

//! Floating-point types a window can hold
//!
//! Windows, scorers and detectors are generic over [`Numeric`] so the same
//! code runs on `f32` sensor feeds and `f64` metrics. Configuration values
//! (thresholds) are always `f64` and are narrowed on the way in.

use num_traits::Float;
use std::fmt::{Debug, Display};

/// Floating-point sample type
pub trait Numeric: Float + Debug + Display + Send + Sync + 'static {
    /// Convert from `f64`, rounding to the nearest representable value
    fn from_f64_lossy(value: f64) -> Self;

    /// Widen to `f64`
    fn to_f64_lossy(self) -> f64;

    /// Convert a sample count
    fn from_count(count: usize) -> Self {
        Self::from_f64_lossy(count as f64)
    }
}

impl Numeric for f64 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self
    }
}

impl Numeric for f32 {
    #[inline]
    fn from_f64_lossy(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn to_f64_lossy(self) -> f64 {
        self as f64
    }
}

//! Snapshot of window statistics

use anomaly_core::Numeric;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moments of a non-empty window at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowStats<T> {
    /// Number of samples in the window
    pub len: usize,
    /// Arithmetic mean
    pub mean: T,
    /// Population variance, never negative
    pub variance: T,
    /// Population standard deviation
    pub stddev: T,
}

impl<T: Numeric> WindowStats<T> {
    /// Derive the moments from a count and running sums
    ///
    /// Cancellation in `sum_sq / n - mean^2` can leave a tiny negative
    /// variance for near-constant windows; it is clamped to zero.
    pub fn from_sums(len: usize, sum: T, sum_sq: T) -> Option<Self> {
        if len == 0 {
            return None;
        }

        let n = T::from_count(len);
        let mean = sum / n;
        let raw = sum_sq / n - mean * mean;
        let variance = if raw < T::zero() { T::zero() } else { raw };

        Some(Self {
            len,
            mean,
            variance,
            stddev: variance.sqrt(),
        })
    }

    /// Moments of a window holding `len` copies of `value`
    pub fn constant(len: usize, value: T) -> Self {
        Self {
            len,
            mean: value,
            variance: T::zero(),
            stddev: T::zero(),
        }
    }

    /// True when the standard deviation is zero
    pub fn is_degenerate(&self) -> bool {
        self.stddev == T::zero()
    }
}

impl<T: fmt::Display> fmt::Display for WindowStats<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WindowStats {{ len: {}, mean: {}, stddev: {} }}",
            self.len, self.mean, self.stddev
        )
    }
}

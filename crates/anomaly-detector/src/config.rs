//! Detector configuration

use anomaly_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default number of samples in the baseline window
pub const DEFAULT_WINDOW_CAPACITY: usize = 50;

/// Default Z-score threshold
pub const DEFAULT_THRESHOLD: f64 = 3.0;

/// Tunables of a [`StreamDetector`](crate::StreamDetector)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Number of most recent samples forming the baseline
    pub window_capacity: usize,
    /// Absolute Z-score a sample must strictly exceed to be anomalous
    pub threshold: f64,
    /// Evictions between recomputations of the window sums (defaults to `window_capacity`)
    pub recompute_interval: Option<usize>,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_capacity: DEFAULT_WINDOW_CAPACITY,
            threshold: DEFAULT_THRESHOLD,
            recompute_interval: None,
        }
    }
}

impl DetectorConfig {
    /// Configuration with the given capacity and threshold
    pub fn new(window_capacity: usize, threshold: f64) -> Self {
        Self {
            window_capacity,
            threshold,
            recompute_interval: None,
        }
    }

    /// Override the recompute cadence
    pub fn with_recompute_interval(mut self, interval: usize) -> Self {
        self.recompute_interval = Some(interval);
        self
    }

    /// Check every tunable, failing on the first bad one
    pub fn validate(&self) -> Result<()> {
        if self.window_capacity == 0 {
            return Err(Error::invalid_config("window_capacity must be positive"));
        }
        if !(self.threshold > 0.0) || !self.threshold.is_finite() {
            return Err(Error::invalid_config(format!(
                "threshold must be positive and finite, got {}",
                self.threshold
            )));
        }
        if self.recompute_interval == Some(0) {
            return Err(Error::invalid_config("recompute_interval must be positive"));
        }
        Ok(())
    }

    /// Recompute cadence actually used by the window
    pub fn effective_recompute_interval(&self) -> usize {
        self.recompute_interval.unwrap_or(self.window_capacity)
    }
}

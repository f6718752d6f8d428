//! Core traits for streaming anomaly detection

use anomaly_core::{AnomalyEvent, Numeric, Observation};

/// Properties of a detector that don't depend on the data seen so far
pub trait DetectorProperties {
    /// Get the name of the detection algorithm
    fn algorithm_name(&self) -> &'static str;

    /// Number of samples consumed before the first one is scored
    fn minimum_sample_size(&self) -> usize;
}

/// Online detection, one sample at a time, in arrival order
///
/// Implementations assign indices sequentially, so every sample must be
/// fed exactly once and in order.
pub trait OnlineDetector<T: Numeric>: DetectorProperties {
    /// Process a single point, returning everything known about it
    fn observe(&mut self, value: T) -> Observation<T>;

    /// Process a single point, returning an event only if it is anomalous
    fn process(&mut self, value: T) -> Option<AnomalyEvent<T>> {
        self.observe(value).anomaly()
    }

    /// Number of samples processed so far
    fn samples_seen(&self) -> u64;
}

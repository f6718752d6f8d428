//! Driving a whole stream through a detector

use crate::sink::AnomalySink;
use crate::traits::OnlineDetector;
use anomaly_core::Numeric;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Counts gathered while running a stream
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Samples fed to the detector
    pub samples: u64,
    /// Samples scored against a full window
    pub scored: u64,
    /// Samples classified anomalous
    pub anomalies: u64,
}

impl RunSummary {
    /// Fraction of scored samples that were anomalous
    pub fn anomaly_rate(&self) -> f64 {
        if self.scored == 0 {
            0.0
        } else {
            self.anomalies as f64 / self.scored as f64
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Stream Run Summary:")?;
        writeln!(f, "  Samples: {}", self.samples)?;
        writeln!(f, "  Scored: {}", self.scored)?;
        write!(
            f,
            "  Anomalies: {} ({:.2}% of scored)",
            self.anomalies,
            self.anomaly_rate() * 100.0
        )
    }
}

/// Feed every value of `source` through `detector`, forwarding output to `sink`
///
/// Values are processed strictly in iteration order. For each value the sink
/// sees the observation first, then the anomaly event if there is one.
pub fn run<T, D, I, S>(detector: &mut D, source: I, sink: &mut S) -> RunSummary
where
    T: Numeric,
    D: OnlineDetector<T> + ?Sized,
    I: IntoIterator<Item = T>,
    S: AnomalySink<T> + ?Sized,
{
    let mut summary = RunSummary::default();

    for value in source {
        let observation = detector.observe(value);
        summary.samples += 1;
        if observation.is_scored() {
            summary.scored += 1;
        }

        sink.on_observation(&observation);
        if let Some(event) = observation.anomaly() {
            summary.anomalies += 1;
            sink.on_anomaly(event);
        }
    }

    debug!(
        algorithm = detector.algorithm_name(),
        samples = summary.samples,
        scored = summary.scored,
        anomalies = summary.anomalies,
        "stream run finished"
    );

    summary
}

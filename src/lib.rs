//! Sliding-window Z-score anomaly detection
//!
//! This crate re-exports the workspace crates and adds [`MonitorConfig`], the
//! operator-facing configuration that ties a detector to a stream source.
//!
//! # Crates
//!
//! - `anomaly-core`: errors, numeric trait, event types
//! - `anomaly-window`: [`RingWindow`] with incremental mean and variance
//! - `anomaly-detector`: [`ZScoreScorer`], [`StreamDetector`], sinks, [`run`]
//! - `anomaly-stream`: [`SyntheticStream`] and [`Paced`]
//!
//! # Example
//!
//! ```rust
//! use windowed_anomaly::{run, CollectingSink, MonitorConfig, StreamDetector, SyntheticStream};
//!
//! let config = MonitorConfig::from_json_str(
//!     r#"{ "detector": { "window_capacity": 50, "threshold": 3.0 },
//!          "stream": { "size": 500, "seed": 17 } }"#,
//! )
//! .unwrap();
//!
//! let mut detector: StreamDetector = StreamDetector::new(config.detector.clone()).unwrap();
//! let stream = SyntheticStream::new(config.stream.clone()).unwrap();
//! let mut sink: CollectingSink<f64> = CollectingSink::new();
//!
//! let summary = run(&mut detector, stream.values(), &mut sink);
//! assert_eq!(summary.samples, 500);
//! assert_eq!(summary.scored, 450);
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

pub use anomaly_core::{
    AnomalyEvent, DetectionResult, DetectorState, Error, Numeric, Observation, Result, Sample,
};
pub use anomaly_detector::{
    run, z_score, AnomalySink, ChannelSink, CollectingSink, DetectorConfig, DetectorProperties,
    FnSink, NullSink, OnlineDetector, RunSummary, StreamDetector, TracingSink, ZScoreScorer,
    DEFAULT_THRESHOLD, DEFAULT_WINDOW_CAPACITY,
};
pub use anomaly_stream::{generate, Paced, PacedExt, SyntheticConfig, SyntheticPoint, SyntheticStream};
pub use anomaly_window::{RingWindow, WindowStats};

/// Everything needed to monitor one synthetic metric stream
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Detector tunables (`window_capacity`, `threshold`)
    pub detector: DetectorConfig,
    /// Stream source parameters (`size` is the stream length)
    pub stream: SyntheticConfig,
    /// Delay between samples in milliseconds; zero replays as fast as possible
    pub pace_ms: u64,
}

impl MonitorConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        debug!(path = %path.display(), "loading monitor configuration");
        Self::from_json_str(&text)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate detector and stream sections
    pub fn validate(&self) -> Result<()> {
        self.detector.validate()?;
        self.stream.validate()
    }

    /// Total number of samples the stream produces
    pub fn stream_size(&self) -> usize {
        self.stream.size
    }

    /// Delay between samples
    pub fn pace(&self) -> Duration {
        Duration::from_millis(self.pace_ms)
    }
}

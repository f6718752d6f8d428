//! Streaming Z-score anomaly detection
//!
//! This crate scores each sample of a stream against the window of samples
//! that preceded it and flags the ones lying more than `threshold` standard
//! deviations from the window mean.
//!
//! # Components
//!
//! - [`ZScoreScorer`]: pure classification of one value against a full window
//! - [`StreamDetector`]: owns the window, assigns indices, scores and emits events
//! - [`AnomalySink`]: downstream consumers (logging, collection, channels)
//! - [`run`]: drives a whole stream through a detector into a sink
//!
//! ## Usage
//!
//! ```rust
//! use anomaly_detector::{DetectorConfig, StreamDetector};
//!
//! let config = DetectorConfig {
//!     window_capacity: 4,
//!     threshold: 2.0,
//!     ..Default::default()
//! };
//! let mut detector: StreamDetector = StreamDetector::new(config).unwrap();
//!
//! let events: Vec<_> = [10.0, 10.0, 10.0, 10.0, 100.0]
//!     .into_iter()
//!     .filter_map(|value| detector.process(value))
//!     .collect();
//!
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].index, 4);
//! ```

pub mod config;
pub mod detector;
pub mod runner;
pub mod scorer;
pub mod sink;
pub mod traits;

pub use config::{DetectorConfig, DEFAULT_THRESHOLD, DEFAULT_WINDOW_CAPACITY};
pub use detector::StreamDetector;
pub use runner::{run, RunSummary};
pub use scorer::{z_score, ZScoreScorer};
pub use sink::{AnomalySink, ChannelSink, CollectingSink, FnSink, NullSink, TracingSink};
pub use traits::{DetectorProperties, OnlineDetector};

pub use anomaly_core::{
    AnomalyEvent, DetectionResult, DetectorState, Error, Numeric, Observation, Result, Sample,
};

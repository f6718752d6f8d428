//! Value objects produced while scoring a stream

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single value paired with its arrival index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample<T> {
    /// Position in the stream, assigned by the detector starting at 0
    pub index: u64,
    /// Observed value
    pub value: T,
}

impl<T> Sample<T> {
    /// Create a new sample
    pub fn new(index: u64, value: T) -> Self {
        Self { index, value }
    }
}

/// Classification of one sample scored against a full window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult<T> {
    /// Position in the stream
    pub index: u64,
    /// Observed value
    pub value: T,
    /// Standard deviations from the window mean; `±inf` against a constant window
    pub z_score: T,
    /// Whether `|z_score|` strictly exceeded the threshold
    pub is_anomaly: bool,
}

impl<T: Copy> DetectionResult<T> {
    /// The anomaly event for this result, if it was classified positive
    pub fn to_event(&self) -> Option<AnomalyEvent<T>> {
        self.is_anomaly.then(|| AnomalyEvent {
            index: self.index,
            value: self.value,
            z_score: self.z_score,
        })
    }
}

/// A sample classified as anomalous
///
/// Emitted at most once per processed sample and handed to the consumer by value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnomalyEvent<T> {
    /// Position in the stream
    pub index: u64,
    /// Observed value
    pub value: T,
    /// Standard deviations from the window mean
    pub z_score: T,
}

impl<T: fmt::Display> fmt::Display for AnomalyEvent<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnomalyEvent {{ index: {}, value: {}, z_score: {} }}",
            self.index, self.value, self.z_score
        )
    }
}

/// Everything a detector knows about one processed sample
///
/// Sinks that render every point (not just anomalies) consume this.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Observation<T> {
    /// The window was still filling; the sample was not scored
    Filling(Sample<T>),
    /// The sample was scored against a full window
    Scored(DetectionResult<T>),
}

impl<T: Copy> Observation<T> {
    /// Position in the stream
    pub fn index(&self) -> u64 {
        match self {
            Self::Filling(sample) => sample.index,
            Self::Scored(result) => result.index,
        }
    }

    /// Observed value
    pub fn value(&self) -> T {
        match self {
            Self::Filling(sample) => sample.value,
            Self::Scored(result) => result.value,
        }
    }

    /// Z-score, if the sample was scored
    pub fn z_score(&self) -> Option<T> {
        match self {
            Self::Filling(_) => None,
            Self::Scored(result) => Some(result.z_score),
        }
    }

    /// Whether the sample was scored against a full window
    pub fn is_scored(&self) -> bool {
        matches!(self, Self::Scored(_))
    }

    /// Whether the sample was classified anomalous
    pub fn is_anomaly(&self) -> bool {
        matches!(self, Self::Scored(result) if result.is_anomaly)
    }

    /// The anomaly event for this observation, if any
    pub fn anomaly(&self) -> Option<AnomalyEvent<T>> {
        match self {
            Self::Filling(_) => None,
            Self::Scored(result) => result.to_event(),
        }
    }
}

/// Lifecycle of a stream detector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DetectorState {
    /// Fewer than `window_capacity` samples seen; nothing is scored
    Filling,
    /// Window full; every subsequent sample is scored
    Active,
}

impl fmt::Display for DetectorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetectorState::Filling => write!(f, "Filling"),
            DetectorState::Active => write!(f, "Active"),
        }
    }
}

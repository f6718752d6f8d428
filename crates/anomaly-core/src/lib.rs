//! Core types for windowed anomaly detection
//!
//! This crate holds the pieces shared by every other crate in the workspace:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`Numeric`]: the floating-point types a window can hold
//! - [`Sample`], [`DetectionResult`], [`AnomalyEvent`], [`Observation`]: the
//!   value objects produced as a stream is scored
//!
//! Nothing here allocates or holds state; the window and detector live in
//! `anomaly-window` and `anomaly-detector`.

pub mod error;
pub mod numeric;
pub mod types;

pub use error::{Error, Result};
pub use numeric::Numeric;
pub use types::{AnomalyEvent, DetectionResult, DetectorState, Observation, Sample};

//! Stream sources for exercising anomaly detectors
//!
//! - [`SyntheticStream`]: a sinusoidal or flat signal with Gaussian noise and
//!   randomly injected positive outliers, reproducible from a seed
//! - [`Paced`]: an iterator adapter that spaces items out in wall-clock time
//!
//! Both live on the source side of a detector; detectors never sleep or
//! generate data themselves.

pub mod pacing;
pub mod synthetic;

pub use pacing::{Paced, PacedExt};
pub use synthetic::{generate, SyntheticConfig, SyntheticPoint, SyntheticStream};

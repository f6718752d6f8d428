//! Synthetic metric stream
//!
//! Point `i` of a stream of `size` points sits at time
//! `t_i = time_span * i / (size - 1)` and takes the value
//!
//! ```text
//! signal(t_i) + Normal(0, noise_std) + (anomaly_magnitude with probability anomaly_probability)
//! ```
//!
//! where `signal` is `amplitude * sin(t)` for a seasonal stream and the
//! constant `baseline` otherwise.

use anomaly_core::{Error, Result};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Bernoulli, Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Parameters of a synthetic stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    /// Number of points generated
    pub size: usize,
    /// Sinusoidal signal when true, flat `baseline` when false
    pub seasonal: bool,
    /// Amplitude of the sinusoid
    pub amplitude: f64,
    /// Level of the flat signal
    pub baseline: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f64,
    /// Per-point probability of an injected outlier
    pub anomaly_probability: f64,
    /// Amount added to a point when an outlier is injected
    pub anomaly_magnitude: f64,
    /// Time covered by the stream; the sinusoid is evaluated on `[0, time_span]`
    pub time_span: f64,
    /// RNG seed; a random seed is drawn when absent
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            size: 1000,
            seasonal: true,
            amplitude: 10.0,
            baseline: 5.0,
            noise_std: 2.0,
            anomaly_probability: 0.02,
            anomaly_magnitude: 20.0,
            time_span: 100.0,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    /// Default configuration with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Check every parameter, failing on the first bad one
    pub fn validate(&self) -> Result<()> {
        if !(self.noise_std >= 0.0) || !self.noise_std.is_finite() {
            return Err(Error::invalid_config(format!(
                "noise_std must be finite and non-negative, got {}",
                self.noise_std
            )));
        }
        if !(0.0..=1.0).contains(&self.anomaly_probability) {
            return Err(Error::invalid_config(format!(
                "anomaly_probability must lie in [0, 1], got {}",
                self.anomaly_probability
            )));
        }
        for (name, value) in [
            ("amplitude", self.amplitude),
            ("baseline", self.baseline),
            ("anomaly_magnitude", self.anomaly_magnitude),
            ("time_span", self.time_span),
        ] {
            if !value.is_finite() {
                return Err(Error::invalid_config(format!("{name} must be finite, got {value}")));
            }
        }
        Ok(())
    }
}

/// One generated point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyntheticPoint {
    /// Position in the stream
    pub index: usize,
    /// Time coordinate of the point
    pub time: f64,
    /// Generated value
    pub value: f64,
    /// Whether an outlier was injected into this point
    pub injected: bool,
}

/// Lazy, finite synthetic stream
///
/// Owns its RNG, so two streams built from the same seeded configuration
/// yield identical points.
#[derive(Debug, Clone)]
pub struct SyntheticStream {
    config: SyntheticConfig,
    rng: ChaCha8Rng,
    noise: Normal<f64>,
    injection: Bernoulli,
    index: usize,
}

impl SyntheticStream {
    /// Create a stream from a validated configuration
    #[instrument(level = "debug", skip_all, fields(size = config.size, seed = ?config.seed))]
    pub fn new(config: SyntheticConfig) -> Result<Self> {
        config.validate()?;

        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| Error::invalid_config(format!("noise distribution: {e}")))?;
        let injection = Bernoulli::new(config.anomaly_probability)
            .map_err(|e| Error::invalid_config(format!("anomaly distribution: {e}")))?;

        let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
        debug!(seed, "synthetic stream seeded");

        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            noise,
            injection,
            index: 0,
        })
    }

    /// The configuration the stream was built from
    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Values only, dropping the injection markers
    pub fn values(self) -> impl Iterator<Item = f64> {
        self.map(|point| point.value)
    }

    fn time_at(&self, index: usize) -> f64 {
        if self.config.size > 1 {
            self.config.time_span * index as f64 / (self.config.size - 1) as f64
        } else {
            0.0
        }
    }

    fn signal_at(&self, time: f64) -> f64 {
        if self.config.seasonal {
            self.config.amplitude * time.sin()
        } else {
            self.config.baseline
        }
    }
}

impl Iterator for SyntheticStream {
    type Item = SyntheticPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.config.size {
            return None;
        }

        let index = self.index;
        self.index += 1;

        let time = self.time_at(index);
        let noise = self.noise.sample(&mut self.rng);
        let injected = self.injection.sample(&mut self.rng);
        let outlier = if injected {
            self.config.anomaly_magnitude
        } else {
            0.0
        };

        Some(SyntheticPoint {
            index,
            time,
            value: self.signal_at(time) + noise + outlier,
            injected,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.config.size - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SyntheticStream {}

/// Generate a whole stream eagerly
pub fn generate(config: SyntheticConfig) -> Result<Vec<f64>> {
    Ok(SyntheticStream::new(config)?.values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_matches_reference_parameters() {
        let config = SyntheticConfig::default();
        assert_eq!(config.size, 1000);
        assert!(config.seasonal);
        assert_eq!(config.noise_std, 2.0);
        assert_eq!(config.anomaly_probability, 0.02);
        assert_eq!(config.anomaly_magnitude, 20.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: SyntheticConfig =
            serde_json::from_str(r#"{ "size": 250, "seasonal": false, "seed": 8 }"#).unwrap();
        assert_eq!(config.size, 250);
        assert!(!config.seasonal);
        assert_eq!(config.seed, Some(8));
        assert_eq!(config.baseline, 5.0);
        assert_eq!(config.anomaly_probability, 0.02);
    }

    #[test]
    fn test_seeded_streams_are_reproducible() {
        let a: Vec<f64> = generate(SyntheticConfig::seeded(11)).unwrap();
        let b: Vec<f64> = generate(SyntheticConfig::seeded(11)).unwrap();
        let c: Vec<f64> = generate(SyntheticConfig::seeded(12)).unwrap();
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_time_axis_spans_range() {
        let stream = SyntheticStream::new(SyntheticConfig {
            size: 5,
            seed: Some(1),
            ..Default::default()
        })
        .unwrap();
        let times: Vec<f64> = stream.map(|p| p.time).collect();
        assert_eq!(times, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_noiseless_flat_stream() {
        let config = SyntheticConfig {
            size: 200,
            seasonal: false,
            noise_std: 0.0,
            anomaly_probability: 0.0,
            seed: Some(3),
            ..Default::default()
        };
        let values = generate(config).unwrap();
        assert!(values.iter().all(|&v| v == 5.0));
    }

    #[test]
    fn test_noiseless_seasonal_stream_follows_sine() {
        let config = SyntheticConfig {
            size: 101,
            noise_std: 0.0,
            anomaly_probability: 0.0,
            seed: Some(3),
            ..Default::default()
        };
        for point in SyntheticStream::new(config).unwrap() {
            assert_relative_eq!(point.value, 10.0 * (point.index as f64).sin(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_injection_marks_outliers() {
        let config = SyntheticConfig {
            size: 500,
            seasonal: false,
            noise_std: 0.0,
            anomaly_probability: 1.0,
            seed: Some(5),
            ..Default::default()
        };
        for point in SyntheticStream::new(config).unwrap() {
            assert!(point.injected);
            assert_eq!(point.value, 25.0);
        }
    }

    #[test]
    fn test_exact_size() {
        let mut stream = SyntheticStream::new(SyntheticConfig::seeded(9)).unwrap();
        assert_eq!(stream.len(), 1000);
        stream.next();
        assert_eq!(stream.len(), 999);
        assert_eq!(stream.count(), 999);
    }

    #[test]
    fn test_single_point_and_empty_streams() {
        let one = generate(SyntheticConfig {
            size: 1,
            seed: Some(0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(one.len(), 1);

        let none = generate(SyntheticConfig {
            size: 0,
            ..Default::default()
        })
        .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_invalid_parameters() {
        for config in [
            SyntheticConfig {
                noise_std: -1.0,
                ..Default::default()
            },
            SyntheticConfig {
                anomaly_probability: 1.5,
                ..Default::default()
            },
            SyntheticConfig {
                amplitude: f64::NAN,
                ..Default::default()
            },
        ] {
            assert!(matches!(
                SyntheticStream::new(config),
                Err(Error::InvalidConfig(_))
            ));
        }
    }
}

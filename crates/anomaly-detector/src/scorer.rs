//! Z-score classification against a full window

use anomaly_core::{DetectionResult, Error, Numeric, Result, Sample};
use anomaly_window::{RingWindow, WindowStats};

/// Z-score of `value` against a window with the given mean and standard deviation
///
/// A constant window (`stddev == 0`) scores `0` for a value equal to its mean
/// and `+inf`/`-inf` for anything else, signed like `value - mean`. NaN input
/// scores NaN.
pub fn z_score<T: Numeric>(mean: T, stddev: T, value: T) -> T {
    let deviation = value - mean;
    if stddev != T::zero() {
        return deviation / stddev;
    }

    if deviation.is_nan() {
        T::nan()
    } else if deviation > T::zero() {
        T::infinity()
    } else if deviation < T::zero() {
        T::neg_infinity()
    } else {
        T::zero()
    }
}

/// Classifies samples by their Z-score against a window
///
/// Holds only the threshold; classification is a pure function of the
/// window statistics and the sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScoreScorer<T: Numeric = f64> {
    threshold: T,
}

impl<T: Numeric> ZScoreScorer<T> {
    /// Create a scorer
    ///
    /// # Arguments
    ///
    /// * `threshold` - Absolute Z-score a sample must strictly exceed to be anomalous
    pub fn new(threshold: T) -> Result<Self> {
        if !(threshold > T::zero()) || !threshold.is_finite() {
            return Err(Error::invalid_config(format!(
                "threshold must be positive and finite, got {threshold}"
            )));
        }
        Ok(Self { threshold })
    }

    /// Get the threshold
    pub fn threshold(&self) -> T {
        self.threshold
    }

    /// Z-score of `value` against a stats snapshot
    pub fn score(&self, stats: &WindowStats<T>, value: T) -> T {
        z_score(stats.mean, stats.stddev, value)
    }

    /// Whether a Z-score lies strictly beyond the threshold
    pub fn exceeds(&self, z: T) -> bool {
        z.abs() > self.threshold
    }

    /// Classify a sample against a stats snapshot
    pub fn classify(&self, stats: &WindowStats<T>, sample: Sample<T>) -> DetectionResult<T> {
        let z = self.score(stats, sample.value);
        DetectionResult {
            index: sample.index,
            value: sample.value,
            z_score: z,
            is_anomaly: self.exceeds(z),
        }
    }

    /// Classify a sample against a full window
    ///
    /// Scoring against a partially filled window is rejected with
    /// [`Error::WindowNotFull`].
    pub fn evaluate(&self, window: &RingWindow<T>, sample: Sample<T>) -> Result<DetectionResult<T>> {
        if !window.is_full() {
            return Err(Error::WindowNotFull {
                len: window.len(),
                capacity: window.capacity(),
            });
        }

        let stats = window.stats().ok_or_else(|| Error::empty_window("evaluate"))?;
        Ok(self.classify(&stats, sample))
    }
}

impl Default for ZScoreScorer<f64> {
    fn default() -> Self {
        Self {
            threshold: crate::config::DEFAULT_THRESHOLD,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn full_window(values: &[f64]) -> RingWindow<f64> {
        let mut window = RingWindow::new(values.len()).unwrap();
        window.extend(values.iter().copied());
        window
    }

    #[test]
    fn test_threshold_must_be_positive() {
        assert!(ZScoreScorer::new(0.0).is_err());
        assert!(ZScoreScorer::new(-2.0).is_err());
        assert!(ZScoreScorer::new(f64::NAN).is_err());
        assert_eq!(ZScoreScorer::new(2.5).unwrap().threshold(), 2.5);
        assert_eq!(ZScoreScorer::default().threshold(), 3.0);
    }

    #[test]
    fn test_rejects_partial_window() {
        let scorer = ZScoreScorer::new(3.0).unwrap();
        let mut window = RingWindow::new(5).unwrap();
        window.extend([1.0, 2.0, 3.0]);

        let err = scorer.evaluate(&window, Sample::new(3, 4.0)).unwrap_err();
        assert!(matches!(err, Error::WindowNotFull { len: 3, capacity: 5 }));
    }

    #[test]
    fn test_z_score_against_window() {
        // mean 5, population sd 2
        let window = full_window(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        let scorer = ZScoreScorer::new(3.0).unwrap();

        let result = scorer.evaluate(&window, Sample::new(8, 9.0)).unwrap();
        assert_eq!(result.index, 8);
        assert_relative_eq!(result.z_score, 2.0);
        assert!(!result.is_anomaly);

        let result = scorer.evaluate(&window, Sample::new(9, -3.0)).unwrap();
        assert_relative_eq!(result.z_score, -4.0);
        assert!(result.is_anomaly);
    }

    #[test]
    fn test_threshold_boundary_is_strict() {
        // [0, 2]: mean 1, sd 1 exactly, so value 3 scores exactly 2
        let window = full_window(&[0.0, 2.0]);
        let scorer = ZScoreScorer::new(2.0).unwrap();

        let at = scorer.evaluate(&window, Sample::new(2, 3.0)).unwrap();
        assert_eq!(at.z_score, 2.0);
        assert!(!at.is_anomaly);

        let above = scorer.evaluate(&window, Sample::new(2, 3.0 + 1e-9)).unwrap();
        assert!(above.is_anomaly);

        let below = scorer.evaluate(&window, Sample::new(2, -1.0)).unwrap();
        assert_eq!(below.z_score, -2.0);
        assert!(!below.is_anomaly);
    }

    #[test]
    fn test_degenerate_window() {
        let window = full_window(&[5.0; 5]);

        for threshold in [0.5, 3.0, 1e12] {
            let scorer = ZScoreScorer::new(threshold).unwrap();

            let same = scorer.evaluate(&window, Sample::new(5, 5.0)).unwrap();
            assert_eq!(same.z_score, 0.0);
            assert!(!same.is_anomaly);

            let above = scorer.evaluate(&window, Sample::new(5, 10.0)).unwrap();
            assert_eq!(above.z_score, f64::INFINITY);
            assert!(above.is_anomaly);

            let below = scorer.evaluate(&window, Sample::new(5, 4.999)).unwrap();
            assert_eq!(below.z_score, f64::NEG_INFINITY);
            assert!(below.is_anomaly);
        }
    }

    #[test]
    fn test_degenerate_window_with_inexact_values() {
        let scorer = ZScoreScorer::new(3.0).unwrap();
        for &value in &[0.1, 0.3, 7.3, 0.001, 1234.567] {
            let window = full_window(&[value; 50]);

            let same = scorer.evaluate(&window, Sample::new(50, value)).unwrap();
            assert_eq!(same.z_score, 0.0);
            assert!(!same.is_anomaly);

            let nudged = scorer
                .evaluate(&window, Sample::new(50, value + value * 1e-9))
                .unwrap();
            assert_eq!(nudged.z_score, f64::INFINITY);
            assert!(nudged.is_anomaly);
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let window = full_window(&[1.0, 3.0, 2.0, 8.0, 4.0]);
        let scorer = ZScoreScorer::new(1.5).unwrap();
        let sample = Sample::new(5, 9.5);

        let first = scorer.evaluate(&window, sample).unwrap();
        let second = scorer.evaluate(&window, sample).unwrap();
        assert_eq!(first, second);
        assert_eq!(window.len(), 5);
    }

    #[test]
    fn test_nan_is_never_anomalous() {
        assert!(z_score(5.0, 0.0, f64::NAN).is_nan());
        assert!(z_score(5.0, 1.0, f64::NAN).is_nan());

        let scorer = ZScoreScorer::new(3.0).unwrap();
        assert!(!scorer.exceeds(f64::NAN));
    }
}

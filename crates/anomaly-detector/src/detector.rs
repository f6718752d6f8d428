//! Streaming detector owning the sliding window

use crate::config::DetectorConfig;
use crate::scorer::ZScoreScorer;
use crate::traits::{DetectorProperties, OnlineDetector};
use anomaly_core::{AnomalyEvent, DetectorState, Numeric, Observation, Result, Sample};
use anomaly_window::RingWindow;
use tracing::{debug, instrument, trace};

/// Online Z-score detector over the most recent `window_capacity` samples
///
/// Each sample is scored against the full window of samples that preceded
/// it and then pushed into the window, evicting the oldest. While the window
/// is still filling nothing is scored; once `window_capacity` samples have
/// been seen the detector is [`DetectorState::Active`] for good.
///
/// The detector takes `&mut self` per sample and never blocks. Callers
/// feeding it from several threads serialize access themselves.
#[derive(Debug, Clone)]
pub struct StreamDetector<T: Numeric = f64> {
    config: DetectorConfig,
    window: RingWindow<T>,
    scorer: ZScoreScorer<T>,
    next_index: u64,
    state: DetectorState,
}

impl<T: Numeric> StreamDetector<T> {
    /// Create a detector from a validated configuration
    #[instrument(
        level = "debug",
        skip_all,
        fields(capacity = config.window_capacity, threshold = config.threshold)
    )]
    pub fn new(config: DetectorConfig) -> Result<Self> {
        config.validate()?;

        let window = RingWindow::with_recompute_interval(
            config.window_capacity,
            config.effective_recompute_interval(),
        )?;
        let scorer = ZScoreScorer::new(T::from_f64_lossy(config.threshold))?;

        debug!(
            recompute_interval = window.recompute_interval(),
            "stream detector configured"
        );

        Ok(Self {
            config,
            window,
            scorer,
            next_index: 0,
            state: DetectorState::Filling,
        })
    }

    /// Create a detector with the given capacity and threshold
    pub fn configure(window_capacity: usize, threshold: f64) -> Result<Self> {
        Self::new(DetectorConfig::new(window_capacity, threshold))
    }

    /// Process one sample, returning everything known about it
    pub fn observe(&mut self, value: T) -> Observation<T> {
        let sample = Sample::new(self.next_index, value);
        self.next_index += 1;

        let baseline = if self.window.is_full() {
            self.window.stats()
        } else {
            None
        };

        let observation = match baseline {
            Some(stats) => {
                let result = self.scorer.classify(&stats, sample);
                trace!(
                    index = result.index,
                    z_score = ?result.z_score,
                    anomaly = result.is_anomaly,
                    "sample scored"
                );
                Observation::Scored(result)
            }
            None => Observation::Filling(sample),
        };

        self.window.push(value);

        if self.state == DetectorState::Filling && self.window.is_full() {
            self.state = DetectorState::Active;
            debug!(
                index = sample.index,
                capacity = self.window.capacity(),
                "window full, detector active"
            );
        }

        observation
    }

    /// Process one sample, returning an event only if it is anomalous
    pub fn process(&mut self, value: T) -> Option<AnomalyEvent<T>> {
        self.observe(value).anomaly()
    }

    /// Current lifecycle state
    pub fn state(&self) -> DetectorState {
        self.state
    }

    /// Number of samples processed so far
    pub fn samples_seen(&self) -> u64 {
        self.next_index
    }

    /// Index the next processed sample will receive
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    /// The baseline window
    pub fn window(&self) -> &RingWindow<T> {
        &self.window
    }

    /// The scorer
    pub fn scorer(&self) -> &ZScoreScorer<T> {
        &self.scorer
    }

    /// The configuration the detector was built from
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }
}

impl<T: Numeric> DetectorProperties for StreamDetector<T> {
    fn algorithm_name(&self) -> &'static str {
        "Windowed Z-Score"
    }

    fn minimum_sample_size(&self) -> usize {
        self.config.window_capacity
    }
}

impl<T: Numeric> OnlineDetector<T> for StreamDetector<T> {
    fn observe(&mut self, value: T) -> Observation<T> {
        StreamDetector::observe(self, value)
    }

    fn samples_seen(&self) -> u64 {
        self.next_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anomaly_core::Error;

    #[test]
    fn test_configure_validates() {
        assert!(matches!(
            StreamDetector::<f64>::configure(0, 3.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            StreamDetector::<f64>::configure(10, 0.0),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            StreamDetector::<f64>::configure(10, -3.0),
            Err(Error::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_state_transition_happens_once() {
        let mut detector: StreamDetector = StreamDetector::configure(3, 2.0).unwrap();
        assert_eq!(detector.state(), DetectorState::Filling);

        detector.process(1.0);
        detector.process(2.0);
        assert_eq!(detector.state(), DetectorState::Filling);

        detector.process(3.0);
        assert_eq!(detector.state(), DetectorState::Active);

        for i in 0..20 {
            detector.process(i as f64);
            assert_eq!(detector.state(), DetectorState::Active);
        }
    }

    #[test]
    fn test_indices_are_sequential() {
        let mut detector: StreamDetector = StreamDetector::configure(4, 3.0).unwrap();
        let indices: Vec<u64> = (0..25).map(|i| detector.observe(i as f64).index()).collect();
        assert_eq!(indices, (0..25).collect::<Vec<u64>>());
        assert_eq!(detector.samples_seen(), 25);
        assert_eq!(detector.next_index(), 25);
    }

    #[test]
    fn test_scores_against_preceding_window() {
        let mut detector: StreamDetector = StreamDetector::configure(4, 2.0).unwrap();
        for _ in 0..4 {
            assert!(!detector.observe(10.0).is_scored());
        }

        let observation = detector.observe(100.0);
        assert_eq!(observation.z_score(), Some(f64::INFINITY));

        let event = observation.anomaly().unwrap();
        assert_eq!(event.index, 4);
        assert_eq!(event.value, 100.0);
        assert_eq!(detector.window().to_vec(), vec![10.0, 10.0, 10.0, 100.0]);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let mut detector: Box<dyn OnlineDetector<f64>> =
            Box::new(StreamDetector::<f64>::configure(2, 1.0).unwrap());
        assert_eq!(detector.algorithm_name(), "Windowed Z-Score");
        assert_eq!(detector.minimum_sample_size(), 2);

        detector.process(0.0);
        detector.process(0.0);
        assert!(detector.process(1.0).is_some());
        assert_eq!(detector.samples_seen(), 3);
    }
}

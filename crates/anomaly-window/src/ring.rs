//! Fixed-capacity ring buffer with running sums

use crate::stats::WindowStats;
use anomaly_core::{Error, Numeric, Result};
use std::collections::VecDeque;
use tracing::trace;

/// The most recent `capacity` samples of a stream, oldest first
///
/// Every push updates the running sum and sum of squares by adding the new
/// value and subtracting the evicted one, so [`mean`](Self::mean) and
/// [`stddev`](Self::stddev) never rescan the buffer. The sums are rebuilt
/// from the buffer every `recompute_interval` evictions to bound drift.
///
/// The window also counts how many trailing samples equal the newest one.
/// When that run covers the whole buffer the window is constant and its
/// statistics are exact (`mean` is the held value, `stddev` is zero),
/// whatever rounding the running sums carry.
#[derive(Debug, Clone)]
pub struct RingWindow<T: Numeric = f64> {
    capacity: usize,
    buffer: VecDeque<T>,
    sum: T,
    sum_sq: T,
    recompute_interval: usize,
    evictions_since_recompute: usize,
    trailing_run: usize,
}

impl<T: Numeric> RingWindow<T> {
    /// Create an empty window that recomputes its sums once per `capacity` evictions
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_recompute_interval(capacity, capacity)
    }

    /// Create an empty window with an explicit recompute cadence
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of samples held
    /// * `recompute_interval` - Evictions between full recomputations of the running sums
    pub fn with_recompute_interval(capacity: usize, recompute_interval: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_config("window capacity must be positive"));
        }
        if recompute_interval == 0 {
            return Err(Error::invalid_config("recompute interval must be positive"));
        }

        Ok(Self {
            capacity,
            buffer: VecDeque::with_capacity(capacity),
            sum: T::zero(),
            sum_sq: T::zero(),
            recompute_interval,
            evictions_since_recompute: 0,
            trailing_run: 0,
        })
    }

    /// Append a sample, returning the evicted oldest sample if the window was full
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = if self.buffer.len() == self.capacity {
            self.buffer.pop_front()
        } else {
            None
        };

        self.trailing_run = match self.buffer.back() {
            Some(&newest) if newest == value => self.trailing_run.saturating_add(1),
            _ => 1,
        };
        self.buffer.push_back(value);
        self.sum = self.sum + value;
        self.sum_sq = self.sum_sq + value * value;

        if let Some(old) = evicted {
            self.sum = self.sum - old;
            self.sum_sq = self.sum_sq - old * old;

            self.evictions_since_recompute += 1;
            if self.evictions_since_recompute >= self.recompute_interval {
                self.recompute();
            }
        }

        evicted
    }

    /// Rebuild the running sums from the live buffer
    pub fn recompute(&mut self) {
        let (sum, sum_sq) = self
            .buffer
            .iter()
            .fold((T::zero(), T::zero()), |(s, sq), &x| (s + x, sq + x * x));

        trace!(
            drift = ?(self.sum - sum),
            drift_sq = ?(self.sum_sq - sum_sq),
            "recomputed window sums"
        );

        self.sum = sum;
        self.sum_sq = sum_sq;
        self.evictions_since_recompute = 0;
    }

    /// True iff the window holds `capacity` samples
    pub fn is_full(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    /// True iff the window holds no samples
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// True iff the window is non-empty and every held sample is identical
    ///
    /// Compares samples exactly, so a NaN never forms part of a constant window.
    pub fn is_constant(&self) -> bool {
        !self.buffer.is_empty() && self.trailing_run >= self.buffer.len()
    }

    /// Number of samples currently held
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Maximum number of samples held
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Evictions between recomputations of the running sums
    pub fn recompute_interval(&self) -> usize {
        self.recompute_interval
    }

    /// Running sum of the held samples
    pub fn sum(&self) -> T {
        self.sum
    }

    /// Running sum of squares of the held samples
    pub fn sum_of_squares(&self) -> T {
        self.sum_sq
    }

    /// Oldest held sample (next to be evicted)
    pub fn oldest(&self) -> Option<T> {
        self.buffer.front().copied()
    }

    /// Most recently pushed sample
    pub fn newest(&self) -> Option<T> {
        self.buffer.back().copied()
    }

    /// Held samples, oldest first
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &T> + '_ {
        self.buffer.iter()
    }

    /// Copy of the held samples, oldest first
    pub fn to_vec(&self) -> Vec<T> {
        self.buffer.iter().copied().collect()
    }

    /// Mean of the held samples
    pub fn mean(&self) -> Result<T> {
        self.require_samples("mean").map(|stats| stats.mean)
    }

    /// Population variance of the held samples
    pub fn variance(&self) -> Result<T> {
        self.require_samples("variance").map(|stats| stats.variance)
    }

    /// Population standard deviation of the held samples
    pub fn stddev(&self) -> Result<T> {
        self.require_samples("stddev").map(|stats| stats.stddev)
    }

    /// Snapshot of the window moments, `None` while empty
    pub fn stats(&self) -> Option<WindowStats<T>> {
        match self.buffer.back() {
            Some(&value) if self.is_constant() => {
                Some(WindowStats::constant(self.buffer.len(), value))
            }
            _ => WindowStats::from_sums(self.buffer.len(), self.sum, self.sum_sq),
        }
    }

    /// Drop every held sample, keeping capacity and cadence
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.sum = T::zero();
        self.sum_sq = T::zero();
        self.evictions_since_recompute = 0;
        self.trailing_run = 0;
    }

    fn require_samples(&self, operation: &'static str) -> Result<WindowStats<T>> {
        self.stats().ok_or_else(|| Error::empty_window(operation))
    }
}

impl<T: Numeric> Extend<T> for RingWindow<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

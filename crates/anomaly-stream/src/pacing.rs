//! Wall-clock pacing of a stream

use std::thread;
use std::time::Duration;

/// Iterator adapter sleeping `interval` before yielding every item except the first
///
/// Used to replay a recorded or synthetic stream at a fixed rate. The
/// consumer blocks inside `next`, never inside the detector. Exhaustion is
/// reported without sleeping.
#[derive(Debug, Clone)]
pub struct Paced<I> {
    inner: I,
    interval: Duration,
    started: bool,
}

impl<I> Paced<I> {
    /// Wrap an iterator
    pub fn new(inner: I, interval: Duration) -> Self {
        Self {
            inner,
            interval,
            started: false,
        }
    }

    /// Delay between consecutive items
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Unwrap the adapted iterator
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I: Iterator> Iterator for Paced<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.next()?;
        if self.started && !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        self.started = true;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Adds [`paced`](PacedExt::paced) to every iterator
pub trait PacedExt: Iterator + Sized {
    /// Space items `interval` apart
    fn paced(self, interval: Duration) -> Paced<Self> {
        Paced::new(self, interval)
    }
}

impl<I: Iterator> PacedExt for I {}

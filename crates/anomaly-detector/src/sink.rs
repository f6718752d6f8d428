//! Consumers of detection output
//!
//! Detection never renders or prints anything itself. Whatever happens to an
//! anomaly (logging, plotting, alerting) is a sink reacting to the events a
//! detector returns. Sinks are fire-and-forget: their methods return nothing
//! and the detector never waits on them.

use anomaly_core::{AnomalyEvent, Numeric, Observation};
use std::sync::mpsc::Sender;
use tracing::{trace, warn};

/// Receives anomaly events, and optionally every observation
pub trait AnomalySink<T: Numeric> {
    /// Handle an anomalous sample
    fn on_anomaly(&mut self, event: AnomalyEvent<T>);

    /// Handle any processed sample (scored or not)
    ///
    /// Called before [`on_anomaly`](Self::on_anomaly) for the same sample.
    fn on_observation(&mut self, observation: &Observation<T>) {
        let _ = observation;
    }
}

impl<T: Numeric, S: AnomalySink<T> + ?Sized> AnomalySink<T> for &mut S {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        (**self).on_anomaly(event);
    }

    fn on_observation(&mut self, observation: &Observation<T>) {
        (**self).on_observation(observation);
    }
}

impl<T: Numeric, S: AnomalySink<T> + ?Sized> AnomalySink<T> for Box<S> {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        (**self).on_anomaly(event);
    }

    fn on_observation(&mut self, observation: &Observation<T>) {
        (**self).on_observation(observation);
    }
}

/// Sink that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl<T: Numeric> AnomalySink<T> for NullSink {
    fn on_anomaly(&mut self, _event: AnomalyEvent<T>) {
        // Do nothing
    }
}

/// Sink that keeps every anomaly in memory
#[derive(Debug, Clone)]
pub struct CollectingSink<T> {
    events: Vec<AnomalyEvent<T>>,
}

impl<T> Default for CollectingSink<T> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<T> CollectingSink<T> {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Events collected so far, in arrival order
    pub fn events(&self) -> &[AnomalyEvent<T>] {
        &self.events
    }

    /// Number of events collected
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if nothing was collected
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Take ownership of the collected events
    pub fn into_events(self) -> Vec<AnomalyEvent<T>> {
        self.events
    }
}

impl<T: Numeric> AnomalySink<T> for CollectingSink<T> {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        self.events.push(event);
    }
}

/// Sink that logs anomalies through `tracing`
///
/// Anomalies are logged at `WARN`; with `with_observations` every processed
/// sample is also logged at `TRACE`.
#[derive(Debug, Default, Clone)]
pub struct TracingSink {
    metric: Option<String>,
    log_observations: bool,
}

impl TracingSink {
    /// Create a sink logging anomalies only
    pub fn new() -> Self {
        Self::default()
    }

    /// Tag every log line with a metric name
    pub fn with_metric(mut self, metric: impl Into<String>) -> Self {
        self.metric = Some(metric.into());
        self
    }

    /// Also log every processed sample
    pub fn with_observations(mut self) -> Self {
        self.log_observations = true;
        self
    }
}

impl<T: Numeric> AnomalySink<T> for TracingSink {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        warn!(
            metric = self.metric.as_deref().unwrap_or("-"),
            index = event.index,
            value = %event.value,
            z_score = %event.z_score,
            "anomaly detected"
        );
    }

    fn on_observation(&mut self, observation: &Observation<T>) {
        if self.log_observations {
            trace!(
                metric = self.metric.as_deref().unwrap_or("-"),
                index = observation.index(),
                value = %observation.value(),
                z_score = ?observation.z_score(),
                "sample processed"
            );
        }
    }
}

/// Sink forwarding anomalies over a channel
///
/// Once the receiver is gone further events are dropped; the first drop is
/// logged.
#[derive(Debug)]
pub struct ChannelSink<T> {
    sender: Sender<AnomalyEvent<T>>,
    disconnected: bool,
}

impl<T> ChannelSink<T> {
    /// Wrap the sending half of a channel
    pub fn new(sender: Sender<AnomalyEvent<T>>) -> Self {
        Self {
            sender,
            disconnected: false,
        }
    }

    /// True once a send failed because the receiver was dropped
    pub fn is_disconnected(&self) -> bool {
        self.disconnected
    }
}

impl<T: Numeric> AnomalySink<T> for ChannelSink<T> {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        if self.sender.send(event).is_err() && !self.disconnected {
            self.disconnected = true;
            warn!(index = event.index, "anomaly receiver dropped, discarding events");
        }
    }
}

/// Sink calling a closure for each anomaly
pub struct FnSink<F>(pub F);

impl<T: Numeric, F: FnMut(AnomalyEvent<T>)> AnomalySink<T> for FnSink<F> {
    fn on_anomaly(&mut self, event: AnomalyEvent<T>) {
        (self.0)(event);
    }
}

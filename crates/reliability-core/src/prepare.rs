//! Turning raw observations into duration samples
//!
//! Two entry points mirror how durations reach the engine: manually typed
//! times between failures, and timestamped failure events per asset whose
//! consecutive gaps become the durations.

use crate::error::{Error, Result};
use crate::sample::DurationSample;
use chrono::NaiveDateTime;
use tracing::{debug, warn};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Build a sample from manual entries, skipping missing and unusable ones
///
/// `None`, NaN, infinite, zero and negative entries are dropped. Fails with
/// [`Error::InvalidSample`] when nothing usable remains.
pub fn durations_from_entries(entries: &[Option<f64>]) -> Result<DurationSample> {
    let values: Vec<f64> = entries
        .iter()
        .flatten()
        .copied()
        .filter(|v| v.is_finite() && *v > 0.0)
        .collect();
    let dropped = entries.len() - values.len();
    if dropped > 0 {
        debug!("Dropped {} missing or invalid entries of {}", dropped, entries.len());
    }
    DurationSample::new(values)
}

/// Hours elapsed between consecutive timestamps, in chronological order
///
/// Gaps of zero length (duplicate timestamps) are dropped.
pub fn inter_event_hours(timestamps: &[NaiveDateTime]) -> Vec<f64> {
    let mut ordered = timestamps.to_vec();
    ordered.sort_unstable();
    ordered
        .windows(2)
        .map(|w| (w[1] - w[0]).num_milliseconds() as f64 / MILLIS_PER_HOUR)
        .filter(|&hours| {
            if hours <= 0.0 {
                warn!("Skipping zero-length gap between duplicate event timestamps");
                false
            } else {
                true
            }
        })
        .collect()
}

/// A single recorded failure/event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// Machine or component name
    pub asset: String,
    /// When the event occurred
    pub occurred_at: NaiveDateTime,
}

/// Failure events for one or more assets
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event
    pub fn record(&mut self, asset: impl Into<String>, occurred_at: NaiveDateTime) {
        self.events.push(Event {
            asset: asset.into(),
            occurred_at,
        });
    }

    /// Number of recorded events across all assets
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if no events were recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct assets in first-seen order
    pub fn assets(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for event in &self.events {
            if !seen.contains(&event.asset.as_str()) {
                seen.push(&event.asset);
            }
        }
        seen
    }

    /// Timestamps recorded for one asset, in recording order
    pub fn timestamps_for(&self, asset: &str) -> Vec<NaiveDateTime> {
        self.events
            .iter()
            .filter(|e| e.asset == asset)
            .map(|e| e.occurred_at)
            .collect()
    }

    /// Inter-event durations (hours) for one asset
    ///
    /// An asset with fewer than two distinct event times yields
    /// [`Error::InvalidSample`].
    pub fn durations_for(&self, asset: &str) -> Result<DurationSample> {
        let timestamps = self.timestamps_for(asset);
        if timestamps.is_empty() {
            return Err(Error::InvalidParameter(format!("unknown asset '{asset}'")));
        }
        let hours = inter_event_hours(&timestamps);
        debug!(asset, events = timestamps.len(), durations = hours.len(), "Derived inter-event durations");
        DurationSample::new(hours)
    }
}

impl FromIterator<Event> for EventLog {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

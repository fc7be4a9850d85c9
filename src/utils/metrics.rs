use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Counters accumulated over the searches run by one engine.
///
/// The engine counts expanded nodes; wall-clock time is measured by the
/// caller and recorded with [record_elapsed](SearchMetrics::record_elapsed),
/// since the search core never reads a clock. Nothing is reset between
/// searches unless [reset](SearchMetrics::reset) is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchMetrics {
    searches: u64,
    nodes_expanded: u64,
    elapsed: Duration,
    timed_searches: u64,
}

impl SearchMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of searches that ran (input errors are not counted).
    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Total cells transitioned to closed across all searches.
    pub fn nodes_expanded(&self) -> u64 {
        self.nodes_expanded
    }

    /// Total caller-recorded wall-clock time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn average_nodes_expanded(&self) -> Option<f64> {
        if self.searches == 0 {
            None
        } else {
            Some(self.nodes_expanded as f64 / self.searches as f64)
        }
    }

    /// Mean of the recorded durations.
    pub fn average_elapsed(&self) -> Option<Duration> {
        if self.timed_searches == 0 {
            return None;
        }
        let nanos = self.elapsed.as_nanos() / self.timed_searches as u128;
        Some(Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX)))
    }

    pub fn record_search(&mut self, nodes_expanded: u64) {
        self.searches += 1;
        self.nodes_expanded = self.nodes_expanded.saturating_add(nodes_expanded);
    }

    pub fn record_elapsed(&mut self, elapsed: Duration) {
        self.elapsed = self.elapsed.saturating_add(elapsed);
        self.timed_searches += 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

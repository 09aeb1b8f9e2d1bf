//! Builder API for dispatcher configuration.

use crate::config::DispatchConfig;

/// Fluent builder for [`DispatchConfig`].
pub struct DispatchConfigBuilder {
    max_pending: Option<usize>,
    max_events_per_drain: Option<usize>,
    record_history: bool,
}

impl DispatchConfigBuilder {
    pub fn new() -> Self {
        Self {
            max_pending: None,
            max_events_per_drain: None,
            record_history: true,
        }
    }

    /// Bound the number of queued-but-undrained events
    pub fn max_pending(mut self, n: usize) -> Self {
        self.max_pending = Some(n);
        self
    }

    /// Bound the number of events a single drain loop may handle
    pub fn max_events_per_drain(mut self, n: usize) -> Self {
        self.max_events_per_drain = Some(n);
        self
    }

    /// Enable or disable transition history
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn build(self) -> DispatchConfig {
        DispatchConfig {
            max_pending: self.max_pending,
            max_events_per_drain: self.max_events_per_drain,
            record_history: self.record_history,
        }
    }
}

impl Default for DispatchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

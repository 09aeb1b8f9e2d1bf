//! Dispatcher limits and machine options.
//!
//! The defaults impose no limits: the queue grows as needed and a drain
//! loop runs until the queue is empty. Limits exist to turn runaway event
//! chains (an action that always resubmits) into errors instead of hangs.
//!
//! # Example
//!
//! ```rust
//! use eventide::config::DispatchConfig;
//!
//! let config = DispatchConfig::builder()
//!     .max_pending(64)
//!     .max_events_per_drain(10_000)
//!     .record_history(false)
//!     .build();
//!
//! assert_eq!(config.max_pending(), Some(64));
//! assert!(!config.record_history());
//! ```

pub mod builder;

pub use builder::DispatchConfigBuilder;

/// Limits applied by a dispatcher and its machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    pub(crate) max_pending: Option<usize>,
    pub(crate) max_events_per_drain: Option<usize>,
    pub(crate) record_history: bool,
}

impl DispatchConfig {
    pub fn builder() -> DispatchConfigBuilder {
        DispatchConfigBuilder::new()
    }

    pub fn max_pending(&self) -> Option<usize> {
        self.max_pending
    }

    pub fn max_events_per_drain(&self) -> Option<usize> {
        self.max_events_per_drain
    }

    pub fn record_history(&self) -> bool {
        self.record_history
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        DispatchConfigBuilder::new().build()
    }
}

//! Dispatch and action errors.

use thiserror::Error;

/// Failures surfaced to the caller of `submit`.
///
/// An event that matches no rule is not an error; it is discarded.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Action for '{event}' in state '{state}' failed: {source}")]
    ActionFailed {
        state: String,
        event: String,
        #[source]
        source: ActionError,
    },

    #[error("Event queue full ({limit} pending)")]
    QueueFull { limit: usize },

    #[error("Drain loop exceeded {limit} events")]
    DrainLimitExceeded { limit: usize },

    #[error("Machine re-entered while handling '{event}' in state '{state}'")]
    ReentrantHandle { state: String, event: String },
}

/// Failure returned by a transition action.
#[derive(Debug, Error)]
pub enum ActionError {
    #[error("{0}")]
    Failed(String),

    #[error("Follow-up event rejected: {0}")]
    Submit(#[source] Box<DispatchError>),
}

impl ActionError {
    pub fn msg(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }
}

impl From<DispatchError> for ActionError {
    fn from(error: DispatchError) -> Self {
        Self::Submit(Box::new(error))
    }
}

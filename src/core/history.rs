//! Transition history tracking.
//!
//! Every transition a machine takes can be recorded as an immutable value.
//! Histories are diagnostics: they can be inspected or serialized, but a
//! machine is never restored from one.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single transition taken in response to an event.
///
/// # Example
///
/// ```rust
/// use eventide::core::StateTransition;
/// use eventide::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Lamp {
///         Off,
///         On,
///     }
/// }
///
/// let transition = StateTransition {
///     from: Lamp::Off,
///     to: Lamp::On,
///     event: "Toggle".to_string(),
///     timestamp: Utc::now(),
///     sequence: 0,
/// };
/// assert_eq!(transition.event, "Toggle");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Kind of the event that triggered the transition
    pub event: String,
    /// When the transition completed
    pub timestamp: DateTime<Utc>,
    /// Position of the triggering event among all events the machine handled
    pub sequence: u64,
}

/// Ordered history of transitions.
///
/// History is immutable - `record` returns a new history with the
/// transition appended.
///
/// # Example
///
/// ```rust
/// use eventide::core::{StateHistory, StateTransition};
/// use eventide::state_enum;
/// use chrono::Utc;
///
/// state_enum! {
///     enum Job {
///         Queued,
///         Running,
///         Finished,
///     }
///     terminal: [Finished]
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Job::Queued,
///         to: Job::Running,
///         event: "Start".to_string(),
///         timestamp: Utc::now(),
///         sequence: 0,
///     })
///     .record(StateTransition {
///         from: Job::Running,
///         to: Job::Finished,
///         event: "Finish".to_string(),
///         timestamp: Utc::now(),
///         sequence: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Job::Queued, &Job::Running, &Job::Finished]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    pub(crate) fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the first transition followed by the
    /// `to` state of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Kinds of the events that caused each transition, in order.
    pub fn events(&self) -> Vec<&str> {
        self.transitions.iter().map(|t| t.event.as_str()).collect()
    }

    /// Time between the first and last recorded transitions.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All recorded transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

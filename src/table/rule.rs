//! A single transition rule.

use crate::core::{Event, Guard, State};
use crate::runtime::ActionError;

/// Side effect run when a rule fires.
///
/// Receives the event being handled and the context that owns the machine.
/// Follow-up events go through the context's `submit`, which only enqueues
/// while a drain is active.
pub type Action<E, C> = Box<dyn Fn(&E, &C) -> Result<(), ActionError>>;

/// `(source, event kind, guard) -> (action, target)`.
pub struct Rule<S: State, E, C> {
    pub source: S,
    pub event: &'static str,
    pub target: S,
    pub guard: Option<Guard<E, C>>,
    pub action: Option<Action<E, C>>,
}

impl<S: State, E: Event, C> Rule<S, E, C> {
    /// Whether this rule applies to `event` while the machine is in `current`.
    ///
    /// The guard is only evaluated once source and kind match.
    pub fn matches(&self, current: &S, event: &E, context: &C) -> bool {
        if *current != self.source || event.kind() != self.event {
            return false;
        }

        self.guard.as_ref().map_or(true, |g| g.check(event, context))
    }
}

impl<S: State, E, C> Rule<S, E, C> {
    /// Run the action, if any.
    pub fn fire(&self, event: &E, context: &C) -> Result<(), ActionError> {
        match &self.action {
            Some(action) => action(event, context),
            None => Ok(()),
        }
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }
}

impl<S: State, E, C> std::fmt::Debug for Rule<S, E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("source", &self.source)
            .field("event", &self.event)
            .field("target", &self.target)
            .field("guarded", &self.guard.is_some())
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

//! Builder for constructing transition rules.

use crate::builder::error::BuildError;
use crate::core::{Guard, State};
use crate::runtime::ActionError;
use crate::table::{Action, Rule};

/// Builder for constructing rules with a fluent API.
pub struct RuleBuilder<S: State, E, C> {
    source: Option<S>,
    event: Option<&'static str>,
    target: Option<S>,
    guard: Option<Guard<E, C>>,
    action: Option<Action<E, C>>,
}

impl<S: State, E, C> RuleBuilder<S, E, C> {
    pub fn new() -> Self {
        Self {
            source: None,
            event: None,
            target: None,
            guard: None,
            action: None,
        }
    }

    /// Set the source state (required).
    pub fn from(mut self, state: S) -> Self {
        self.source = Some(state);
        self
    }

    /// Set the event kind this rule reacts to (required).
    pub fn on(mut self, kind: &'static str) -> Self {
        self.event = Some(kind);
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: S) -> Self {
        self.target = Some(state);
        self
    }

    /// Add a guard (optional).
    pub fn guard(mut self, guard: Guard<E, C>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Add a guard using a closure (optional).
    pub fn when<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self
    }

    /// Set the action (optional; a rule without one only changes state).
    pub fn action<F>(mut self, action: F) -> Self
    where
        F: Fn(&E, &C) -> Result<(), ActionError> + 'static,
    {
        self.action = Some(Box::new(action));
        self
    }

    pub fn build(self) -> Result<Rule<S, E, C>, BuildError> {
        let source = self.source.ok_or(BuildError::MissingSourceState)?;
        let event = self.event.ok_or(BuildError::MissingEvent)?;
        let target = self.target.ok_or(BuildError::MissingTargetState)?;

        Ok(Rule {
            source,
            event,
            target,
            guard: self.guard,
            action: self.action,
        })
    }
}

impl<S: State, E, C> Default for RuleBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

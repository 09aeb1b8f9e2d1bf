//! Build errors for rules and transition tables.

use thiserror::Error;

/// Problems found while building a rule or validating a table.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No rules defined. Add at least one rule")]
    NoTransitions,

    #[error("Rule source state not specified. Call .from(state)")]
    MissingSourceState,

    #[error("Rule event kind not specified. Call .on(kind)")]
    MissingEvent,

    #[error("Rule target state not specified. Call .to(state)")]
    MissingTargetState,

    #[error("Rule {index} leaves terminal state '{state}' on '{event}'")]
    TerminalHasOutgoing {
        index: usize,
        state: String,
        event: String,
    },

    #[error("Rule {index} reacts to '{event}', which is not a kind of this event type")]
    UnknownEvent { index: usize, event: String },

    #[error("Rule {index} ('{event}' in '{state}') is shadowed by an earlier unguarded rule")]
    UnreachableRule {
        index: usize,
        state: String,
        event: String,
    },
}

/// Every violation found in a rejected table.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Invalid transition table: {} violation(s), first: {}", .violations.len(), first_violation(.violations))]
pub struct TableError {
    pub violations: Vec<BuildError>,
}

fn first_violation(violations: &[BuildError]) -> String {
    violations
        .first()
        .map(ToString::to_string)
        .unwrap_or_default()
}

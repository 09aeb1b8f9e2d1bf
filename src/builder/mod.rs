//! Builder API for declaring transition tables.
//!
//! Tables are declared once, validated as a whole, and are read-only
//! afterwards. This module provides fluent builders, shorthand rule
//! constructors and the `state_enum!` / `event_enum!` macros.

pub mod error;
pub mod macros;
pub mod rule;
pub mod table;

pub use error::{BuildError, TableError};
pub use rule::RuleBuilder;
pub use table::TableBuilder;

use crate::core::{Guard, State};
use crate::table::Rule;

/// Create an unconditional rule without an action.
///
/// # Example
///
/// ```
/// use eventide::builder::simple_rule;
/// use eventide::{event_enum, state_enum};
///
/// state_enum! {
///     enum Switch {
///         Off,
///         On,
///     }
/// }
///
/// event_enum! {
///     enum Flip {
///         Toggle,
///     }
/// }
///
/// let rule = simple_rule::<Switch, Flip, ()>(Switch::Off, "Toggle", Switch::On);
/// assert!(rule.matches(&Switch::Off, &Flip::Toggle, &()));
/// ```
pub fn simple_rule<S: State, E, C>(from: S, event: &'static str, to: S) -> Rule<S, E, C> {
    Rule {
        source: from,
        event,
        target: to,
        guard: None,
        action: None,
    }
}

/// Create a guarded rule without an action.
///
/// # Example
///
/// ```
/// use eventide::builder::guarded_rule;
/// use eventide::{event_enum, state_enum};
///
/// state_enum! {
///     enum Gate {
///         Shut,
///         Raised,
///     }
/// }
///
/// event_enum! {
///     enum Badge {
///         Scan(u32),
///     }
/// }
///
/// let rule = guarded_rule::<Gate, Badge, (), _>(Gate::Shut, "Scan", Gate::Raised, |e, _| {
///     matches!(e, Badge::Scan(id) if *id == 42)
/// });
/// assert!(rule.matches(&Gate::Shut, &Badge::Scan(42), &()));
/// assert!(!rule.matches(&Gate::Shut, &Badge::Scan(7), &()));
/// ```
pub fn guarded_rule<S, E, C, F>(from: S, event: &'static str, to: S, guard: F) -> Rule<S, E, C>
where
    S: State,
    F: Fn(&E, &C) -> bool + 'static,
{
    Rule {
        source: from,
        event,
        target: to,
        guard: Some(Guard::new(guard)),
        action: None,
    }
}

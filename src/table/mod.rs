//! Transition rules and the table that holds them.
//!
//! A table maps `(state, event kind, guard)` to `(action, next state)`.
//! Lookup is a pure function of the current state, the event and the
//! context: the first declared rule that matches wins, and an event no
//! rule matches is simply discarded.

mod rule;
#[allow(clippy::module_inception)]
mod table;

pub use rule::{Action, Rule};
pub use table::TransitionTable;

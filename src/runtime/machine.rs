//! Machine that evaluates one event at a time against a transition table.

use crate::config::DispatchConfig;
use crate::core::{Event, State, StateHistory, StateTransition};
use crate::runtime::error::DispatchError;
use crate::table::TransitionTable;
use chrono::Utc;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Result of handling a single event.
#[derive(Clone, Debug, PartialEq)]
pub enum HandleOutcome<S: State> {
    /// A rule fired and the machine moved to `to`
    Transitioned { from: S, to: S },

    /// No rule matched; the event had no effect
    Discarded,
}

/// Current state plus a shared, read-only transition table.
///
/// The machine holds no reference to its context. The context is passed to
/// [`handle`](Machine::handle) and threaded into every guard and action, so
/// the owner can move freely and there is no self-reference to keep valid.
///
/// `handle` must not be re-entered on the same machine. Queue follow-up
/// events through a dispatcher instead; a direct nested call is rejected
/// with [`DispatchError::ReentrantHandle`].
pub struct Machine<S: State, E, C> {
    table: Rc<TransitionTable<S, E, C>>,
    current: RefCell<S>,
    handling: Cell<bool>,
    handled: Cell<u64>,
    history: RefCell<StateHistory<S>>,
    record_history: bool,
}

impl<S: State, E: Event, C> Machine<S, E, C> {
    /// Create a machine in the table's initial state.
    pub fn new(table: Rc<TransitionTable<S, E, C>>) -> Self {
        Self::with_config(table, &DispatchConfig::default())
    }

    pub fn with_config(table: Rc<TransitionTable<S, E, C>>, config: &DispatchConfig) -> Self {
        let initial = table.initial().clone();
        Self {
            table,
            current: RefCell::new(initial),
            handling: Cell::new(false),
            handled: Cell::new(0),
            history: RefCell::new(StateHistory::new()),
            record_history: config.record_history(),
        }
    }

    /// Evaluate `event` in the current state.
    ///
    /// If a rule matches, its action runs with `context` and the machine then
    /// moves to the rule's target. If the action fails the machine stays
    /// where it was. Unmatched events are discarded.
    ///
    /// While the action runs, the machine still reports the source state.
    pub fn handle(&self, event: &E, context: &C) -> Result<HandleOutcome<S>, DispatchError> {
        let from = self.current_state();
        if self.handling.replace(true) {
            return Err(DispatchError::ReentrantHandle {
                state: from.name().to_string(),
                event: event.kind().to_string(),
            });
        }
        let _active = HandlingGuard(&self.handling);

        let sequence = self.handled.get();
        self.handled.set(sequence + 1);

        let Some(rule) = self.table.lookup(&from, event, context) else {
            tracing::debug!(
                state = from.name(),
                event = event.kind(),
                "no matching rule, event discarded"
            );
            return Ok(HandleOutcome::Discarded);
        };

        rule.fire(event, context)
            .map_err(|source| DispatchError::ActionFailed {
                state: from.name().to_string(),
                event: event.kind().to_string(),
                source,
            })?;

        let to = rule.target.clone();
        *self.current.borrow_mut() = to.clone();

        if self.record_history {
            self.history.borrow_mut().push(StateTransition {
                from: from.clone(),
                to: to.clone(),
                event: event.kind().to_string(),
                timestamp: Utc::now(),
                sequence,
            });
        }

        tracing::debug!(
            from = from.name(),
            to = to.name(),
            event = event.kind(),
            sequence,
            "transition"
        );
        Ok(HandleOutcome::Transitioned { from, to })
    }
}

impl<S: State, E, C> Machine<S, E, C> {
    pub fn current_state(&self) -> S {
        self.current.borrow().clone()
    }

    pub fn is_in(&self, state: &S) -> bool {
        *self.current.borrow() == *state
    }

    pub fn is_terminal(&self) -> bool {
        self.current.borrow().is_terminal()
    }

    /// Whether `handle` is on the call stack right now.
    pub fn is_handling(&self) -> bool {
        self.handling.get()
    }

    /// Number of events handed to `handle`, matched or not.
    pub fn events_handled(&self) -> u64 {
        self.handled.get()
    }

    /// Snapshot of the transitions recorded so far.
    pub fn history(&self) -> StateHistory<S> {
        self.history.borrow().clone()
    }

    pub fn table(&self) -> &TransitionTable<S, E, C> {
        &self.table
    }
}

impl<S: State, E, C> std::fmt::Debug for Machine<S, E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current.borrow())
            .field("handling", &self.handling.get())
            .field("handled", &self.handled.get())
            .finish()
    }
}

struct HandlingGuard<'a>(&'a Cell<bool>);

impl Drop for HandlingGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

//! The enclosing owner of a machine and its dispatcher.

use crate::config::DispatchConfig;
use crate::core::{Event, State, StateHistory};
use crate::runtime::dispatcher::Dispatcher;
use crate::runtime::error::DispatchError;
use crate::runtime::machine::Machine;
use crate::table::TransitionTable;
use std::rc::Rc;

/// Transition table whose guards and actions receive a [`Context`].
pub type ContextTable<S, E, D> = TransitionTable<S, E, Context<S, E, D>>;

/// Owns a machine, its dispatcher and the data its actions work on.
///
/// Actions receive `&Context` and raise follow-up events with
/// [`submit`](Context::submit). Those only enqueue while a drain is active,
/// so a chain of any length runs in submission order on a flat stack.
///
/// The machine keeps no pointer back to the context; the context is handed
/// to it on every event. A `Context` can therefore be moved freely between
/// calls, and there is never more than one context per machine.
///
/// # Example
///
/// ```rust
/// use eventide::builder::{RuleBuilder, TableBuilder};
/// use eventide::runtime::Context;
/// use eventide::{event_enum, state_enum};
///
/// state_enum! {
///     enum Phase {
///         Idle,
///         Running,
///         Done,
///     }
///     terminal: [Done]
/// }
///
/// event_enum! {
///     enum Step {
///         Begin,
///         Finish,
///     }
/// }
///
/// let table = TableBuilder::new()
///     .initial(Phase::Idle)
///     .rule(
///         RuleBuilder::new()
///             .from(Phase::Idle)
///             .on("Begin")
///             .to(Phase::Running)
///             .action(|_: &Step, ctx: &Context<Phase, Step>| {
///                 ctx.submit(Step::Finish)?;
///                 Ok(())
///             }),
///     )?
///     .rule(RuleBuilder::new().from(Phase::Running).on("Finish").to(Phase::Done))?
///     .build()?;
///
/// let ctx = Context::new(table, ());
/// ctx.submit(Step::Begin)?;
///
/// assert!(ctx.is_terminal());
/// assert_eq!(ctx.history().events(), vec!["Begin", "Finish"]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Context<S: State, E, D = ()> {
    machine: Machine<S, E, Context<S, E, D>>,
    dispatcher: Dispatcher<E>,
    data: D,
}

impl<S: State, E: Event, D> Context<S, E, D> {
    /// Create a context whose machine starts in the table's initial state.
    pub fn new(table: impl Into<Rc<ContextTable<S, E, D>>>, data: D) -> Self {
        Self::with_config(table, data, DispatchConfig::default())
    }

    pub fn with_config(
        table: impl Into<Rc<ContextTable<S, E, D>>>,
        data: D,
        config: DispatchConfig,
    ) -> Self {
        Self {
            machine: Machine::with_config(table.into(), &config),
            dispatcher: Dispatcher::new(config),
            data,
        }
    }

    /// Submit an event.
    ///
    /// From outside a drain this handles the event and everything it chains
    /// before returning. From inside an action it only enqueues. The first
    /// failure aborts the drain, drops the events still queued and is
    /// returned here.
    pub fn submit(&self, event: E) -> Result<(), DispatchError> {
        self.dispatcher.submit(event, |event| {
            self.machine.handle(&event, self).map(|_| ())
        })
    }

    pub fn current_state(&self) -> S {
        self.machine.current_state()
    }

    pub fn is_in(&self, state: &S) -> bool {
        self.machine.is_in(state)
    }

    pub fn is_terminal(&self) -> bool {
        self.machine.is_terminal()
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    /// Snapshot of the machine's history; later submits do not change it.
    pub fn history(&self) -> StateHistory<S> {
        self.machine.history()
    }

    /// Events queued behind the one currently being handled.
    pub fn pending(&self) -> usize {
        self.dispatcher.pending()
    }

    pub fn is_draining(&self) -> bool {
        self.dispatcher.is_draining()
    }

    pub fn events_handled(&self) -> u64 {
        self.machine.events_handled()
    }

    /// Direct access to the machine, for inspection.
    ///
    /// Calling [`Machine::handle`] from inside an action is rejected; use
    /// [`submit`](Context::submit).
    pub fn machine(&self) -> &Machine<S, E, Context<S, E, D>> {
        &self.machine
    }
}

impl<S: State, E, D: std::fmt::Debug> std::fmt::Debug for Context<S, E, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("machine", &self.machine)
            .field("dispatcher", &self.dispatcher)
            .field("data", &self.data)
            .finish()
    }
}

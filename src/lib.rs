//! Eventide: reentrancy-safe event dispatch for table-driven state machines
//!
//! A transition action often needs to raise a follow-up event while its own
//! event is still being handled. Eventide routes every event through one
//! FIFO queue guarded by a reentrancy flag: the first `submit` drains the
//! queue, and any `submit` made during that drain only enqueues. Chains of
//! any length are handled in submission order, each event exactly once,
//! without recursive calls into the machine.
//!
//! # Core Concepts
//!
//! - **State** / **Event**: closed enums describing the machine's graph and alphabet
//! - **TransitionTable**: immutable `(state, event, guard) -> (action, next state)` rules
//! - **Machine**: current state plus the table; handles one event at a time
//! - **Dispatcher**: the queue and reentrancy flag
//! - **Context**: owns machine, dispatcher and user data; the capability actions receive
//!
//! # Example
//!
//! ```rust
//! use eventide::builder::{RuleBuilder, TableBuilder};
//! use eventide::runtime::Context;
//! use eventide::{event_enum, state_enum};
//! use std::cell::RefCell;
//!
//! state_enum! {
//!     enum Top {
//!         Idle,
//!         Running,
//!         Exited,
//!     }
//!     terminal: [Exited]
//! }
//!
//! event_enum! {
//!     enum Ev {
//!         E1,
//!         E2,
//!     }
//! }
//!
//! type Ctx = Context<Top, Ev, RefCell<Vec<&'static str>>>;
//!
//! let table = TableBuilder::new()
//!     .initial(Top::Idle)
//!     .rule(
//!         RuleBuilder::new()
//!             .from(Top::Idle)
//!             .on("E1")
//!             .to(Top::Running)
//!             .action(|_: &Ev, ctx: &Ctx| {
//!                 ctx.data().borrow_mut().push("on_e1");
//!                 ctx.submit(Ev::E2)?;
//!                 Ok(())
//!             }),
//!     )?
//!     .rule(
//!         RuleBuilder::new()
//!             .from(Top::Running)
//!             .on("E2")
//!             .to(Top::Exited)
//!             .action(|_: &Ev, ctx: &Ctx| {
//!                 ctx.data().borrow_mut().push("on_e2");
//!                 Ok(())
//!             }),
//!     )?
//!     .build()?;
//!
//! let ctx: Ctx = Context::new(table, RefCell::new(Vec::new()));
//! ctx.submit(Ev::E1)?;
//!
//! assert!(ctx.is_terminal());
//! assert_eq!(*ctx.data().borrow(), vec!["on_e1", "on_e2"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod runtime;
pub mod table;

// Re-export commonly used types
pub use crate::builder::{RuleBuilder, TableBuilder};
pub use crate::config::DispatchConfig;
pub use crate::core::{Event, Guard, State, StateHistory, StateTransition};
pub use crate::runtime::{ActionError, Context, DispatchError, Dispatcher, Machine};
pub use crate::table::{Rule, TransitionTable};

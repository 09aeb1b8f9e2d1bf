//! Event handling at runtime.
//!
//! - **Machine**: evaluates one event against the table and moves state
//! - **Dispatcher**: FIFO queue plus reentrancy flag; the only place a
//!   drain loop runs
//! - **Context**: owns both, and is the capability actions receive
//!
//! Everything here is single-threaded and synchronous. `submit` returns
//! only after the queue it started draining is empty or a failure aborted
//! the drain.

mod context;
mod dispatcher;
mod error;
mod machine;

pub use context::{Context, ContextTable};
pub use dispatcher::Dispatcher;
pub use error::{ActionError, DispatchError};
pub use machine::{HandleOutcome, Machine};

//! Core vocabulary of a machine.
//!
//! This module contains the pure building blocks:
//! - State markers via the `State` trait
//! - The event alphabet via the `Event` trait
//! - Guard predicates for rule selection
//! - Immutable transition history
//!
//! Nothing in this module performs side effects.

mod event;
mod guard;
mod history;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;

//! State markers for table-driven machines.
//!
//! States are pure markers: they name a node in the machine's graph and
//! carry no data. Anything a machine needs to remember lives in the
//! enclosing context instead.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// Implemented by closed enums, usually through [`state_enum!`](crate::state_enum).
/// All methods are pure.
///
/// # Example
///
/// ```rust
/// use eventide::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Closed,
///     Open,
///     Broken,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Open => "Open",
///             Self::Broken => "Broken",
///         }
///     }
///
///     fn is_terminal(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
///
///     fn is_error(&self) -> bool {
///         matches!(self, Self::Broken)
///     }
/// }
///
/// assert!(Door::Broken.is_terminal());
/// assert!(!Door::Open.is_terminal());
/// ```
pub trait State: Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> {
    /// Name used in logs, errors and history.
    fn name(&self) -> &str;

    /// Whether this marker is terminal.
    ///
    /// A machine that reaches a terminal state absorbs every further
    /// event; table validation rejects rules leaving a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_terminal(&self) -> bool {
        false
    }

    /// Whether this marker represents a failure outcome.
    ///
    /// Purely informational. Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

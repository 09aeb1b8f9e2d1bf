//! Events: the alphabet a machine reacts to.

use std::fmt::Debug;

/// An immutable occurrence submitted to a machine.
///
/// Events form a closed set of kinds, usually an enum whose variants may
/// carry payload fields. Rules match on [`kind`](Event::kind) only; payloads
/// are visible to guards and actions.
///
/// # Example
///
/// ```rust
/// use eventide::core::Event;
///
/// #[derive(Clone, Debug)]
/// enum Command {
///     Start,
///     Resize(u32, u32),
/// }
///
/// impl Event for Command {
///     fn kind(&self) -> &'static str {
///         match self {
///             Self::Start => "Start",
///             Self::Resize(..) => "Resize",
///         }
///     }
/// }
///
/// assert_eq!(Command::Resize(640, 480).kind(), "Resize");
/// ```
pub trait Event: Debug {
    /// Identity of the event for rule matching and logging.
    fn kind(&self) -> &'static str;

    /// Every kind this type can produce.
    ///
    /// Table validation rejects rules whose kind is not listed. An empty
    /// slice means the alphabet is not declared and rule kinds go
    /// unchecked.
    fn kinds() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

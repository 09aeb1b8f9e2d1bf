//! Guard predicates for controlling rule selection.
//!
//! Guards are pure boolean functions evaluated during table lookup. A rule
//! whose guard rejects the event is skipped and the next rule is tried.

/// Pure predicate over an event and the context that owns the machine.
///
/// Guards must not mutate anything: lookup may evaluate several of them
/// for one event, and a lookup that finds nothing has no effect.
///
/// # Example
///
/// ```rust
/// use eventide::core::Guard;
///
/// struct Limits {
///     max: u32,
/// }
///
/// let within_limit = Guard::new(|amount: &u32, limits: &Limits| *amount <= limits.max);
///
/// let limits = Limits { max: 10 };
/// assert!(within_limit.check(&5, &limits));
/// assert!(!within_limit.check(&11, &limits));
/// ```
pub struct Guard<E, C> {
    predicate: Box<dyn Fn(&E, &C) -> bool>,
}

impl<E, C> Guard<E, C> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&E, &C) -> bool + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard for this event in this context.
    pub fn check(&self, event: &E, context: &C) -> bool {
        (self.predicate)(event, context)
    }
}

impl<E, C> std::fmt::Debug for Guard<E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Guard(..)")
    }
}

//! Immutable transition table.

use super::rule::Rule;
use crate::core::{Event, State};

/// Ordered, read-only rule set for one machine definition.
///
/// Built once through [`TableBuilder`](crate::builder::TableBuilder), which
/// validates it, and shared by every machine created from it.
pub struct TransitionTable<S: State, E, C> {
    pub(crate) initial: S,
    pub(crate) states: Vec<S>,
    pub(crate) rules: Vec<Rule<S, E, C>>,
}

impl<S: State, E: Event, C> TransitionTable<S, E, C> {
    /// Find the rule that handles `event` in `current`.
    ///
    /// Rules are tried in declaration order and the first match wins.
    /// `None` means the event is discarded.
    pub fn lookup(&self, current: &S, event: &E, context: &C) -> Option<&Rule<S, E, C>> {
        self.rules
            .iter()
            .find(|rule| rule.matches(current, event, context))
    }
}

impl<S: State, E, C> TransitionTable<S, E, C> {
    pub(crate) fn new(initial: S, rules: Vec<Rule<S, E, C>>) -> Self {
        let mut states = vec![initial.clone()];
        for rule in &rules {
            for state in [&rule.source, &rule.target] {
                if !states.contains(state) {
                    states.push(state.clone());
                }
            }
        }

        Self {
            initial,
            states,
            rules,
        }
    }

    /// The state every machine built from this table starts in.
    pub fn initial(&self) -> &S {
        &self.initial
    }

    /// Declared state set: the initial state, then every rule source and
    /// target in declaration order.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    pub fn rules(&self) -> &[Rule<S, E, C>] {
        &self.rules
    }

    pub fn is_declared(&self, state: &S) -> bool {
        self.states.contains(state)
    }
}

impl<S: State, E, C> std::fmt::Debug for TransitionTable<S, E, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionTable")
            .field("initial", &self.initial)
            .field("states", &self.states)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Guard;

    crate::state_enum! {
        enum Valve {
            Closed,
            Open,
            Stuck,
        }
        terminal: [Stuck]
    }

    crate::event_enum! {
        enum Cmd {
            Open(u8),
            Close,
        }
    }

    fn rule(source: Valve, event: &'static str, target: Valve) -> Rule<Valve, Cmd, ()> {
        Rule {
            source,
            event,
            target,
            guard: None,
            action: None,
        }
    }

    #[test]
    fn lookup_finds_matching_rule() {
        let table = TransitionTable::new(
            Valve::Closed,
            vec![
                rule(Valve::Closed, "Open", Valve::Open),
                rule(Valve::Open, "Close", Valve::Closed),
            ],
        );

        let found = table.lookup(&Valve::Closed, &Cmd::Open(1), &()).unwrap();
        assert_eq!(found.target, Valve::Open);
    }

    #[test]
    fn lookup_returns_none_for_unmatched_event() {
        let table = TransitionTable::new(
            Valve::Closed,
            vec![rule(Valve::Closed, "Open", Valve::Open)],
        );

        assert!(table.lookup(&Valve::Closed, &Cmd::Close, &()).is_none());
        assert!(table.lookup(&Valve::Open, &Cmd::Open(1), &()).is_none());
    }

    #[test]
    fn first_declared_rule_wins() {
        let mut forced = rule(Valve::Closed, "Open", Valve::Stuck);
        forced.guard = Some(Guard::new(|e: &Cmd, _: &()| matches!(e, Cmd::Open(n) if *n > 100)));

        let table = TransitionTable::new(
            Valve::Closed,
            vec![
                forced,
                rule(Valve::Closed, "Open", Valve::Open),
                rule(Valve::Closed, "Open", Valve::Stuck),
            ],
        );

        let gentle = table.lookup(&Valve::Closed, &Cmd::Open(5), &()).unwrap();
        assert_eq!(gentle.target, Valve::Open);

        let hard = table.lookup(&Valve::Closed, &Cmd::Open(200), &()).unwrap();
        assert_eq!(hard.target, Valve::Stuck);
    }

    #[test]
    fn states_are_collected_without_duplicates() {
        let table = TransitionTable::new(
            Valve::Closed,
            vec![
                rule(Valve::Closed, "Open", Valve::Open),
                rule(Valve::Open, "Close", Valve::Closed),
                rule(Valve::Open, "Open", Valve::Stuck),
            ],
        );

        assert_eq!(table.states(), &[Valve::Closed, Valve::Open, Valve::Stuck]);
        assert!(table.is_declared(&Valve::Stuck));
        assert_eq!(table.initial(), &Valve::Closed);
        assert_eq!(table.rules().len(), 3);
    }
}

//! Builder for constructing transition tables.

use crate::builder::error::{BuildError, TableError};
use crate::builder::rule::RuleBuilder;
use crate::core::{Event, State};
use crate::table::{Rule, TransitionTable};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Builder for transition tables.
///
/// `build` validates the whole table and reports every violation at once
/// rather than stopping at the first one.
pub struct TableBuilder<S: State, E, C> {
    initial: Option<S>,
    rules: Vec<Rule<S, E, C>>,
}

impl<S: State, E, C> TableBuilder<S, E, C> {
    pub fn new() -> Self {
        Self {
            initial: None,
            rules: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Add a rule using a builder.
    /// Returns an error if the rule is incomplete.
    pub fn rule(mut self, builder: RuleBuilder<S, E, C>) -> Result<Self, BuildError> {
        let rule = builder.build()?;
        self.rules.push(rule);
        Ok(self)
    }

    /// Add a pre-built rule.
    pub fn add_rule(mut self, rule: Rule<S, E, C>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Add multiple rules at once, keeping their order.
    pub fn rules(mut self, rules: Vec<Rule<S, E, C>>) -> Self {
        self.rules.extend(rules);
        self
    }
}

impl<S: State, E: Event, C> TableBuilder<S, E, C> {
    /// Check the table, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<BuildError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<BuildError>>> = Vec::new();

        checks.push(if self.initial.is_some() {
            Validation::success(())
        } else {
            Validation::fail(BuildError::MissingInitialState)
        });

        checks.push(if self.rules.is_empty() {
            Validation::fail(BuildError::NoTransitions)
        } else {
            Validation::success(())
        });

        let alphabet = E::kinds();

        for (index, rule) in self.rules.iter().enumerate() {
            if !alphabet.is_empty() && !alphabet.contains(&rule.event) {
                checks.push(Validation::fail(BuildError::UnknownEvent {
                    index,
                    event: rule.event.to_string(),
                }));
            }

            // Terminal states absorb every event.
            if rule.source.is_terminal() {
                checks.push(Validation::fail(BuildError::TerminalHasOutgoing {
                    index,
                    state: rule.source.name().to_string(),
                    event: rule.event.to_string(),
                }));
            }

            let shadowed = self.rules[..index].iter().any(|earlier| {
                !earlier.is_guarded()
                    && earlier.source == rule.source
                    && earlier.event == rule.event
            });
            if shadowed {
                checks.push(Validation::fail(BuildError::UnreachableRule {
                    index,
                    state: rule.source.name().to_string(),
                    event: rule.event.to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable<S, E, C>, TableError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(TableError {
                violations: errors.iter().cloned().collect(),
            });
        }

        let Some(initial) = self.initial else {
            return Err(TableError {
                violations: vec![BuildError::MissingInitialState],
            });
        };

        Ok(TransitionTable::new(initial, self.rules))
    }
}

impl<S: State, E, C> Default for TableBuilder<S, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

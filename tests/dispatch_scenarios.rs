//! End-to-end dispatch scenarios: ordering, stack depth, discards,
//! terminal absorption and fail-fast aborts.

use eventide::builder::{BuildError, RuleBuilder, TableBuilder};
use eventide::config::DispatchConfig;
use eventide::core::{Event, State};
use eventide::runtime::{ActionError, Context, ContextTable, DispatchError};
use eventide::{event_enum, state_enum};
use std::cell::{Cell, RefCell};

state_enum! {
    enum Top {
        Idle,
        Running,
        Exited,
    }
    terminal: [Exited]
}

event_enum! {
    enum Ev {
        E1,
        E2,
        E3,
        Unknown,
    }
}

#[derive(Default)]
struct Trace {
    handled: RefCell<Vec<&'static str>>,
    fail_on_e2: bool,
    depth: Cell<u32>,
    max_depth: Cell<u32>,
}

impl Trace {
    fn failing() -> Self {
        Self {
            fail_on_e2: true,
            ..Self::default()
        }
    }

    fn enter(&self, event: &Ev) {
        self.handled.borrow_mut().push(event.kind());
        self.depth.set(self.depth.get() + 1);
        self.max_depth.set(self.max_depth.get().max(self.depth.get()));
    }

    fn leave(&self) {
        self.depth.set(self.depth.get() - 1);
    }

    fn handled(&self) -> Vec<&'static str> {
        self.handled.borrow().clone()
    }
}

type Ctx = Context<Top, Ev, Trace>;

fn two_state_chain() -> ContextTable<Top, Ev, Trace> {
    TableBuilder::new()
        .initial(Top::Idle)
        .rule(
            RuleBuilder::new()
                .from(Top::Idle)
                .on("E1")
                .to(Top::Running)
                .action(|e: &Ev, ctx: &Ctx| {
                    ctx.data().enter(e);
                    ctx.submit(Ev::E2)?;
                    ctx.data().leave();
                    Ok(())
                }),
        )
        .unwrap()
        .rule(
            RuleBuilder::new()
                .from(Top::Running)
                .on("E2")
                .to(Top::Exited)
                .action(|e: &Ev, ctx: &Ctx| {
                    ctx.data().enter(e);
                    ctx.data().leave();
                    Ok(())
                }),
        )
        .unwrap()
        .build()
        .unwrap()
}

/// idle -e1-> running queues e2 and e3; running -e2-> exited may fail;
/// running -e3-> running only records that it ran.
fn fan_out_chain() -> ContextTable<Top, Ev, Trace> {
    TableBuilder::new()
        .initial(Top::Idle)
        .rule(
            RuleBuilder::new()
                .from(Top::Idle)
                .on("E1")
                .to(Top::Running)
                .action(|e: &Ev, ctx: &Ctx| {
                    ctx.data().enter(e);
                    ctx.submit(Ev::E2)?;
                    ctx.submit(Ev::E3)?;
                    ctx.data().leave();
                    Ok(())
                }),
        )
        .unwrap()
        .rule(
            RuleBuilder::new()
                .from(Top::Running)
                .on("E2")
                .to(Top::Exited)
                .action(|e: &Ev, ctx: &Ctx| {
                    ctx.data().enter(e);
                    ctx.data().leave();
                    if ctx.data().fail_on_e2 {
                        return Err(ActionError::msg("e2 handler failed"));
                    }
                    Ok(())
                }),
        )
        .unwrap()
        .rule(
            RuleBuilder::new()
                .from(Top::Running)
                .on("E3")
                .to(Top::Running)
                .action(|e: &Ev, ctx: &Ctx| {
                    ctx.data().enter(e);
                    ctx.data().leave();
                    Ok(())
                }),
        )
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn chained_event_is_handled_before_submit_returns() {
    let ctx = Ctx::new(two_state_chain(), Trace::default());
    assert!(ctx.is_in(&Top::Idle));

    ctx.submit(Ev::E1).unwrap();

    assert_eq!(ctx.data().handled(), vec!["E1", "E2"]);
    assert_eq!(ctx.current_state(), Top::Exited);
    assert!(ctx.is_terminal());
    assert!(!ctx.is_draining());
    assert_eq!(ctx.pending(), 0);
}

#[test]
fn chained_events_are_handled_in_fifo_order() {
    let ctx = Ctx::new(fan_out_chain(), Trace::default());

    ctx.submit(Ev::E1).unwrap();

    // E3 was queued behind E2; E2 moved the machine to Exited first.
    assert_eq!(ctx.data().handled(), vec!["E1", "E2"]);
    assert!(ctx.is_in(&Top::Exited));
    assert_eq!(ctx.events_handled(), 3);
    assert_eq!(ctx.history().events(), vec!["E1", "E2"]);
}

#[test]
fn actions_never_nest() {
    let ctx = Ctx::new(two_state_chain(), Trace::default());

    ctx.submit(Ev::E1).unwrap();

    assert_eq!(ctx.data().max_depth.get(), 1);
    assert_eq!(ctx.data().depth.get(), 0);
}

#[test]
fn unmatched_event_is_a_silent_no_op() {
    let ctx = Ctx::new(two_state_chain(), Trace::default());

    assert!(ctx.submit(Ev::Unknown).is_ok());
    assert!(ctx.submit(Ev::E2).is_ok());

    assert!(ctx.is_in(&Top::Idle));
    assert!(ctx.data().handled().is_empty());
    assert!(ctx.history().transitions().is_empty());
}

#[test]
fn terminal_state_absorbs_further_events() {
    let ctx = Ctx::new(two_state_chain(), Trace::default());
    ctx.submit(Ev::E1).unwrap();
    assert!(ctx.is_terminal());

    for event in [Ev::E1, Ev::E2, Ev::E3, Ev::Unknown] {
        ctx.submit(event).unwrap();
        assert!(ctx.is_in(&Top::Exited));
    }
    assert_eq!(ctx.data().handled(), vec!["E1", "E2"]);
}

#[test]
fn failure_aborts_drain_and_discards_queued_events() {
    let ctx = Ctx::new(fan_out_chain(), Trace::failing());

    let err = ctx.submit(Ev::E1).unwrap_err();

    match err {
        DispatchError::ActionFailed {
            state,
            event,
            source,
        } => {
            assert_eq!(state, "Running");
            assert_eq!(event, "E2");
            assert_eq!(source.to_string(), "e2 handler failed");
        }
        other => panic!("expected action failure, got {other:?}"),
    }

    // E3 was queued behind the failing E2 and never reached the machine.
    assert_eq!(ctx.data().handled(), vec!["E1", "E2"]);
    assert_eq!(ctx.events_handled(), 2);
    assert!(ctx.is_in(&Top::Running));
    assert!(!ctx.is_draining());
    assert_eq!(ctx.pending(), 0);

    // Ready for a fresh submit: E3 is handled normally now.
    ctx.submit(Ev::E3).unwrap();
    assert_eq!(ctx.data().handled(), vec!["E1", "E2", "E3"]);
}

#[test]
fn rejected_follow_up_propagates_through_the_action() {
    let config = DispatchConfig::builder().max_pending(1).build();
    let ctx = Ctx::with_config(fan_out_chain(), Trace::default(), config);

    let err = ctx.submit(Ev::E1).unwrap_err();

    match err {
        DispatchError::ActionFailed {
            source: ActionError::Submit(inner),
            ..
        } => assert!(matches!(*inner, DispatchError::QueueFull { limit: 1 })),
        other => panic!("expected rejected follow-up, got {other:?}"),
    }
    assert!(ctx.is_in(&Top::Idle));
    assert_eq!(ctx.pending(), 0);
}

#[test]
fn rule_for_a_kind_outside_the_event_type_does_not_build() {
    let err = TableBuilder::<Top, Ev, Ctx>::new()
        .initial(Top::Idle)
        .rule(RuleBuilder::new().from(Top::Idle).on("e1").to(Top::Running))
        .unwrap()
        .build()
        .unwrap_err();

    assert_eq!(
        err.violations,
        vec![BuildError::UnknownEvent {
            index: 0,
            event: "e1".to_string(),
        }]
    );
}

mod ping_pong {
    use super::*;

    state_enum! {
        enum Side {
            Left,
            Right,
        }
    }

    event_enum! {
        enum Ball {
            Hit(u32),
        }
    }

    #[derive(Default)]
    struct Rally {
        hits: Cell<u32>,
        depth: Cell<u32>,
        max_depth: Cell<u32>,
        nested_handling: Cell<bool>,
    }

    type RallyCtx = Context<Side, Ball, Rally>;

    const RALLY_LENGTH: u32 = 50_000;

    fn volley(e: &Ball, ctx: &RallyCtx) -> Result<(), ActionError> {
        let rally = ctx.data();
        rally.depth.set(rally.depth.get() + 1);
        rally.max_depth.set(rally.max_depth.get().max(rally.depth.get()));
        if !ctx.machine().is_handling() || !ctx.is_draining() {
            rally.nested_handling.set(true);
        }
        rally.hits.set(rally.hits.get() + 1);

        let Ball::Hit(n) = e;
        if *n + 1 < RALLY_LENGTH {
            ctx.submit(Ball::Hit(n + 1))?;
        }

        rally.depth.set(rally.depth.get() - 1);
        Ok(())
    }

    fn table() -> ContextTable<Side, Ball, Rally> {
        TableBuilder::new()
            .initial(Side::Left)
            .rule(
                RuleBuilder::new()
                    .from(Side::Left)
                    .on("Hit")
                    .to(Side::Right)
                    .action(volley),
            )
            .unwrap()
            .rule(
                RuleBuilder::new()
                    .from(Side::Right)
                    .on("Hit")
                    .to(Side::Left)
                    .action(volley),
            )
            .unwrap()
            .build()
            .unwrap()
    }

    #[test]
    fn long_chain_runs_on_a_flat_stack() {
        let config = DispatchConfig::builder().record_history(false).build();
        let ctx = RallyCtx::with_config(table(), Rally::default(), config);

        ctx.submit(Ball::Hit(0)).unwrap();

        assert_eq!(ctx.data().hits.get(), RALLY_LENGTH);
        assert_eq!(ctx.data().max_depth.get(), 1);
        assert!(!ctx.data().nested_handling.get());
        assert!(ctx.is_in(&Side::Left));
        assert!(!Side::Left.is_terminal());
    }

    #[test]
    fn drain_limit_turns_runaway_rally_into_error() {
        let config = DispatchConfig::builder()
            .max_events_per_drain(100)
            .record_history(false)
            .build();
        let ctx = RallyCtx::with_config(table(), Rally::default(), config);

        let err = ctx.submit(Ball::Hit(0)).unwrap_err();

        assert!(matches!(err, DispatchError::DrainLimitExceeded { limit: 100 }));
        assert_eq!(ctx.data().hits.get(), 100);
        assert!(!ctx.is_draining());
        assert_eq!(ctx.pending(), 0);
    }
}

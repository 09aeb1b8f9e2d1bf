//! Two-State Chain
//!
//! The action on `idle -> running` raises `e2` while `e1` is still being
//! handled. The dispatcher queues it and hands it to the machine once the
//! first transition completes, so a single `submit(e1)` drives the machine
//! all the way to its terminal state.
//!
//! Run with: RUST_LOG=trace cargo run --example two_state_chain

use eventide::builder::{RuleBuilder, TableBuilder};
use eventide::core::Event;
use eventide::runtime::Context;
use eventide::{event_enum, state_enum};
use std::cell::RefCell;
use tracing_subscriber::EnvFilter;

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
    }
}

type Ctx = Context<Top, Ev, RefCell<Vec<&'static str>>>;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Two-State Chain Example ===\n");

    let table = TableBuilder::new()
        .initial(Top::Idle)
        .rule(
            RuleBuilder::new()
                .from(Top::Idle)
                .on("E1")
                .to(Top::Running)
                .action(|e: &Ev, ctx: &Ctx| {
                    println!("on_{}: raising E2", e.kind().to_lowercase());
                    ctx.data().borrow_mut().push(e.kind());
                    ctx.submit(Ev::E2)?;
                    println!("  E2 queued ({} pending)", ctx.pending());
                    Ok(())
                }),
        )?
        .rule(
            RuleBuilder::new()
                .from(Top::Running)
                .on("E2")
                .to(Top::Exited)
                .action(|e: &Ev, ctx: &Ctx| {
                    println!("on_{}", e.kind().to_lowercase());
                    ctx.data().borrow_mut().push(e.kind());
                    Ok(())
                }),
        )?
        .build()?;

    let ctx: Ctx = Context::new(table, RefCell::new(Vec::new()));
    println!("Initial state: {:?}\n", ctx.current_state());

    ctx.submit(Ev::E1)?;

    println!("\nFinal state: {:?}", ctx.current_state());
    println!("Terminal: {}", ctx.is_terminal());
    println!("Handled: {:?}", ctx.data().borrow());
    println!("Path: {:?}", ctx.history().get_path());

    println!("\n=== Example Complete ===");
    Ok(())
}

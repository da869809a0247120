//! # Demo: bounded_wait
//!
//! Polling a slow computation with a timeout loop.
//!
//! Demonstrates how to:
//! - Spawn a long-running eager task.
//! - Poll it with [`Task::wait_for`] while staying responsive.
//! - Read the result once the poll reports [`WaitStatus::Ready`].
//!
//! ## Flow
//! ```text
//! spawn(Immediate, fib(32)) ──► worker computes
//!
//! loop {
//!     wait_for(100ms)
//!       ├─ TimedOut ─► print a dot, keep waiting
//!       └─ Ready    ─► break, read the result
//! }
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example bounded_wait
//! ```

use std::io::Write;
use std::time::Duration;

use taskcell::{Task, TaskError, WaitStatus};

/// Deliberately naive recursion; slow enough to make the poll loop visible.
fn fib(n: u64) -> u64 {
    if n < 2 { n } else { fib(n - 1) + fib(n - 2) }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let task = Task::immediate(|| Ok::<_, TaskError>(fib(32)));

    print!("[main] computing fib(32) ");
    loop {
        match task.wait_for(Duration::from_millis(100)) {
            WaitStatus::Ready => break,
            WaitStatus::TimedOut => {
                print!(".");
                std::io::stdout().flush()?;
            }
            // Only deferred tasks report this; an eager task never does.
            WaitStatus::Deferred => unreachable!("immediate tasks are never parked"),
        }
    }
    println!();
    println!("[main] fib(32) = {}", task.result()?);

    Ok(())
}

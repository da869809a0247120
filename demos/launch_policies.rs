//! # Demo: launch_policies
//!
//! The same computation spawned under all three launch policies.
//!
//! Demonstrates how to:
//! - Spawn with an explicit [`LaunchPolicy`].
//! - Tell the policies apart through [`Task::wait_for`]:
//!   `Immediate` resolves on its own, `Deferred` reports
//!   [`WaitStatus::Deferred`] until demanded, `Auto` behaves as one of the
//!   two without saying which.
//!
//! ## Flow
//! ```text
//! spawn(Immediate, f) ──► worker runs f now      ──► wait_for → Ready (eventually)
//! spawn(Deferred,  f) ──► f parked               ──► wait_for → Deferred
//! spawn(Auto,      f) ──► committed at spawn     ──► contract identical either way
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example launch_policies
//! ```

use std::thread;
use std::time::Duration;

use taskcell::{LaunchPolicy, Task, TaskError, WaitStatus};

fn slow_double(x: u64) -> Result<u64, TaskError> {
    thread::sleep(Duration::from_millis(100));
    Ok(x * 2)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Immediate: the worker starts right away and resolves on its own.
    let eager = Task::spawn(LaunchPolicy::Immediate, || slow_double(21));
    println!("[immediate] spawned; waiting for the worker...");
    println!(
        "[immediate] wait_for(1s) = {}",
        eager.wait_for(Duration::from_secs(1)).as_label()
    );
    println!("[immediate] result = {}", eager.result()?);

    // Deferred: a bounded wait refuses to block on work nobody demanded.
    let lazy = Task::spawn(LaunchPolicy::Deferred, || slow_double(21));
    let status = lazy.wait_for(Duration::from_secs(1));
    assert_eq!(status, WaitStatus::Deferred);
    println!("[deferred] wait_for(1s) = {} (job is parked)", status.as_label());
    println!("[deferred] result = {} (ran on this thread)", lazy.result()?);

    // Auto: the library committed at spawn; the contract is the same.
    let auto = Task::spawn(LaunchPolicy::Auto, || slow_double(21));
    println!("[auto] policy() still reports {}", auto.policy().as_label());
    println!("[auto] result = {}", auto.result()?);

    Ok(())
}

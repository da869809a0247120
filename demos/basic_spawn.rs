//! # Demo: basic_spawn
//!
//! Minimal end-to-end walk-through: one eager task, one lazy task.
//!
//! Demonstrates how to:
//! - Spawn an eager computation with [`Task::immediate`].
//! - Spawn a lazy computation with [`Task::deferred`] and observe that it
//!   runs nothing until demanded.
//! - Read results idempotently from the spawning thread.
//!
//! ## Flow
//! ```text
//! Task::immediate(6 + 7) ──► worker thread runs now
//!     └─► result() ──► 13
//!
//! Task::deferred(4 * 6)  ──► job parked (side-effect counter stays 0)
//!     └─► result() ──► runs on this thread ──► 24 (counter is 1)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example basic_spawn
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use taskcell::Task;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Eager: the sum is computed on a worker thread, concurrently.
    let sum = Task::immediate(|| {
        println!("[sum] running on {:?}", std::thread::current().name());
        Ok(6 + 7)
    });
    println!("[main] spawned the sum; doing other work...");
    println!("[main] 6 + 7 = {}", sum.result()?);

    // 2. Lazy: nothing runs until the first demand.
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&runs);
    let product = Task::deferred(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        println!("[product] running on {:?}", std::thread::current().name());
        Ok(4 * 6)
    });

    println!("[main] runs before demand: {}", runs.load(Ordering::SeqCst));
    println!("[main] 4 * 6 = {}", product.result()?);
    println!("[main] runs after demand:  {}", runs.load(Ordering::SeqCst));

    // 3. Reads are idempotent; the job never runs again.
    println!("[main] again: {}", product.result()?);
    println!("[main] runs stayed at:     {}", runs.load(Ordering::SeqCst));

    Ok(())
}

//! # Demo: watchers
//!
//! Tracing task lifecycles through a [`Spawner`] with the built-in
//! [`LogWriter`] attached.
//!
//! Demonstrates how to:
//! - Build a [`Spawner`] with [`Spawner::builder`] and attach watchers.
//! - Spawn named tasks under different policies.
//! - Read the lifecycle trace: spawned, started, resolved / failed /
//!   discarded.
//!
//! ## Flow
//! ```text
//! Spawner (LogWriter attached)
//!   ├─ spawn_with("sum", Immediate, ..)  ─► spawned, started, resolved
//!   ├─ spawn_with("bad", Immediate, ..)  ─► spawned, started, failed
//!   └─ spawn_with("skip", Deferred, ..)  ─► spawned, discarded (never demanded)
//!
//! drop(spawner) ─► queues drain, workers join, output is complete
//! ```
//!
//! ## Run
//! Requires the `logging` feature to export [`LogWriter`].
//! ```bash
//! cargo run --example watchers --features logging
//! ```

use std::sync::Arc;

use taskcell::{Config, LaunchPolicy, LogWriter, Spawner, Task, TaskError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let spawner = Spawner::builder(Config::default())
        .with_watcher(Arc::new(LogWriter::new()))
        .build();

    // Resolves: spawned → started → resolved.
    let sum = spawner.spawn_with("sum", LaunchPolicy::Immediate, || Ok(6 + 7));
    println!("[main] sum = {}", sum.result()?);
    drop(sum);

    // Fails: spawned → started → failed; the error reaches readers too.
    let bad: Task<u32> = spawner.spawn_with("bad", LaunchPolicy::Immediate, || {
        Err(TaskError::Failed {
            message: "bad input".into(),
        })
    });
    println!("[main] bad = {:?}", bad.result().unwrap_err().as_message());
    drop(bad);

    // Discarded: spawned → discarded (deferred, never demanded).
    let skip: Task<u32> = spawner.spawn_with("skip", LaunchPolicy::Deferred, || Ok(0));
    drop(skip);

    // Dropping the spawner flushes the watcher queues before returning.
    drop(spawner);
    println!("[main] trace complete");

    Ok(())
}

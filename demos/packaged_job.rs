//! # Demo: packaged_job
//!
//! A computation packaged up front and run later, on a thread the caller
//! picks.
//!
//! Demonstrates how to:
//! - Split a computation into a [`PackagedJob`] and a passive
//!   [`ResultHandle`].
//! - Move the job to a worker thread and run it there explicitly.
//! - Show that dropping a job un-run fails its readers instead of hanging
//!   them.
//!
//! ## Flow
//! ```text
//! PackagedJob::new(f) ──► (job, handle)
//!        │                    └─► handle.read() blocks
//!        └─► moved to a worker ──► job.run() ──► handle wakes
//!
//! drop(job un-run) ──► handle.read() → Err(Discarded)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example packaged_job
//! ```

use std::thread;

use taskcell::{PackagedJob, TaskError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Package now, run later: the caller owns the scheduling decision.
    let (job, handle) = PackagedJob::new(|| Ok::<_, TaskError>(6 * 7));

    let worker = thread::spawn(move || {
        println!("[worker] running the packaged job");
        job.run();
    });

    println!("[main] waiting on the handle...");
    println!("[main] job produced {}", handle.read()?);
    worker.join().unwrap();

    // 2. A job that is dropped un-run resolves its readers with a failure.
    let (job, handle) = PackagedJob::<u64>::new(|| Ok(1));
    drop(job);
    let err = handle.read().unwrap_err();
    println!("[main] discarded job reports: {err}");

    Ok(())
}

//! # Run a single job to resolution.
//!
//! Executes a task's job exactly once: converts panics into failures, stores
//! the outcome in the task's cell and publishes lifecycle events.
//!
//! ## Event flow
//!
//! ```text
//! Success:
//!   job() → Ok(value)  → cell.resolve(value)        → publish TaskResolved
//!
//! Failure:
//!   job() → Err(e)     → cell.resolve_failure(e)    → publish TaskFailed
//!
//! Panic:
//!   job() panics → caught → cell.resolve_failure(Panicked) → publish TaskFailed
//! ```
//!
//! ## Rules
//! - Callers guarantee single ownership of the job ([`Shared::take_job`]
//!   hands it out at most once), so each job runs exactly once.
//! - Publishes `TaskStarted` before the job runs and **exactly one** terminal
//!   event after: `TaskResolved` or `TaskFailed`.
//! - The cell is resolved before the terminal event is published; readers may
//!   be running again before watchers hear about the outcome.
//! - Panics never escape: they are captured as [`TaskError::Panicked`].

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::cells::ResultCell;
use crate::error::TaskError;
use crate::events::{Event, EventKind};
use crate::tasks::shared::{Job, Shared};

/// Runs `job` on the calling thread, resolving `shared.cell` and publishing
/// lifecycle events.
///
/// ### Flow
/// 1. Publish `TaskStarted`
/// 2. Execute the job (panics caught)
/// 3. Resolve the cell, then publish `TaskResolved`/`TaskFailed`
pub(crate) fn run_job<T>(shared: &Shared<T>, job: Job<T>) {
    publish_started(shared);
    let started = Instant::now();
    let outcome = execute_into(job, &shared.cell);
    let elapsed = started.elapsed();
    match outcome {
        Ok(()) => publish_resolved(shared, elapsed),
        Err(err) => publish_failed(shared, &err, elapsed),
    }
}

/// Demands the task's outcome: the first demanding thread runs a parked job
/// in place; everyone else finds the job already taken and simply waits on
/// the cell.
pub(crate) fn demand<T>(shared: &Shared<T>) {
    if let Some(job) = shared.take_job() {
        run_job(shared, job);
    }
}

/// Executes one job and stores its outcome in `cell`.
///
/// Panics are caught and stored as [`TaskError::Panicked`] so readers always
/// observe a resolution. Returns a copy of the stored failure, if any, for
/// reporting.
pub(crate) fn execute_into<T>(job: Job<T>, cell: &ResultCell<T>) -> Result<(), TaskError> {
    match panic::catch_unwind(AssertUnwindSafe(|| job())) {
        Ok(Ok(value)) => {
            let _ = cell.resolve(value);
            Ok(())
        }
        Ok(Err(err)) => {
            let _ = cell.resolve_failure(err.clone());
            Err(err)
        }
        Err(payload) => {
            let err = TaskError::Panicked {
                message: panic_text(payload.as_ref()),
            };
            let _ = cell.resolve_failure(err.clone());
            Err(err)
        }
    }
}

/// Publishes `TaskSpawned` with the requested policy.
pub(crate) fn publish_spawned<T>(shared: &Shared<T>) {
    if let Some(watchers) = &shared.watchers {
        watchers.emit(
            &Event::new(EventKind::TaskSpawned)
                .with_task(Arc::clone(&shared.name))
                .with_policy(shared.policy),
        );
    }
}

/// Publishes `TaskStarted` (the job is about to run).
fn publish_started<T>(shared: &Shared<T>) {
    if let Some(watchers) = &shared.watchers {
        watchers.emit(&Event::new(EventKind::TaskStarted).with_task(Arc::clone(&shared.name)));
    }
}

/// Publishes `TaskResolved` with the job's run time.
fn publish_resolved<T>(shared: &Shared<T>, elapsed: Duration) {
    if let Some(watchers) = &shared.watchers {
        watchers.emit(
            &Event::new(EventKind::TaskResolved)
                .with_task(Arc::clone(&shared.name))
                .with_elapsed(elapsed),
        );
    }
}

/// Publishes `TaskFailed` with failure details.
fn publish_failed<T>(shared: &Shared<T>, err: &TaskError, elapsed: Duration) {
    if let Some(watchers) = &shared.watchers {
        watchers.emit(
            &Event::new(EventKind::TaskFailed)
                .with_task(Arc::clone(&shared.name))
                .with_reason(err.to_string())
                .with_elapsed(elapsed),
        );
    }
}

/// Extracts a readable message from a panic payload.
fn panic_text(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::policies::LaunchPolicy;

    fn bare_shared<T>() -> Shared<T> {
        Shared::new("test-job".into(), LaunchPolicy::Deferred, None, None)
    }

    #[test]
    fn test_run_job_resolves_value() {
        let shared = bare_shared();
        run_job(&shared, Box::new(|| Ok(6 + 7)));
        assert_eq!(shared.cell.read().unwrap(), 13);
    }

    #[test]
    fn test_run_job_captures_returned_error() {
        let shared: Shared<u32> = bare_shared();
        run_job(
            &shared,
            Box::new(|| {
                Err(TaskError::Failed {
                    message: "no luck".into(),
                })
            }),
        );
        let err = shared.cell.read().unwrap_err();
        assert_eq!(err.as_label(), "task_failed");
        assert_eq!(err.as_message(), "error: no luck");
    }

    #[test]
    fn test_run_job_captures_panic() {
        let shared: Shared<u32> = bare_shared();
        run_job(&shared, Box::new(|| panic!("kaboom")));
        let err = shared.cell.read().unwrap_err();
        assert!(err.is_panic());
        assert!(err.as_message().contains("kaboom"));
    }

    #[test]
    fn test_demand_runs_parked_job_once() {
        static RUNS: AtomicUsize = AtomicUsize::new(0);
        let shared = Shared::new(
            "counted".into(),
            LaunchPolicy::Deferred,
            None,
            Some(Box::new(|| {
                RUNS.fetch_add(1, Ordering::SeqCst);
                Ok(5)
            })),
        );
        assert!(shared.is_parked());
        demand(&shared);
        demand(&shared);
        assert_eq!(RUNS.load(Ordering::SeqCst), 1);
        assert!(!shared.is_parked());
        assert_eq!(shared.cell.read().unwrap(), 5);
    }

    #[test]
    fn test_panic_text_handles_common_payloads() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("static text");
        assert_eq!(panic_text(boxed.as_ref()), "static text");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("owned text"));
        assert_eq!(panic_text(boxed.as_ref()), "owned text");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(42u8);
        assert_eq!(panic_text(boxed.as_ref()), "opaque panic payload");
    }
}

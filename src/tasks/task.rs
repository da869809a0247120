//! # One-shot tasks with policy-driven starts.
//!
//! [`Task`] binds a zero-argument computation to a result cell and a
//! [`LaunchPolicy`]. The computation runs **exactly once** no matter how many
//! threads ask for the outcome, and the outcome (value or failure) is
//! delivered to every reader.
//!
//! ## Lifecycle
//! ```text
//! Task::spawn(policy, job)
//!   │
//!   ├─ Immediate ──► worker thread ──► run_job ──► cell resolved
//!   │                                    ▲
//!   ├─ Deferred ───► job parked ─────────┘ (first result()/wait() demand
//!   │                                       runs it on the demanding thread)
//!   └─ Auto ───────► committed to one of the above, once, at spawn
//!
//! result()/wait()  → demand + block until resolved
//! wait_for(d)      → bounded wait; Deferred for parked jobs
//! drop(task)       → joins the worker thread, if one was started
//! ```
//!
//! ## Rules
//! - Dropping a task with a worker thread blocks until the job finished
//!   (implicit join); work in flight is never abandoned mid-run.
//! - Dropping a deferred task that was never demanded discards the job; if
//!   a [`TaskHandle`] is still alive, it keeps the job demandable.
//! - Failures (returned errors and panics) are captured into the cell and
//!   re-delivered to every reader; they never unwind into the spawning
//!   thread.
//!
//! ## Example
//! ```rust
//! use taskcell::{LaunchPolicy, Task};
//!
//! // Eager: runs concurrently with the caller.
//! let sum = Task::immediate(|| Ok(6 + 7));
//! assert_eq!(sum.result().unwrap(), 13);
//!
//! // Lazy: runs on the first demanding thread.
//! let product = Task::deferred(|| Ok(4 * 6));
//! assert_eq!(product.result().unwrap(), 24);
//! ```

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crate::cells::WaitStatus;
use crate::error::TaskError;
use crate::policies::{LaunchMode, LaunchPolicy};
use crate::tasks::handle::TaskHandle;
use crate::tasks::runner;
use crate::tasks::shared::{Job, Shared};
use crate::watchers::WatcherSet;

/// Counter feeding auto-generated task names ("task-0", "task-1", ...).
static TASK_SEQ: AtomicU64 = AtomicU64::new(0);

/// A one-shot computation bound to a result cell and a launch policy.
///
/// The computation runs exactly once; its value (or captured failure) can be
/// read any number of times, from any number of threads, through the task or
/// through [`TaskHandle`]s cloned off it.
pub struct Task<T> {
    shared: Arc<Shared<T>>,
    worker: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Task<T> {
    /// Spawns a computation under the given launch policy.
    ///
    /// - [`LaunchPolicy::Immediate`]: the job starts now, on a dedicated
    ///   worker thread.
    /// - [`LaunchPolicy::Deferred`]: the job is parked; the first
    ///   [`result`](Self::result)/[`wait`](Self::wait) runs it on the
    ///   demanding thread.
    /// - [`LaunchPolicy::Auto`]: one of the above, committed once, here.
    ///
    /// The task gets an auto-generated name (`task-N`); use
    /// [`Spawner::spawn`](crate::Spawner::spawn) to name tasks and attach
    /// watchers.
    ///
    /// ### Panics
    /// Panics if the OS refuses to create a worker thread (resource
    /// exhaustion). Only eager-committed tasks spawn a thread; deferred
    /// tasks never do.
    pub fn spawn<F>(policy: LaunchPolicy, f: F) -> Self
    where
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        let seq = TASK_SEQ.fetch_add(1, AtomicOrdering::Relaxed);
        Self::spawn_named(format!("task-{seq}").into(), policy, None, f)
    }

    /// Shorthand for [`spawn`](Self::spawn) with [`LaunchPolicy::Immediate`].
    pub fn immediate<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        Self::spawn(LaunchPolicy::Immediate, f)
    }

    /// Shorthand for [`spawn`](Self::spawn) with [`LaunchPolicy::Deferred`].
    pub fn deferred<F>(f: F) -> Self
    where
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        Self::spawn(LaunchPolicy::Deferred, f)
    }

    /// Spawns a named task, optionally wired to a watcher set.
    pub(crate) fn spawn_named<F>(
        name: Arc<str>,
        policy: LaunchPolicy,
        watchers: Option<Arc<WatcherSet>>,
        f: F,
    ) -> Self
    where
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        let job: Job<T> = Box::new(f);
        match policy.commit() {
            LaunchMode::Eager => {
                let shared = Arc::new(Shared::new(name, policy, watchers, None));
                runner::publish_spawned(&shared);
                let worker_shared = Arc::clone(&shared);
                let worker = thread::Builder::new()
                    .name(format!("taskcell-{}", shared.name))
                    .spawn(move || runner::run_job(&worker_shared, job))
                    .expect("failed to spawn task worker thread");
                Self {
                    shared,
                    worker: Some(worker),
                }
            }
            LaunchMode::Lazy => {
                let shared = Arc::new(Shared::new(name, policy, watchers, Some(job)));
                runner::publish_spawned(&shared);
                Self {
                    shared,
                    worker: None,
                }
            }
        }
    }
}

impl<T> Task<T> {
    /// Blocks until the outcome is available, then clones it out.
    ///
    /// Demands parked work: for a deferred task the first caller runs the
    /// job on its own thread before reading. Safe to call from any number
    /// of threads, any number of times; every call observes the same
    /// resolution.
    pub fn result(&self) -> Result<T, TaskError>
    where
        T: Clone,
    {
        runner::demand(&self.shared);
        self.shared.cell.read()
    }

    /// Blocks until the outcome is available, without reading it.
    ///
    /// Demands parked work, like [`result`](Self::result).
    pub fn wait(&self) {
        runner::demand(&self.shared);
        self.shared.cell.wait();
    }

    /// Waits for the outcome, up to `timeout`, without demanding.
    ///
    /// Returns:
    /// - [`WaitStatus::Ready`] once the outcome is stored,
    /// - [`WaitStatus::TimedOut`] if the wait elapsed first,
    /// - [`WaitStatus::Deferred`] if the job is parked and nobody has
    ///   demanded it (the call returns immediately; a parked job cannot
    ///   resolve on its own).
    pub fn wait_for(&self, timeout: Duration) -> WaitStatus {
        self.shared.wait_for(timeout)
    }

    /// Returns a cloneable, demand-capable handle to this task's outcome.
    pub fn handle(&self) -> TaskHandle<T> {
        TaskHandle::new(Arc::clone(&self.shared))
    }

    /// The task's name (auto-generated unless spawned through a `Spawner`).
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The launch policy the caller requested.
    ///
    /// For [`LaunchPolicy::Auto`] this stays `Auto`; which way the coin fell
    /// is deliberately not observable.
    pub fn policy(&self) -> LaunchPolicy {
        self.shared.policy
    }

    /// Returns `true` once the outcome (value or failure) is stored.
    pub fn is_resolved(&self) -> bool {
        self.shared.cell.is_resolved()
    }
}

impl<T> Drop for Task<T> {
    /// Joins the worker thread, if one was started (implicit join).
    ///
    /// Dropping an immediate task therefore blocks until its job finished;
    /// in-flight work is never abandoned. Deferred tasks have no worker and
    /// drop without blocking.
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

impl<T> fmt::Debug for Task<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name())
            .field("policy", &self.policy())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Instant;

    use super::*;

    #[test]
    fn test_immediate_task_delivers_value() {
        let task = Task::immediate(|| Ok(6 + 7));
        assert_eq!(task.result().unwrap(), 13);
        assert_eq!(task.policy(), LaunchPolicy::Immediate);
    }

    #[test]
    fn test_results_are_idempotent() {
        let task = Task::immediate(|| Ok(String::from("same")));
        assert_eq!(task.result().unwrap(), "same");
        assert_eq!(task.result().unwrap(), "same");
        assert_eq!(task.result().unwrap(), "same");
    }

    #[test]
    fn test_deferred_runs_only_on_demand() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(4 * 6)
        });

        thread::sleep(Duration::from_millis(40));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert!(!task.is_resolved());

        assert_eq!(task.result().unwrap(), 24);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_deferred_job_runs_once_under_contention() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(10));
            Ok(99u32)
        });

        let mut readers = Vec::new();
        for _ in 0..8 {
            let handle = task.handle();
            readers.push(thread::spawn(move || handle.result()));
        }
        for reader in readers {
            assert_eq!(reader.join().unwrap().unwrap(), 99);
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_concurrent_readers_observe_same_value() {
        let task = Task::immediate(|| {
            thread::sleep(Duration::from_millis(20));
            Ok(vec![1, 2, 3])
        });

        let mut readers = Vec::new();
        for _ in 0..8 {
            let handle = task.handle();
            readers.push(thread::spawn(move || handle.result()));
        }
        for reader in readers {
            assert_eq!(reader.join().unwrap().unwrap(), vec![1, 2, 3]);
        }
    }

    #[test]
    fn test_failure_propagates_regardless_of_policy() {
        for policy in [LaunchPolicy::Immediate, LaunchPolicy::Deferred] {
            let task: Task<u32> = Task::spawn(policy, || {
                Err(TaskError::Failed {
                    message: "bad input".into(),
                })
            });
            let err = task.result().unwrap_err();
            assert_eq!(err.as_label(), "task_failed");
            assert_eq!(err.as_message(), "error: bad input");
            // Re-reads deliver the same failure.
            assert!(task.result().is_err());
        }
    }

    #[test]
    fn test_panic_is_captured_not_propagated() {
        let task: Task<u32> = Task::immediate(|| panic!("kaboom"));
        let err = task.result().unwrap_err();
        assert!(err.is_panic());
        assert!(err.as_message().contains("kaboom"));
    }

    #[test]
    fn test_wait_for_reports_deferred_without_blocking() {
        let task = Task::deferred(|| Ok(1));
        let started = Instant::now();
        assert_eq!(task.wait_for(Duration::from_secs(60)), WaitStatus::Deferred);
        // Deferred must come back immediately, not after the timeout.
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(!task.is_resolved());
    }

    #[test]
    fn test_wait_for_times_out_then_turns_ready() {
        let task = Task::immediate(|| {
            thread::sleep(Duration::from_millis(80));
            Ok(7)
        });
        assert_eq!(task.wait_for(Duration::from_millis(5)), WaitStatus::TimedOut);
        assert_eq!(task.wait_for(Duration::from_secs(5)), WaitStatus::Ready);
        assert_eq!(task.result().unwrap(), 7);
    }

    #[test]
    fn test_wait_for_accepts_max_duration() {
        let task = Task::immediate(|| Ok(3));
        task.wait();
        // No representable deadline; must report readiness, not panic.
        assert_eq!(task.wait_for(Duration::MAX), WaitStatus::Ready);
        assert_eq!(task.result().unwrap(), 3);
    }

    #[test]
    fn test_wait_demands_deferred_work() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        });
        task.wait();
        assert!(task.is_resolved());
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_auto_policy_stays_opaque() {
        let task = Task::spawn(LaunchPolicy::Auto, || Ok(21 * 2));
        assert_eq!(task.policy(), LaunchPolicy::Auto);
        // Whichever mode was committed, the contract holds.
        assert_eq!(task.result().unwrap(), 42);
        assert_eq!(task.wait_for(Duration::ZERO), WaitStatus::Ready);
    }

    #[test]
    fn test_drop_joins_immediate_worker() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&finished);
        let task = Task::immediate(move || {
            thread::sleep(Duration::from_millis(50));
            flag.store(true, Ordering::SeqCst);
            Ok(())
        });
        drop(task);
        // Drop blocked until the worker finished.
        assert!(finished.load(Ordering::SeqCst));
    }

    #[test]
    fn test_auto_generated_names_are_unique() {
        let a: Task<u32> = Task::deferred(|| Ok(1));
        let b: Task<u32> = Task::deferred(|| Ok(2));
        assert!(a.name().starts_with("task-"));
        assert_ne!(a.name(), b.name());
    }

    #[test]
    fn test_end_to_end_sum_and_product() {
        let sum = Task::immediate(|| Ok(6 + 7));
        assert_eq!(sum.result().unwrap(), 13);

        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let product = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(4 * 6)
        });
        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(product.result().unwrap(), 24);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}

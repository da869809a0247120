//! # PackagedJob: a work unit wired to a result cell, run by the caller.
//!
//! [`PackagedJob`] decouples *creating* a computation from *running* it.
//! Packaging a closure yields the job plus a passive [`ResultHandle`]; the
//! job can then be moved wherever it should run (a thread the caller manages,
//! a queue, the current thread) while readers block on the handle.
//!
//! Unlike [`Task`](crate::Task), nothing here schedules anything: whoever
//! holds the job decides where and when it runs.
//!
//! ## Rules
//! - [`PackagedJob::run`] consumes the job; a job runs at most once by
//!   construction.
//! - Panics inside the job are captured as failures, exactly like task jobs.
//! - Dropping a job **un-run** resolves the handle with
//!   [`TaskError::Discarded`], so readers never block forever on work that
//!   can no longer happen.
//!
//! ## Example
//! ```rust
//! use std::thread;
//! use taskcell::PackagedJob;
//!
//! let (job, handle) = PackagedJob::new(|| Ok(6 + 7));
//!
//! // Run the job on a thread of our choosing.
//! let worker = thread::spawn(move || job.run());
//!
//! assert_eq!(handle.read().unwrap(), 13);
//! worker.join().unwrap();
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::cells::{ResultCell, WaitStatus};
use crate::error::TaskError;
use crate::tasks::runner;
use crate::tasks::shared::Job;

/// A boxed computation bound to a result cell, run explicitly by the caller.
pub struct PackagedJob<T> {
    job: Option<Job<T>>,
    cell: Arc<ResultCell<T>>,
}

/// Passive reader attached to a [`PackagedJob`].
///
/// Unlike [`TaskHandle`](crate::TaskHandle), a `ResultHandle` cannot demand
/// execution; it only observes. Whoever holds the job decides when it runs.
pub struct ResultHandle<T> {
    cell: Arc<ResultCell<T>>,
}

impl<T: Send + 'static> PackagedJob<T> {
    /// Packages a computation, returning the job and a reader for its outcome.
    pub fn new<F>(f: F) -> (Self, ResultHandle<T>)
    where
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        let cell = Arc::new(ResultCell::new());
        let handle = ResultHandle {
            cell: Arc::clone(&cell),
        };
        let job = Self {
            job: Some(Box::new(f)),
            cell,
        };
        (job, handle)
    }

    /// Runs the job on the calling thread, resolving the handle.
    ///
    /// Panics inside the job are captured as [`TaskError::Panicked`] and
    /// delivered to readers instead of unwinding into the caller.
    pub fn run(mut self) {
        if let Some(job) = self.job.take() {
            let _ = runner::execute_into(job, &self.cell);
        }
    }
}

impl<T> Drop for PackagedJob<T> {
    /// Resolves the handle with [`TaskError::Discarded`] if the job never ran.
    fn drop(&mut self) {
        if self.job.is_some() {
            let _ = self.cell.resolve_failure(TaskError::Discarded);
        }
    }
}

impl<T> fmt::Debug for PackagedJob<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PackagedJob")
            .field("ran", &self.job.is_none())
            .finish()
    }
}

impl<T> ResultHandle<T> {
    /// Blocks until the job ran (or was discarded), then clones the outcome.
    pub fn read(&self) -> Result<T, TaskError>
    where
        T: Clone,
    {
        self.cell.read()
    }

    /// Blocks until an outcome is stored, without reading it.
    pub fn wait(&self) {
        self.cell.wait();
    }

    /// Waits for the outcome, up to `timeout`.
    ///
    /// Reports only [`WaitStatus::Ready`] or [`WaitStatus::TimedOut`]; a
    /// passive handle cannot know whether anyone intends to run the job.
    pub fn poll_for(&self, timeout: Duration) -> WaitStatus {
        self.cell.poll_for(timeout)
    }

    /// Non-blocking peek at the outcome.
    pub fn try_read(&self) -> Option<Result<T, TaskError>>
    where
        T: Clone,
    {
        self.cell.try_read()
    }

    /// Returns `true` once the outcome (value or failure) is stored.
    pub fn is_resolved(&self) -> bool {
        self.cell.is_resolved()
    }
}

impl<T> Clone for ResultHandle<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> fmt::Debug for ResultHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultHandle")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn test_run_resolves_the_handle() {
        let (job, handle) = PackagedJob::new(|| Ok(6 + 7));
        let worker = thread::spawn(move || job.run());
        assert_eq!(handle.read().unwrap(), 13);
        worker.join().unwrap();
    }

    #[test]
    fn test_handle_waits_for_a_late_run() {
        let (job, handle) = PackagedJob::new(|| Ok(41 + 1));
        assert_eq!(
            handle.poll_for(Duration::from_millis(10)),
            WaitStatus::TimedOut
        );
        assert!(handle.try_read().is_none());

        job.run();
        assert_eq!(handle.poll_for(Duration::ZERO), WaitStatus::Ready);
        assert_eq!(handle.read().unwrap(), 42);
    }

    #[test]
    fn test_dropping_an_unrun_job_fails_readers() {
        let (job, handle) = PackagedJob::new(|| Ok(1));
        drop(job);
        let err = handle.read().unwrap_err();
        assert_eq!(err.as_label(), "task_discarded");
    }

    #[test]
    fn test_panic_in_job_is_captured() {
        let (job, handle) = PackagedJob::<u32>::new(|| panic!("snapped"));
        job.run();
        let err = handle.read().unwrap_err();
        assert!(err.is_panic());
        assert!(err.as_message().contains("snapped"));
    }

    #[test]
    fn test_cloned_handles_observe_one_outcome() {
        let (job, handle) = PackagedJob::new(|| Ok(String::from("done")));
        let other = handle.clone();
        job.run();
        assert_eq!(handle.read().unwrap(), "done");
        assert_eq!(other.read().unwrap(), "done");
    }
}

//! # TaskHandle: shared, demand-capable access to a task's outcome.
//!
//! [`TaskHandle`] is a cloneable view of a [`Task`](crate::Task)'s result
//! cell. Handles can:
//!
//! - demand the outcome ([`result`](TaskHandle::result) /
//!   [`wait`](TaskHandle::wait)), running a parked deferred job exactly once,
//! - poll with a bound ([`wait_for`](TaskHandle::wait_for)),
//! - outlive the task: a handle keeps the shared state (and any parked job)
//!   alive, so a deferred job stays demandable even after the `Task` value
//!   was dropped.
//!
//! Handles never join worker threads; only dropping the owning `Task` does.
//!
//! ## Example
//! ```rust
//! use std::thread;
//! use taskcell::Task;
//!
//! let task = Task::immediate(|| Ok::<_, taskcell::TaskError>(6 + 7));
//!
//! let mut readers = Vec::new();
//! for _ in 0..4 {
//!     let handle = task.handle();
//!     readers.push(thread::spawn(move || handle.result()));
//! }
//! for reader in readers {
//!     assert_eq!(reader.join().unwrap().unwrap(), 13);
//! }
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::cells::WaitStatus;
use crate::error::TaskError;
use crate::policies::LaunchPolicy;
use crate::tasks::runner;
use crate::tasks::shared::Shared;

/// Cloneable, demand-capable view of a task's outcome.
pub struct TaskHandle<T> {
    shared: Arc<Shared<T>>,
}

impl<T> TaskHandle<T> {
    pub(crate) fn new(shared: Arc<Shared<T>>) -> Self {
        Self { shared }
    }

    /// Blocks until the outcome is available, then clones it out.
    ///
    /// Demands parked work exactly like [`Task::result`](crate::Task::result):
    /// the first demanding thread runs a deferred job in place.
    pub fn result(&self) -> Result<T, TaskError>
    where
        T: Clone,
    {
        runner::demand(&self.shared);
        self.shared.cell.read()
    }

    /// Blocks until the outcome is available, without reading it.
    pub fn wait(&self) {
        runner::demand(&self.shared);
        self.shared.cell.wait();
    }

    /// Waits for the outcome, up to `timeout`, without demanding.
    ///
    /// Same contract as [`Task::wait_for`](crate::Task::wait_for).
    pub fn wait_for(&self, timeout: Duration) -> WaitStatus {
        self.shared.wait_for(timeout)
    }

    /// The task's name.
    pub fn name(&self) -> &str {
        &self.shared.name
    }

    /// The launch policy the caller requested.
    pub fn policy(&self) -> LaunchPolicy {
        self.shared.policy
    }

    /// Returns `true` once the outcome (value or failure) is stored.
    pub fn is_resolved(&self) -> bool {
        self.shared.cell.is_resolved()
    }
}

impl<T> Clone for TaskHandle<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for TaskHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskHandle")
            .field("name", &self.name())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use super::*;
    use crate::tasks::Task;

    #[test]
    fn test_handle_reports_task_metadata() {
        let task = Task::spawn(LaunchPolicy::Deferred, || Ok(1));
        let handle = task.handle();
        assert_eq!(handle.name(), task.name());
        assert_eq!(handle.policy(), LaunchPolicy::Deferred);
        assert!(!handle.is_resolved());
    }

    #[test]
    fn test_handle_keeps_deferred_job_demandable_after_task_drop() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(11)
        });
        let handle = task.handle();
        drop(task); // no worker to join; the handle keeps the job parked

        assert_eq!(runs.load(Ordering::SeqCst), 0);
        assert_eq!(handle.result().unwrap(), 11);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_cloned_handles_share_one_execution() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let task = Task::deferred(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(String::from("shared"))
        });

        let handle = task.handle();
        let mut readers = Vec::new();
        for _ in 0..4 {
            let handle = handle.clone();
            readers.push(thread::spawn(move || handle.result()));
        }
        for reader in readers {
            assert_eq!(reader.join().unwrap().unwrap(), "shared");
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handle_wait_blocks_until_resolution() {
        let task = Task::immediate(|| {
            thread::sleep(Duration::from_millis(30));
            Ok(5)
        });
        let handle = task.handle();
        handle.wait();
        assert!(handle.is_resolved());
        assert_eq!(handle.wait_for(Duration::ZERO), WaitStatus::Ready);
    }
}

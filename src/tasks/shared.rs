//! # Shared task state: result cell, parked job, metadata.
//!
//! [`Shared`] is the state every owner of a task points at: the [`Task`]
//! itself, each [`TaskHandle`](crate::TaskHandle) cloned from it, and the
//! worker thread (for eager tasks). It bundles:
//!
//! - the [`ResultCell`] carrying the outcome to every reader,
//! - the **parked job** of a deferred task, waiting for its first demand,
//! - the task's name, requested policy and (optional) watcher set.
//!
//! ## Rules
//! - Eager tasks never park: the worker thread owns the job from the start,
//!   so a parked job always means "deferred and not yet demanded".
//! - `take_job` hands the job to **at most one** caller; this is what makes
//!   execution exactly-once under concurrent demands.
//! - When the last owner drops `Shared` with the job still parked, the job
//!   is discarded and a `TaskDiscarded` event is published (if watchers are
//!   attached).
//!
//! [`Task`]: crate::Task
//! [`ResultCell`]: crate::ResultCell

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use crate::cells::{ResultCell, WaitStatus};
use crate::error::TaskError;
use crate::events::{Event, EventKind};
use crate::policies::LaunchPolicy;
use crate::watchers::WatcherSet;

/// A unit of work: runs once, yields a value or a failure.
pub(crate) type Job<T> = Box<dyn FnOnce() -> Result<T, TaskError> + Send + 'static>;

/// State shared between a task, its handles and its runner.
pub(crate) struct Shared<T> {
    pub(crate) cell: ResultCell<T>,
    job: Mutex<Option<Job<T>>>,
    pub(crate) name: Arc<str>,
    pub(crate) policy: LaunchPolicy,
    pub(crate) watchers: Option<Arc<WatcherSet>>,
}

impl<T> Shared<T> {
    pub(crate) fn new(
        name: Arc<str>,
        policy: LaunchPolicy,
        watchers: Option<Arc<WatcherSet>>,
        job: Option<Job<T>>,
    ) -> Self {
        Self {
            cell: ResultCell::new(),
            job: Mutex::new(job),
            name,
            policy,
            watchers,
        }
    }

    /// Takes the parked job, if any. At most one caller ever receives it.
    pub(crate) fn take_job(&self) -> Option<Job<T>> {
        self.lock_job().take()
    }

    /// True while a deferred job is parked and nobody has demanded it.
    pub(crate) fn is_parked(&self) -> bool {
        self.lock_job().is_some()
    }

    /// Status of the outcome after waiting at most `timeout`.
    ///
    /// A parked job cannot resolve on its own, so the wait returns
    /// [`WaitStatus::Deferred`] immediately instead of blocking on work
    /// that never starts.
    pub(crate) fn wait_for(&self, timeout: Duration) -> WaitStatus {
        if self.cell.is_resolved() {
            return WaitStatus::Ready;
        }
        if self.is_parked() {
            return WaitStatus::Deferred;
        }
        self.cell.poll_for(timeout)
    }

    fn lock_job(&self) -> MutexGuard<'_, Option<Job<T>>> {
        match self.job.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        // A job still parked here was never demanded: report the discard.
        let parked = match self.job.get_mut() {
            Ok(job) => job.is_some(),
            Err(poisoned) => poisoned.into_inner().is_some(),
        };
        if parked {
            if let Some(watchers) = &self.watchers {
                watchers
                    .emit(&Event::new(EventKind::TaskDiscarded).with_task(Arc::clone(&self.name)));
            }
        }
    }
}

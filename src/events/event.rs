//! # Lifecycle events emitted by spawners and task runners.
//!
//! The [`EventKind`] enum classifies the stations of a task's life:
//! - **Spawn**: the task was created and its launch policy committed
//! - **Execution**: the job started running, then resolved or failed
//! - **Discard**: the job was dropped before anyone ran it
//!
//! The [`Event`] struct carries additional metadata such as timestamps, task
//! name, failure reasons, the requested launch policy, and elapsed run time.
//!
//! ## Ordering guarantees
//! Each event has a globally unique sequence number (`seq`) that increases
//! monotonically. Use `seq` to restore the exact order when events are
//! observed out of order across watcher threads.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskcell::{Event, EventKind};
//!
//! let ev = Event::new(EventKind::TaskFailed)
//!     .with_task("demo-task")
//!     .with_reason("boom")
//!     .with_elapsed(Duration::from_millis(3));
//!
//! assert_eq!(ev.kind, EventKind::TaskFailed);
//! assert_eq!(ev.task.as_deref(), Some("demo-task"));
//! assert_eq!(ev.reason.as_deref(), Some("boom"));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::time::{Duration, SystemTime};

use crate::policies::LaunchPolicy;

/// Global sequence counter for event ordering.
static EVENT_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Task was created; its job may or may not be running yet.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `policy`: the launch policy the caller requested
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskSpawned,

    /// The job began executing (on its worker thread, or on the demanding
    /// thread for deferred tasks).
    ///
    /// Sets:
    /// - `task`: task name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskStarted,

    /// The job finished and stored a value.
    ///
    /// Sets:
    /// - `task`: task name
    /// - `elapsed_ms`: run time in milliseconds
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskResolved,

    /// The job finished with a failure (returned error or panic).
    ///
    /// Sets:
    /// - `task`: task name
    /// - `reason`: failure message
    /// - `elapsed_ms`: run time in milliseconds
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskFailed,

    /// The job was dropped before it ever ran (deferred task never demanded,
    /// or a packaged job discarded un-run).
    ///
    /// Sets:
    /// - `task`: task name
    /// - `at`: wall-clock timestamp
    /// - `seq`: global sequence
    TaskDiscarded,
}

/// Lifecycle event with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`EventKind`]
#[derive(Clone)]
pub struct Event {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,

    /// Event classification.
    pub kind: EventKind,
    /// Name of the task, if applicable.
    pub task: Option<Arc<str>>,
    /// Human-readable reason (failure messages, discard details).
    pub reason: Option<Arc<str>>,
    /// Launch policy the caller requested (set on `TaskSpawned`).
    pub policy: Option<LaunchPolicy>,
    /// Job run time in milliseconds (compact).
    pub elapsed_ms: Option<u32>,
}

impl Event {
    /// Creates a new event of the given kind with current timestamp and next sequence number.
    pub fn new(kind: EventKind) -> Self {
        Self {
            seq: EVENT_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            kind,
            at: SystemTime::now(),
            task: None,
            reason: None,
            policy: None,
            elapsed_ms: None,
        }
    }

    /// Attaches a task name.
    #[inline]
    pub fn with_task(mut self, task: impl Into<Arc<str>>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Attaches the requested launch policy.
    #[inline]
    pub fn with_policy(mut self, policy: LaunchPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Attaches the job's run time (stored as milliseconds).
    #[inline]
    pub fn with_elapsed(mut self, d: Duration) -> Self {
        let ms = d.as_millis().min(u128::from(u32::MAX)) as u32;
        self.elapsed_ms = Some(ms);
        self
    }

    /// True for outcomes that end a task's life (resolved, failed, discarded).
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.kind,
            EventKind::TaskResolved | EventKind::TaskFailed | EventKind::TaskDiscarded
        )
    }
}

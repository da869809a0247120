//! # Write-once result cell shared between one producer and many readers.
//!
//! [`ResultCell`] is a single-slot synchronization point: one writer stores a
//! value **or** a failure exactly once, and any number of readers block until
//! that outcome is in place. Readers clone the stored outcome, so the cell can
//! be read repeatedly and concurrently.
//!
//! ## Resolution rules
//! - The slot starts empty and accepts exactly one resolution.
//! - [`ResultCell::resolve`] and [`ResultCell::resolve_failure`] compete for
//!   the same slot: the first call wins, every later call gets
//!   [`CellError::DoubleResolve`] and leaves the stored outcome untouched.
//! - Failures propagate: after `resolve_failure`, every reader (current and
//!   future) receives a clone of the same [`TaskError`].
//!
//! ## Blocking and wakeups
//! - Readers park on a condition variable; resolution wakes all of them.
//! - Spurious wakeups are absorbed by re-checking the slot in a loop.
//! - [`ResultCell::poll_for`] bounds the wait and reports
//!   [`WaitStatus::TimedOut`] instead of an error; a zero duration acts as an
//!   instant readiness probe.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::thread;
//! use taskcell::ResultCell;
//!
//! let cell = Arc::new(ResultCell::new());
//! let writer = Arc::clone(&cell);
//!
//! let producer = thread::spawn(move || {
//!     writer.resolve(6 + 7).expect("first resolution wins");
//! });
//!
//! // Blocks until the producer stores the sum, then clones it out.
//! assert_eq!(cell.read().unwrap(), 13);
//! producer.join().unwrap();
//! ```

use std::fmt;
use std::sync::{Condvar, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::cells::WaitStatus;
use crate::error::{CellError, TaskError};

/// Interior slot state: empty until the single resolution lands.
enum Slot<T> {
    /// No outcome yet; readers must wait.
    Empty,
    /// The computation produced a value.
    Value(T),
    /// The computation failed; the error fans out to every reader.
    Failure(TaskError),
}

impl<T> Slot<T> {
    #[inline]
    fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }
}

/// Single-slot, write-once cell with blocking and bounded reads.
///
/// The cell is the meeting point between a producer (a worker thread, a
/// deferred closure, a [`PackagedJob`](crate::PackagedJob)) and its readers.
/// Share it behind an [`Arc`](std::sync::Arc) to hand out read access.
///
/// ### Notes
/// - Reading requires `T: Clone`; the stored outcome stays in the slot so
///   later readers observe the same resolution.
/// - All operations tolerate lock poisoning: a reader whose `T::clone`
///   panics must not wedge the remaining readers, and the slot itself is
///   only ever replaced whole, never left half-written.
pub struct ResultCell<T> {
    slot: Mutex<Slot<T>>,
    ready: Condvar,
}

impl<T> ResultCell<T> {
    /// Creates an empty cell.
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(Slot::Empty),
            ready: Condvar::new(),
        }
    }

    /// Stores the success value and wakes all blocked readers.
    ///
    /// ### Errors
    /// Returns [`CellError::DoubleResolve`] if the cell already holds an
    /// outcome; the stored outcome is left untouched.
    pub fn resolve(&self, value: T) -> Result<(), CellError> {
        self.install(Slot::Value(value))
    }

    /// Stores a failure and wakes all blocked readers.
    ///
    /// Every current and future reader receives a clone of `err`.
    ///
    /// ### Errors
    /// Returns [`CellError::DoubleResolve`] if the cell already holds an
    /// outcome; the stored outcome is left untouched.
    pub fn resolve_failure(&self, err: TaskError) -> Result<(), CellError> {
        self.install(Slot::Failure(err))
    }

    /// Blocks until the cell is resolved, then clones the outcome out.
    ///
    /// Safe to call from any number of threads, any number of times: the
    /// slot keeps the outcome and every read observes the same resolution.
    pub fn read(&self) -> Result<T, TaskError>
    where
        T: Clone,
    {
        let mut slot = self.lock_slot();
        loop {
            match &*slot {
                Slot::Value(v) => return Ok(v.clone()),
                Slot::Failure(e) => return Err(e.clone()),
                Slot::Empty => {
                    slot = match self.ready.wait(slot) {
                        Ok(guard) => guard,
                        Err(poisoned) => poisoned.into_inner(),
                    };
                }
            }
        }
    }

    /// Blocks until the cell is resolved, without touching the outcome.
    ///
    /// Useful when the resolution itself is the signal and the value (or
    /// failure) will be read elsewhere, or not at all.
    pub fn wait(&self) {
        let mut slot = self.lock_slot();
        while slot.is_empty() {
            slot = match self.ready.wait(slot) {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
        }
    }

    /// Waits for the cell to resolve, up to `timeout`.
    ///
    /// Returns [`WaitStatus::Ready`] as soon as an outcome is stored, or
    /// [`WaitStatus::TimedOut`] once the timeout elapses. Timing out is a
    /// status, not an error: the outcome may still arrive later and a
    /// subsequent [`read`](Self::read) or `poll_for` will see it.
    ///
    /// A zero `timeout` performs an instant readiness probe. A `timeout` too
    /// large to express as a deadline (e.g. [`Duration::MAX`]) waits without
    /// bound, like [`wait`](Self::wait).
    pub fn poll_for(&self, timeout: Duration) -> WaitStatus {
        let deadline = Instant::now().checked_add(timeout);
        let mut slot = self.lock_slot();
        while slot.is_empty() {
            let Some(deadline) = deadline else {
                // No representable deadline: the bound can never be hit.
                slot = match self.ready.wait(slot) {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                continue;
            };
            let now = Instant::now();
            if now >= deadline {
                return WaitStatus::TimedOut;
            }
            let (guard, _) = match self.ready.wait_timeout(slot, deadline - now) {
                Ok(pair) => pair,
                Err(poisoned) => poisoned.into_inner(),
            };
            slot = guard;
        }
        WaitStatus::Ready
    }

    /// Non-blocking peek: clones the outcome if one is stored.
    pub fn try_read(&self) -> Option<Result<T, TaskError>>
    where
        T: Clone,
    {
        let slot = self.lock_slot();
        match &*slot {
            Slot::Empty => None,
            Slot::Value(v) => Some(Ok(v.clone())),
            Slot::Failure(e) => Some(Err(e.clone())),
        }
    }

    /// Returns `true` once an outcome (value or failure) is stored.
    pub fn is_resolved(&self) -> bool {
        !self.lock_slot().is_empty()
    }

    /// Installs an outcome if the slot is still empty, then wakes readers.
    fn install(&self, outcome: Slot<T>) -> Result<(), CellError> {
        let mut slot = self.lock_slot();
        if !slot.is_empty() {
            return Err(CellError::DoubleResolve);
        }
        *slot = outcome;
        drop(slot); // release the lock before waking
        self.ready.notify_all();
        Ok(())
    }

    fn lock_slot(&self) -> MutexGuard<'_, Slot<T>> {
        match self.slot.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T> Default for ResultCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ResultCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResultCell")
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn test_read_returns_resolved_value() {
        let cell = ResultCell::new();
        cell.resolve(13).unwrap();
        assert_eq!(cell.read().unwrap(), 13);
    }

    #[test]
    fn test_reads_are_idempotent() {
        let cell = ResultCell::new();
        cell.resolve(String::from("once")).unwrap();
        assert_eq!(cell.read().unwrap(), "once");
        assert_eq!(cell.read().unwrap(), "once");
        assert!(cell.is_resolved());
    }

    #[test]
    fn test_second_resolution_is_rejected() {
        let cell = ResultCell::new();
        cell.resolve(1).unwrap();
        assert!(matches!(cell.resolve(2), Err(CellError::DoubleResolve)));
        assert!(matches!(
            cell.resolve_failure(TaskError::Failed { message: "late".into() }),
            Err(CellError::DoubleResolve)
        ));
        // The first outcome is untouched.
        assert_eq!(cell.read().unwrap(), 1);
    }

    #[test]
    fn test_failure_reaches_every_reader() {
        let cell: Arc<ResultCell<u32>> = Arc::new(ResultCell::new());
        let mut readers = Vec::new();
        for _ in 0..4 {
            let cell = Arc::clone(&cell);
            readers.push(thread::spawn(move || cell.read()));
        }
        cell.resolve_failure(TaskError::Failed { message: "boom".into() })
            .unwrap();
        for reader in readers {
            let err = reader.join().unwrap().unwrap_err();
            assert_eq!(err.as_message(), "error: boom");
        }
        // Late readers observe the same failure.
        assert!(cell.read().is_err());
    }

    #[test]
    fn test_blocked_readers_wake_on_resolve() {
        let cell = Arc::new(ResultCell::new());
        let mut readers = Vec::new();
        for _ in 0..8 {
            let cell = Arc::clone(&cell);
            readers.push(thread::spawn(move || cell.read()));
        }
        // Give readers time to park before the single resolution.
        thread::sleep(Duration::from_millis(50));
        cell.resolve(42u64).unwrap();
        for reader in readers {
            assert_eq!(reader.join().unwrap().unwrap(), 42);
        }
    }

    #[test]
    fn test_poll_for_times_out_on_empty_cell() {
        let cell: ResultCell<u32> = ResultCell::new();
        let started = Instant::now();
        let status = cell.poll_for(Duration::from_millis(20));
        assert_eq!(status, WaitStatus::TimedOut);
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[test]
    fn test_poll_for_sees_late_resolution() {
        let cell = Arc::new(ResultCell::new());
        let writer = Arc::clone(&cell);
        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            writer.resolve(7).unwrap();
        });
        // Generous bound; the wakeup arrives long before it.
        assert_eq!(cell.poll_for(Duration::from_secs(5)), WaitStatus::Ready);
        assert_eq!(cell.read().unwrap(), 7);
        producer.join().unwrap();
    }

    #[test]
    fn test_max_timeout_on_resolved_cell_is_ready() {
        let cell = ResultCell::new();
        cell.resolve(13).unwrap();
        // A timeout with no representable deadline must not panic; the
        // outcome is already in place, so the wait returns at once.
        assert_eq!(cell.poll_for(Duration::MAX), WaitStatus::Ready);
        assert_eq!(cell.read().unwrap(), 13);
    }

    #[test]
    fn test_max_timeout_waits_for_late_resolution() {
        let cell = Arc::new(ResultCell::new());
        let writer = Arc::clone(&cell);
        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(30));
            writer.resolve(8).unwrap();
        });
        // Unbounded in practice: blocks like wait() until the producer lands.
        assert_eq!(cell.poll_for(Duration::MAX), WaitStatus::Ready);
        assert_eq!(cell.read().unwrap(), 8);
        producer.join().unwrap();
    }

    #[test]
    fn test_zero_timeout_is_an_instant_probe() {
        let cell: ResultCell<u32> = ResultCell::new();
        assert_eq!(cell.poll_for(Duration::ZERO), WaitStatus::TimedOut);
        cell.resolve(9).unwrap();
        assert_eq!(cell.poll_for(Duration::ZERO), WaitStatus::Ready);
    }

    #[test]
    fn test_try_read_peeks_without_blocking() {
        let cell = ResultCell::new();
        assert!(cell.try_read().is_none());
        cell.resolve(5).unwrap();
        assert_eq!(cell.try_read().unwrap().unwrap(), 5);
    }

    #[test]
    fn test_wait_blocks_until_resolution() {
        let cell = Arc::new(ResultCell::new());
        let writer = Arc::clone(&cell);
        let producer = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            writer.resolve(()).unwrap();
        });
        cell.wait();
        assert!(cell.is_resolved());
        producer.join().unwrap();
    }
}

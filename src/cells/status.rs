//! # Statuses reported by time-bounded waits.
//!
//! [`WaitStatus`] classifies what a bounded wait observed:
//! - [`WaitStatus::Ready`] the outcome is in place; a read returns without blocking.
//! - [`WaitStatus::TimedOut`] the wait elapsed first; the outcome may still arrive later.
//! - [`WaitStatus::Deferred`] the work is lazy and nobody has demanded it yet.
//!
//! `ResultCell::poll_for` reports only `Ready`/`TimedOut`: a bare cell knows
//! nothing about launch policies. `Task::wait_for` adds `Deferred` on top, so
//! pollers can tell "still running" apart from "never started".
//!
//! ## Polling loop
//! ```text
//! loop {
//!     match task.wait_for(tick) {
//!         WaitStatus::Ready    => break,           // result available
//!         WaitStatus::TimedOut => show_progress(), // keep waiting
//!         WaitStatus::Deferred => demand_or_bail(),// lazy work never starts on its own
//!     }
//! }
//! ```

/// Outcome of a time-bounded wait for a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    /// The outcome (value or failure) is stored; reads will not block.
    Ready,
    /// The wait elapsed before any outcome was stored.
    TimedOut,
    /// The underlying work is deferred and has not been demanded; the wait
    /// returned immediately instead of blocking on work that never starts.
    Deferred,
}

impl WaitStatus {
    /// Returns `true` if the outcome is available.
    #[inline]
    pub fn is_ready(&self) -> bool {
        matches!(self, WaitStatus::Ready)
    }

    /// Stable machine-readable label (for logs).
    pub fn as_label(&self) -> &'static str {
        match self {
            WaitStatus::Ready => "ready",
            WaitStatus::TimedOut => "timed_out",
            WaitStatus::Deferred => "deferred",
        }
    }
}

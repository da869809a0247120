//! # Event watcher trait.
//!
//! Provides [`Watch`], an extension point for plugging custom event handlers
//! into the task lifecycle.
//!
//! Each watcher gets:
//! - **Dedicated worker thread** (runs independently of publishers)
//! - **Per-watcher bounded queue** (capacity via [`Watch::queue_capacity`])
//! - **Panic isolation** (panics are caught and reported on stderr)
//!
//! ## Architecture
//! ```text
//! WatcherSet ──► [bounded queue] ──► worker thread ──► watcher.on_event()
//!                                 └─► panic caught → stderr warning
//! ```
//!
//! ## Rules
//! - A slow watcher only affects its own queue.
//! - Queue overflow drops the event **for this watcher only**; other
//!   watchers are unaffected.
//! - Events are processed sequentially (FIFO) per watcher.
//! - Watchers never block publishers or each other.
//!
//! ## Example
//! ```rust
//! use taskcell::{Watch, Event, EventKind};
//!
//! struct Metrics;
//!
//! impl Watch for Metrics {
//!     fn on_event(&self, ev: &Event) {
//!         if matches!(ev.kind, EventKind::TaskFailed) {
//!             // export a metric, etc.
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "metrics" }      // prefer short, descriptive names
//!     fn queue_capacity(&self) -> usize { 2048 }        // larger buffer for metrics
//! }
//! ```

use crate::events::Event;

/// Event watcher for lifecycle observability.
///
/// Each watcher runs in isolation:
/// - **Bounded queue** buffers events (capacity via [`Self::queue_capacity`]).
/// - **Dedicated worker thread** processes events sequentially (FIFO).
/// - **Panic isolation**: panics are caught and reported on stderr.
///
/// ### Implementation requirements
/// - Keep `on_event` quick; a slow watcher backs up only its own queue,
///   but backed-up queues drop events.
/// - Handle errors internally; do not panic.
pub trait Watch: Send + Sync + 'static {
    /// Processes a single event.
    ///
    /// Called from a dedicated worker thread, never in the publisher's
    /// context. Events are delivered in FIFO order per watcher.
    fn on_event(&self, event: &Event);

    /// Returns the watcher name used in overflow/panic warnings.
    ///
    /// Prefer short, descriptive names (e.g., "metrics", "audit", "slack").
    /// The default uses `type_name::<Self>()`, which can be verbose - override it when possible.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the preferred queue capacity for this watcher.
    ///
    /// Overflow behavior:
    /// 1) The new event is dropped for this watcher only,
    /// 2) a warning naming the watcher is printed to stderr,
    /// 3) other watchers are unaffected.
    ///
    /// Default: 0, meaning "use the configured default capacity"
    /// ([`Config::queue_capacity`](crate::Config)). Any non-zero value
    /// overrides the default; the set clamps capacity to a minimum of 1.
    fn queue_capacity(&self) -> usize {
        0
    }
}

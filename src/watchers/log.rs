//! # LogWriter — simple event printer
//!
//! A minimal watcher that prints incoming [`Event`]s to stdout.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! [spawned] task="sum" policy=immediate
//! [started] task="sum"
//! [resolved] task="sum" elapsed_ms=12
//! [failed] task="fetch" err="connection refused" elapsed_ms=3
//! [discarded] task="maybe"
//! ```

use crate::events::{Event, EventKind};
use crate::watchers::Watch;

/// Event writer watcher.
///
/// Enabled via the `logging` feature. Prints human-readable event
/// descriptions to stdout for debugging and demonstration purposes.
///
/// Not intended for production use - implement a custom [`Watch`] for
/// structured logging or metrics collection.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Watch for LogWriter {
    fn on_event(&self, e: &Event) {
        match e.kind {
            EventKind::TaskSpawned => {
                println!(
                    "[spawned] task={:?} policy={}",
                    e.task,
                    e.policy.map_or("unknown", |p| p.as_label()),
                );
            }
            EventKind::TaskStarted => {
                println!("[started] task={:?}", e.task);
            }
            EventKind::TaskResolved => {
                println!("[resolved] task={:?} elapsed_ms={:?}", e.task, e.elapsed_ms);
            }
            EventKind::TaskFailed => {
                println!(
                    "[failed] task={:?} err={:?} elapsed_ms={:?}",
                    e.task, e.reason, e.elapsed_ms
                );
            }
            EventKind::TaskDiscarded => {
                println!("[discarded] task={:?}", e.task);
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

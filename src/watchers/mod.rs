//! Event watchers.
//!
//! This module provides the [`Watch`] trait, an extension point for plugging
//! custom event handlers into the lifecycle, and the fan-out machinery that
//! feeds them.
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   Spawner / runner ── emit(Event) ──► WatcherSet
//!                                          │
//!                                          ├──► [queue W1] ─► worker W1 ─► on_event()
//!                                          ├──► [queue W2] ─► worker W2 ─► on_event()
//!                                          └──► [queue WN] ─► worker WN ─► on_event()
//! ```
//!
//! ## Watcher types
//! - **Passive watchers** observe and react to events (logging, metrics, alerts)
//! - **Stateful watchers** maintain internal state based on events (counters, dashboards)
//!
//! ## Implementing custom watchers
//! ```rust
//! use taskcell::{Watch, Event, EventKind};
//!
//! struct FailureCounter;
//!
//! impl Watch for FailureCounter {
//!     fn on_event(&self, event: &Event) {
//!         if matches!(event.kind, EventKind::TaskFailed) {
//!             // increment failure counter
//!         }
//!     }
//!
//!     fn name(&self) -> &'static str { "failure-counter" }
//! }
//! ```

mod set;
mod watch;

pub use set::WatcherSet;
pub use watch::Watch;

#[cfg(feature = "logging")]
mod log;

#[cfg(feature = "logging")]
pub use log::LogWriter;

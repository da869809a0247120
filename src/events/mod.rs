//! Lifecycle events.
//!
//! This module holds the event **data model** emitted as tasks move through
//! their lifecycle: spawned, started, resolved, failed, discarded.
//!
//! ## Contents
//! - [`EventKind`], [`Event`] event classification and payload metadata
//!
//! ## Quick reference
//! - **Publishers**: `Spawner` (on spawn) and `tasks::runner` (start,
//!   resolution, failure); `Shared`'s drop path (discard).
//! - **Consumers**: [`Watch`](crate::Watch) implementations, fanned out by
//!   `watchers::WatcherSet` on per-watcher worker threads.
//!
//! Tasks spawned without a [`Spawner`](crate::Spawner) carry no watcher set
//! and publish nothing.

mod event;

pub use event::{Event, EventKind};

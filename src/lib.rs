//! # taskcell
//!
//! **Taskcell** is a small thread-based deferred-task library for Rust.
//!
//! It provides a write-once, multi-read result cell and a task wrapper that
//! runs a computation exactly once under a configurable launch policy:
//! eagerly on a worker thread, lazily on the first demanding thread, or
//! whichever the library picks. The crate is designed as a building block
//! for code that hands a single result between a producer and any number
//! of consumers.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │   closure    │   │   closure    │   │   closure    │
//!     │ (user job #1)│   │ (user job #2)│   │ (user job #3)│
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  Task::spawn(policy, job)  /  Spawner::spawn(name, job)           │
//! │  - LaunchPolicy committed once (Immediate / Deferred / Auto)      │
//! │  - ResultCell created empty                                       │
//! └──────┬──────────────────────────────┬─────────────────────────────┘
//!        ▼ eager                        ▼ lazy
//! ┌──────────────────┐        ┌──────────────────────┐
//! │  worker thread   │        │  job parked          │
//! │  runs the job    │        │  first result()/wait │
//! │  immediately     │        │  runs it in place    │
//! └────────┬─────────┘        └──────────┬───────────┘
//!          │      exactly-once execution │
//!          ▼                             ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  ResultCell (mutex + condvar, write-once)                         │
//! │  - resolve(value) / resolve_failure(err), first call wins         │
//! │  - read()/wait() block; poll_for(d) is bounded                    │
//! │  - every reader clones the same outcome                           │
//! └─────────────────────────────────┬─────────────────────────────────┘
//!                                   ▼
//!                       ┌────────────────────────┐
//!                       │  readers: Task,        │
//!                       │  TaskHandle (cloned),  │
//!                       │  ResultHandle          │
//!                       └────────────────────────┘
//!
//! Observability (optional, via Spawner):
//!   runner ── emit(Event) ──► WatcherSet ──► per-watcher queue ─► worker
//!                                            ─► Watch::on_event()
//! ```
//!
//! ### Lifecycle
//! ```text
//! Task::spawn(policy, job)
//!   │
//!   ├─► publish TaskSpawned { task, policy }
//!   │
//!   ├─ Immediate ─► worker thread starts now
//!   ├─ Deferred ──► job parked until first demand
//!   └─ Auto ──────► committed to one of the above, once, at spawn
//!
//! run (worker thread, or the first demanding thread):
//!   ├─► publish TaskStarted { task }
//!   ├─► job()
//!   │     ├─ Ok(v)    ─► cell.resolve(v)          ─► publish TaskResolved
//!   │     ├─ Err(e)   ─► cell.resolve_failure(e)  ─► publish TaskFailed
//!   │     └─ panic    ─► captured as Panicked     ─► publish TaskFailed
//!   │
//!   └─► all blocked readers wake; late readers return immediately
//!
//! drop(task):
//!   ├─ worker running ─► join (implicit join; in-flight work finishes)
//!   └─ job still parked, last owner ─► discarded ─► publish TaskDiscarded
//! ```
//!
//! ## Features
//! | Area              | Description                                                             | Key types / traits                    |
//! |-------------------|-------------------------------------------------------------------------|---------------------------------------|
//! | **Cells**         | Write-once, multi-read handoff of one value or failure.                 | [`ResultCell`], [`WaitStatus`]        |
//! | **Tasks**         | One-shot computations with policy-driven starts.                        | [`Task`], [`TaskHandle`]              |
//! | **Packaged jobs** | Computations the caller runs manually, wherever it likes.               | [`PackagedJob`], [`ResultHandle`]     |
//! | **Policies**      | Control when a spawned computation runs.                                | [`LaunchPolicy`]                      |
//! | **Watcher API**   | Hook into task lifecycle events (logging, metrics, custom watchers).    | [`Watch`], [`Event`], [`EventKind`]   |
//! | **Spawning**      | Named tasks with watchers attached and configurable defaults.           | [`Spawner`], [`Config`]               |
//! | **Errors**        | Typed errors for cell misuse and captured computation failures.         | [`CellError`], [`TaskError`]          |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::time::Duration;
//! use taskcell::{LaunchPolicy, Task, TaskError, WaitStatus};
//!
//! // Eager: runs on a worker thread, concurrently with this one.
//! let sum = Task::immediate(|| Ok(6 + 7));
//! assert_eq!(sum.result()?, 13);
//!
//! // Lazy: nothing runs until the first demand.
//! let product = Task::deferred(|| Ok(4 * 6));
//! assert_eq!(product.wait_for(Duration::ZERO), WaitStatus::Deferred);
//! assert_eq!(product.result()?, 24);
//!
//! // Auto: the library commits to eager or lazy, once, at spawn.
//! let auto = Task::spawn(LaunchPolicy::Auto, || Ok::<_, TaskError>(21 * 2));
//! assert_eq!(auto.result()?, 42);
//! # Ok::<(), TaskError>(())
//! ```
mod cells;
mod core;
mod error;
mod events;
mod policies;
mod tasks;
mod watchers;

// ---- Public re-exports ----

pub use cells::{ResultCell, WaitStatus};
pub use core::{Config, Spawner, SpawnerBuilder};
pub use error::{CellError, TaskError};
pub use events::{Event, EventKind};
pub use policies::LaunchPolicy;
pub use tasks::{PackagedJob, ResultHandle, Task, TaskHandle};
pub use watchers::{Watch, WatcherSet};

// Optional: expose a simple built-in logger watcher (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use watchers::LogWriter;

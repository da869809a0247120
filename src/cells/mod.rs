//! Write-once result cells and wait statuses.
//!
//! This module groups the **single-slot synchronization cell** shared by a
//! producer and its readers, and the **status codes** reported by bounded
//! waits.
//!
//! ## Contents
//! - [`ResultCell`] write-once, multi-read slot with blocking and bounded reads
//! - [`WaitStatus`] outcome of `poll_for` / `wait_for`-style probes
//!
//! ## Quick reference
//! - **Writers**: `tasks::runner::run_job` resolves each cell exactly once;
//!   `PackagedJob` resolves through the same path.
//! - **Readers**: `Task::result`, `TaskHandle` and `ResultHandle` all clone
//!   the stored outcome, so every reader observes the same resolution.
//!
//! See `tasks/mod.rs` for how cells are wired into spawned work.

mod cell;
mod status;

pub use cell::ResultCell;
pub use status::WaitStatus;

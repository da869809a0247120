//! # Task abstractions.
//!
//! This module provides the core task-related types:
//! - [`Task`] - an owned one-shot computation with a policy-driven start
//! - [`TaskHandle`] - cloneable, demand-capable view of a task's outcome
//! - [`PackagedJob`] - a work unit run manually, wherever the caller decides
//! - [`ResultHandle`] - passive reader attached to a [`PackagedJob`]
//!
//! Internals: `shared` holds the cell, the parked job and task metadata;
//! `runner` executes jobs exactly once, captures panics and publishes
//! lifecycle events.

mod handle;
mod packaged;
mod task;

mod runner;
mod shared;

pub use handle::TaskHandle;
pub use packaged::{PackagedJob, ResultHandle};
pub use task::Task;

//! Launch policies.
//!
//! This module groups the knobs that control **when** a spawned computation
//! actually runs.
//!
//! ## Contents
//! - [`LaunchPolicy`] eager vs lazy execution (immediate / deferred / auto)
//!
//! ## Quick wiring
//! ```text
//! Task::spawn(policy, job)
//!      └─► tasks::Task uses commit():
//!           - Eager → hand the job to a worker thread right away
//!           - Lazy  → park the job until the first demand
//! ```
//!
//! ## Defaults
//! - `LaunchPolicy::Auto`: the library commits to eager or lazy once, at
//!   spawn time, and never changes its mind afterwards.

mod launch;

pub use launch::LaunchPolicy;

pub(crate) use launch::LaunchMode;

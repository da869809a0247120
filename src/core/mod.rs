//! Runtime core: spawning and configuration.
//!
//! This module contains the pieces that turn bare tasks into named,
//! observable ones:
//! - [`Config`]: spawn defaults (launch policy, watcher queue capacity);
//! - [`Spawner`]: owns the watcher fan-out and spawns named tasks;
//! - `builder`: fluent construction of a spawner with watchers attached.

mod builder;
mod config;
mod spawner;

pub use builder::SpawnerBuilder;
pub use config::Config;
pub use spawner::Spawner;

//! # Spawner configuration.
//!
//! Provides [`Config`] centralized defaults for tasks spawned through a
//! [`Spawner`](crate::Spawner).
//!
//! Config is used in two ways:
//! 1. **Spawner creation**: `Spawner::builder(config)`
//! 2. **Spawn defaults**: `Spawner::spawn(name, f)` uses `config.policy`
//!
//! ## Sentinel values
//! - `queue_capacity = 0` → clamped to 1 (a watcher queue must hold at least
//!   one event)

use crate::policies::LaunchPolicy;

/// Defaults applied by a [`Spawner`](crate::Spawner).
///
/// Defines:
/// - **Launch behavior**: the policy used when a spawn does not name one
/// - **Event delivery**: the default per-watcher queue capacity
///
/// ## Field semantics
/// - `policy`: default launch policy for `Spawner::spawn` (overridable per
///   spawn via `spawn_with`)
/// - `queue_capacity`: default watcher queue size, used for watchers whose
///   [`Watch::queue_capacity`](crate::Watch::queue_capacity) returns 0
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to
/// avoid sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct Config {
    /// Default launch policy for tasks spawned without an explicit one.
    ///
    /// `Spawner::spawn` uses this; `Spawner::spawn_with` overrides it
    /// per spawn.
    pub policy: LaunchPolicy,

    /// Default capacity for per-watcher event queues.
    ///
    /// Watchers overflowing their queue drop events (with a stderr
    /// warning). Minimum effective value is 1.
    pub queue_capacity: usize,
}

impl Config {
    /// Returns the default watcher queue capacity, clamped to a minimum of 1.
    #[inline]
    pub fn queue_capacity_clamped(&self) -> usize {
        self.queue_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `policy = LaunchPolicy::Auto` (library commits eager/lazy per task)
    /// - `queue_capacity = 1024` (good baseline)
    fn default() -> Self {
        Self {
            policy: LaunchPolicy::Auto,
            queue_capacity: 1024,
        }
    }
}

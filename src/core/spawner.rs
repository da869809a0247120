//! # Spawner: named tasks with watcher-backed observability.
//!
//! The [`Spawner`] owns a [`WatcherSet`] and a [`Config`]. Tasks spawned
//! through it carry a caller-chosen name and publish lifecycle events to
//! every attached watcher; tasks spawned through bare [`Task::spawn`]
//! publish nothing.
//!
//! ## High-level architecture
//! ```text
//! Spawner::builder(cfg)
//!     .with_watcher(LogWriter::new())
//!     .build()
//!       │
//!       ├─ spawn("sum", f)            → Task with cfg.policy
//!       └─ spawn_with("mul", pol, f)  → Task with explicit policy
//!
//! Event flow (as wired here):
//!   Task runner ── emit(Event) ──► WatcherSet
//!                                     ├──► [queue W1] ─► worker ─► on_event()
//!                                     └──► [queue WN] ─► worker ─► on_event()
//! ```
//!
//! Dropping the spawner releases its reference to the watcher set; live
//! tasks keep their own `Arc`, so events they emit after the spawner is
//! gone are still delivered. The queues disconnect, drain and join their
//! workers only when the last task releases the set.
//!
//! ## Example
//! ```rust
//! use taskcell::{Config, LaunchPolicy, Spawner};
//!
//! let spawner = Spawner::builder(Config::default()).build();
//!
//! let sum = spawner.spawn_with("sum", LaunchPolicy::Immediate, || Ok(6 + 7));
//! assert_eq!(sum.result().unwrap(), 13);
//! ```

use std::sync::Arc;

use crate::core::builder::SpawnerBuilder;
use crate::core::config::Config;
use crate::error::TaskError;
use crate::policies::LaunchPolicy;
use crate::tasks::Task;
use crate::watchers::WatcherSet;

/// Spawns named, observable tasks.
///
/// Owns the watcher fan-out and the spawn defaults. Build one with
/// [`Spawner::builder`]; a plain `Spawner::new(cfg)` attaches no watchers.
pub struct Spawner {
    cfg: Config,
    watchers: Arc<WatcherSet>,
}

impl Spawner {
    /// Creates a spawner with no watchers attached.
    pub fn new(cfg: Config) -> Self {
        let capacity = cfg.queue_capacity_clamped();
        Self {
            cfg,
            watchers: Arc::new(WatcherSet::new(Vec::new(), capacity)),
        }
    }

    /// Starts building a spawner with the given configuration.
    pub fn builder(cfg: Config) -> SpawnerBuilder {
        SpawnerBuilder::new(cfg)
    }

    pub(crate) fn new_internal(cfg: Config, watchers: Arc<WatcherSet>) -> Self {
        Self { cfg, watchers }
    }

    /// Spawns a named task under the configured default policy.
    ///
    /// Lifecycle events (`TaskSpawned`, `TaskStarted`, `TaskResolved` /
    /// `TaskFailed`, `TaskDiscarded`) are delivered to every attached
    /// watcher.
    ///
    /// ### Panics
    /// Panics if the OS refuses to create a worker thread (resource
    /// exhaustion); see [`Task::spawn`].
    pub fn spawn<T, F>(&self, name: impl Into<Arc<str>>, f: F) -> Task<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        self.spawn_with(name, self.cfg.policy, f)
    }

    /// Spawns a named task under an explicit launch policy.
    ///
    /// ### Panics
    /// Panics if the OS refuses to create a worker thread (resource
    /// exhaustion); see [`Task::spawn`].
    pub fn spawn_with<T, F>(
        &self,
        name: impl Into<Arc<str>>,
        policy: LaunchPolicy,
        f: F,
    ) -> Task<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T, TaskError> + Send + 'static,
    {
        let watchers = if self.watchers.is_empty() {
            None
        } else {
            Some(Arc::clone(&self.watchers))
        };
        Task::spawn_named(name.into(), policy, watchers, f)
    }

    /// The spawner's configuration.
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Number of attached watchers.
    pub fn watcher_count(&self) -> usize {
        self.watchers.len()
    }
}

use std::sync::Arc;

use crate::core::config::Config;
use crate::core::spawner::Spawner;
use crate::watchers::{Watch, WatcherSet};

/// Builder for constructing a [`Spawner`] with optional watchers.
pub struct SpawnerBuilder {
    cfg: Config,
    watchers: Vec<Arc<dyn Watch>>,
}

impl SpawnerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg,
            watchers: Vec::new(),
        }
    }

    /// Attaches a single watcher.
    ///
    /// Watchers receive lifecycle events (spawn, start, resolution, failure,
    /// discard) through dedicated workers with bounded queues.
    pub fn with_watcher(mut self, watcher: Arc<dyn Watch>) -> Self {
        self.watchers.push(watcher);
        self
    }

    /// Attaches a batch of watchers.
    pub fn with_watchers(mut self, watchers: Vec<Arc<dyn Watch>>) -> Self {
        self.watchers.extend(watchers);
        self
    }

    /// Builds the [`Spawner`].
    ///
    /// Consumes the builder and spawns one worker thread per watcher; the
    /// queue capacity for watchers that do not name one comes from
    /// [`Config::queue_capacity`].
    pub fn build(self) -> Spawner {
        let capacity = self.cfg.queue_capacity_clamped();
        let set = Arc::new(WatcherSet::new(self.watchers, capacity));
        Spawner::new_internal(self.cfg, set)
    }
}

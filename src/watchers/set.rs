//! # WatcherSet: non-blocking fan-out over multiple watchers
//!
//! [`WatcherSet`] distributes each [`Event`](crate::events::Event) to multiple
//! watchers **without blocking** on their processing.
//!
//! ## What it guarantees
//! - `emit(&Event)` returns immediately.
//! - Per-watcher FIFO (queue order).
//! - Panics inside watchers are caught and logged (isolation).
//! - Dropping the set closes all queues, drains what was buffered and joins
//!   the workers, so every delivered event is processed before drop returns.
//!
//! ## What it does **not** guarantee
//! - No global ordering across different watchers (use `Event::seq` to sort).
//! - No retries on per-watcher queue overflow (events are dropped for that
//!   watcher).
//!
//! ## Diagram
//! ```text
//!    emit(&Event)
//!        │                        (Arc-clone per watcher)
//!        ├────────────────► [queue W1] ─► worker W1 ─► on_event()
//!        ├────────────────► [queue W2] ─► worker W2 ─► on_event()
//!        └────────────────► [queue WN] ─► worker WN ─► on_event()
//! ```

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Sender, TrySendError, bounded};

use crate::events::Event;

use super::Watch;

/// Per-watcher channel with metadata
struct WatcherChannel {
    name: &'static str,
    sender: Sender<Arc<Event>>,
}

/// Composite fan-out with per-watcher bounded queues and worker threads.
pub struct WatcherSet {
    channels: Vec<WatcherChannel>,
    workers: Vec<JoinHandle<()>>,
}

impl WatcherSet {
    /// Creates a new set and spawns one worker thread per watcher.
    ///
    /// `default_capacity` is used for watchers whose
    /// [`queue_capacity`](Watch::queue_capacity) returns 0; capacities are
    /// clamped to a minimum of 1.
    #[must_use]
    pub fn new(watchers: Vec<Arc<dyn Watch>>, default_capacity: usize) -> Self {
        let mut channels = Vec::with_capacity(watchers.len());
        let mut workers = Vec::with_capacity(watchers.len());

        for watcher in watchers {
            let cap = match watcher.queue_capacity() {
                0 => default_capacity.max(1),
                n => n,
            };
            let name = watcher.name();
            let (tx, rx) = bounded::<Arc<Event>>(cap);
            let w = Arc::clone(&watcher);

            let handle = thread::spawn(move || {
                while let Ok(ev) = rx.recv() {
                    let run = panic::catch_unwind(AssertUnwindSafe(|| w.on_event(ev.as_ref())));
                    if let Err(panic_err) = run {
                        eprintln!("[taskcell] watcher '{}' panicked: {:?}", w.name(), panic_err);
                    }
                }
            });

            channels.push(WatcherChannel { name, sender: tx });
            workers.push(handle);
        }

        Self { channels, workers }
    }

    /// Fan-out one event to all watchers (non-blocking).
    ///
    /// If a watcher's queue is **full** or **closed**, the event is dropped
    /// for it and a warning is logged with the watcher's name.
    pub fn emit(&self, event: &Event) {
        let ev = Arc::new(event.clone());
        for channel in &self.channels {
            match channel.sender.try_send(Arc::clone(&ev)) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    eprintln!(
                        "[taskcell] watcher '{}' dropped event: queue full",
                        channel.name
                    );
                }
                Err(TrySendError::Disconnected(_)) => {
                    eprintln!(
                        "[taskcell] watcher '{}' dropped event: worker closed",
                        channel.name
                    );
                }
            }
        }
    }

    /// True if there are no watchers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Number of watchers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.channels.len()
    }
}

impl Drop for WatcherSet {
    fn drop(&mut self) {
        // Disconnect the senders; each worker drains its queue and exits.
        self.channels.clear();
        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crossbeam_channel::{Receiver, unbounded};

    use super::*;
    use crate::events::EventKind;

    #[derive(Default)]
    struct Recorder {
        kinds: Mutex<Vec<EventKind>>,
    }

    impl Recorder {
        fn seen(&self) -> Vec<EventKind> {
            self.kinds.lock().unwrap().clone()
        }
    }

    impl Watch for Recorder {
        fn on_event(&self, event: &Event) {
            self.kinds.lock().unwrap().push(event.kind);
        }

        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Bomb;

    impl Watch for Bomb {
        fn on_event(&self, _event: &Event) {
            panic!("boom");
        }

        fn name(&self) -> &'static str {
            "bomb"
        }
    }

    /// Blocks inside `on_event` until released; reports entry on a channel.
    struct Gated {
        entered: Sender<()>,
        release: Receiver<()>,
        seen: AtomicUsize,
    }

    impl Watch for Gated {
        fn on_event(&self, _event: &Event) {
            self.seen.fetch_add(1, Ordering::SeqCst);
            let _ = self.entered.send(());
            let _ = self.release.recv();
        }

        fn name(&self) -> &'static str {
            "gated"
        }

        fn queue_capacity(&self) -> usize {
            1
        }
    }

    #[test]
    fn test_fan_out_reaches_every_watcher() {
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let set = WatcherSet::new(vec![a.clone() as _, b.clone() as _], 16);

        set.emit(&Event::new(EventKind::TaskSpawned).with_task("t"));
        set.emit(&Event::new(EventKind::TaskResolved).with_task("t"));
        drop(set); // joins workers, flushing both queues

        assert_eq!(a.seen(), vec![EventKind::TaskSpawned, EventKind::TaskResolved]);
        assert_eq!(b.seen(), vec![EventKind::TaskSpawned, EventKind::TaskResolved]);
    }

    #[test]
    fn test_watcher_panic_does_not_stop_the_set() {
        let rec = Arc::new(Recorder::default());
        let set = WatcherSet::new(vec![Arc::new(Bomb) as _, rec.clone() as _], 16);

        set.emit(&Event::new(EventKind::TaskStarted).with_task("t"));
        set.emit(&Event::new(EventKind::TaskFailed).with_task("t"));
        drop(set);

        // The bomb panicked on both events; the recorder still got them.
        assert_eq!(rec.seen(), vec![EventKind::TaskStarted, EventKind::TaskFailed]);
    }

    #[test]
    fn test_overflow_drops_for_that_watcher_only() {
        let (entered_tx, entered_rx) = unbounded();
        let (release_tx, release_rx) = unbounded();
        let gated = Arc::new(Gated {
            entered: entered_tx,
            release: release_rx,
            seen: AtomicUsize::new(0),
        });
        let rec = Arc::new(Recorder::default());
        let set = WatcherSet::new(vec![gated.clone() as _, rec.clone() as _], 16);

        set.emit(&Event::new(EventKind::TaskSpawned));
        // Worker is now inside on_event; its queue (capacity 1) is empty.
        entered_rx.recv().unwrap();
        set.emit(&Event::new(EventKind::TaskStarted)); // buffered
        set.emit(&Event::new(EventKind::TaskResolved)); // full → dropped for gated

        release_tx.send(()).unwrap();
        release_tx.send(()).unwrap();
        drop(set);

        assert_eq!(gated.seen.load(Ordering::SeqCst), 2);
        // The co-registered watcher saw everything.
        assert_eq!(rec.seen().len(), 3);
    }

    #[test]
    fn test_empty_set_reports_empty() {
        let set = WatcherSet::new(vec![], 16);
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        // Emitting into an empty set is a no-op.
        set.emit(&Event::new(EventKind::TaskSpawned));
    }
}

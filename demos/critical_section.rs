//! # Demo: critical_section
//!
//! Companion illustration, not part of the library surface: the same
//! critical section guarded two ways.
//!
//! Demonstrates that:
//! - A critical section must be entered by at most one thread at a time;
//!   both guards below enforce that (the final counter is exact).
//! - An atomic-flag spin loop trades blocking for CPU: waiters burn cycles
//!   in `compare_exchange` retries, so it only pays off for very short
//!   sections under low contention.
//! - A mutex parks waiters instead; prefer it for anything longer.
//!
//! ## Flow
//! ```text
//! 4 threads × 100_000 increments, twice:
//!
//!   spin guard:  while !flag.compare_exchange(false, true) { spin }
//!                  counter += 1
//!                flag.store(false)
//!
//!   mutex guard: let mut n = counter.lock()
//!                  *n += 1          (waiters sleep, no busy loop)
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example critical_section
//! ```

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

const THREADS: usize = 4;
const INCREMENTS: usize = 100_000;

/// Spin-guarded counter: the flag is the lock.
///
/// The increment is a separate load and store; only the flag serializes
/// them. Without the guard, concurrent read-modify-write pairs would lose
/// increments.
fn spin_count() -> (usize, std::time::Duration) {
    let flag = Arc::new(AtomicBool::new(false));
    let counter = Arc::new(AtomicUsize::new(0));
    let started = Instant::now();

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        let flag = Arc::clone(&flag);
        let counter = Arc::clone(&counter);
        workers.push(thread::spawn(move || {
            for _ in 0..INCREMENTS {
                // Acquire: spin until we flip the flag false → true.
                while flag
                    .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
                    .is_err()
                {
                    std::hint::spin_loop();
                }
                // Critical section: a non-atomic-style read-modify-write.
                let current = counter.load(Ordering::Relaxed);
                counter.store(current + 1, Ordering::Relaxed);
                // Release.
                flag.store(false, Ordering::Release);
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    let total = counter.load(Ordering::Relaxed);
    (total, started.elapsed())
}

/// Mutex-guarded counter: waiters park instead of spinning.
fn mutex_count() -> (usize, std::time::Duration) {
    let counter = Arc::new(Mutex::new(0usize));
    let started = Instant::now();

    let mut workers = Vec::new();
    for _ in 0..THREADS {
        let counter = Arc::clone(&counter);
        workers.push(thread::spawn(move || {
            for _ in 0..INCREMENTS {
                *counter.lock().unwrap() += 1;
            }
        }));
    }
    for worker in workers {
        worker.join().unwrap();
    }

    let total = *counter.lock().unwrap();
    (total, started.elapsed())
}

fn main() {
    let expected = THREADS * INCREMENTS;

    let (total, elapsed) = spin_count();
    assert_eq!(total, expected);
    println!("[spin ] {total} increments in {elapsed:?} (waiters burn CPU)");

    let (total, elapsed) = mutex_count();
    assert_eq!(total, expected);
    println!("[mutex] {total} increments in {elapsed:?} (waiters sleep)");

    println!("[main] both guards are exact; they differ in what waiting costs");
}

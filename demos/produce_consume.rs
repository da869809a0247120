//! # Demo: produce_consume
//!
//! A raw [`ResultCell`] handed between a producer and several consumers,
//! without any task machinery on top.
//!
//! Demonstrates how to:
//! - Share a cell behind an [`Arc`].
//! - Resolve it exactly once from a producer thread.
//! - Block any number of consumers on [`ResultCell::read`] and have them
//!   all observe the same value.
//!
//! ## Flow
//! ```text
//! Arc<ResultCell> ──┬──► consumer 1 ─ read() blocks ─┐
//!                   ├──► consumer 2 ─ read() blocks ─┤
//!                   ├──► consumer 3 ─ read() blocks ─┼─► all wake with 42
//!                   └──► producer  ─ resolve(42) ────┘
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example produce_consume
//! ```

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use taskcell::ResultCell;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cell: Arc<ResultCell<u64>> = Arc::new(ResultCell::new());

    // Consumers park first; the producer wakes all of them at once.
    let mut consumers = Vec::new();
    for id in 0..3 {
        let cell = Arc::clone(&cell);
        consumers.push(thread::spawn(move || {
            println!("[consumer {id}] waiting...");
            let value = cell.read().expect("producer resolves with a value");
            println!("[consumer {id}] got {value}");
            value
        }));
    }

    let producer = {
        let cell = Arc::clone(&cell);
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(200));
            println!("[producer] resolving");
            cell.resolve(42).expect("first resolution wins");
        })
    };

    for consumer in consumers {
        assert_eq!(consumer.join().unwrap(), 42);
    }
    producer.join().unwrap();

    // The cell keeps the outcome; late reads return immediately.
    println!("[main] late read: {}", cell.read()?);

    // A second resolution is a contract violation and is rejected.
    let second = cell.resolve(7);
    println!("[main] second resolve: {}", second.unwrap_err());

    Ok(())
}

//! Basic Smoothing Example
//!
//! Demonstrates the simplest use of the engine: configure the default
//! Chebyshev order-1 low-pass and stream noisy readings through it.
//!
//! ## What You'll Learn
//!
//! - Creating and configuring a `FilterEngine`
//! - Feeding samples through `run`
//! - Inspecting the recurrence window
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_smoothing
//! ```

use sigfilter::FilterEngine;

fn main() {
    println!("SigFilter Basic Smoothing Example");
    println!("=================================\n");

    let mut engine = FilterEngine::new();
    engine.configure(); // Chebyshev, order 1

    // A simulated sensor warming up toward 100, with jitter
    let readings = [0, 100, 100, 100, 100, 103, 97, 101, 99, 100, 100, 100];

    println!("{:>6} | {:>8}", "raw", "filtered");
    println!("-------+---------");
    for raw in readings {
        let filtered = engine.run(raw).expect("engine is configured");
        println!("{raw:>6} | {filtered:>8}");
    }

    println!("\nFinal window (oldest, middle, newest): {:?}", engine.window());
}

//! Strategy Comparison Example
//!
//! Feeds the same noisy step signal through every strategy family and prints
//! the outputs side by side, showing how each trades lag against noise
//! rejection.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_strategy_comparison
//! ```

use sigfilter::{FilterEngine, FilterMode, FilterOrder};

/// Low plateau with an impulse spike, then a step up.
fn signal() -> Vec<i32> {
    let mut s = vec![100; 10];
    s[4] = 900; // single-sample glitch
    s.extend(vec![800; 15]);
    s
}

fn filtered(mode: FilterMode, order: FilterOrder, samples: &[i32]) -> Vec<i32> {
    let mut engine = FilterEngine::new();
    engine.set_filter(mode);
    engine.set_order(order);
    samples
        .iter()
        .map(|&s| engine.run(s).expect("engine is configured"))
        .collect()
}

fn main() {
    println!("SigFilter Strategy Comparison");
    println!("=============================\n");

    let samples = signal();
    let columns = [
        ("cheby1", FilterMode::Chebyshev, FilterOrder::First),
        ("cheby2", FilterMode::Chebyshev, FilterOrder::Second),
        ("bessel1", FilterMode::Bessel, FilterOrder::First),
        ("median", FilterMode::MedianSorted, FilterOrder::First),
        ("track-f", FilterMode::TrackingFast, FilterOrder::First),
        ("track-s", FilterMode::TrackingSmooth, FilterOrder::First),
    ];

    let outputs: Vec<Vec<i32>> = columns
        .iter()
        .map(|&(_, mode, order)| filtered(mode, order, &samples))
        .collect();

    print!("{:>5}", "raw");
    for (name, _, _) in &columns {
        print!(" {name:>8}");
    }
    println!();

    for (i, raw) in samples.iter().enumerate() {
        print!("{raw:>5}");
        for out in &outputs {
            print!(" {:>8}", out[i]);
        }
        println!();
    }

    println!("\nNote how the median drops the glitch outright while the");
    println!("low-pass filters smear it, and how the trackers close the");
    println!("step at very different rates.");
}

//! Stateful fixed-point signal filters for sensor-reading pipelines
//!
//! Consumes a stream of scalar integer samples and produces a filtered
//! stream, selecting among fixed-point IIR low-pass approximations
//! (Chebyshev, Bessel), order-3 median filters, and adaptive
//! growing-shrinking trackers at configuration time.
//!
//! Key constraints:
//! - No floating point anywhere; filters use integer multiply, arithmetic
//!   shift and rounding adds with calibrated constants
//! - No heap allocation; total state is a 3-sample window plus two scalars
//! - Deterministic, bit-reproducible output across targets
//!
//! ```rust
//! use sigfilter::{FilterEngine, FilterMode};
//!
//! let mut engine = FilterEngine::new();
//! engine.configure(); // Chebyshev, order 1
//!
//! // Feed raw ADC readings, consume smoothed ones
//! for raw in [0, 100, 100, 100, 100] {
//!     let filtered = engine.run(raw).unwrap();
//!     let _ = filtered;
//! }
//!
//! // Or reject impulse spikes instead
//! engine.set_filter(FilterMode::MedianSorted);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod engine;
pub mod errors;
pub mod filters;
pub mod window;

// Public API
pub use engine::{FilterEngine, FilterMode, FilterOrder};
pub use errors::{ConfigError, FilterResult};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}

//! Error Types for Filter Configuration Failures
//!
//! ## Design Philosophy
//!
//! The error system is designed with embedded targets in mind:
//!
//! 1. **Small Size**: Every variant is a few bytes at most, since errors may be
//!    returned from the per-sample hot path and stored in queues.
//!
//! 2. **No Heap Allocation**: All error data is inline - no String, only plain
//!    integers. Memory usage stays deterministic.
//!
//! 3. **Copy Semantics**: Errors implement Copy for efficient return from
//!    functions without move semantics complications.
//!
//! ## Error Handling Strategy
//!
//! Everything that can go wrong is caught at configuration time: the engine
//! validates mode and order when they are set, so `run` has exactly one failure
//! mode - being called before any filter was selected. The original design this
//! crate replaces returned a silent `0` from an unreachable dispatch branch
//! instead; that behavior is deliberately not preserved.
//!
//! ```rust
//! use sigfilter::{FilterEngine, ConfigError};
//!
//! let mut engine = FilterEngine::new();
//! match engine.run(42) {
//!     Ok(_) => unreachable!("engine was never configured"),
//!     Err(ConfigError::NotConfigured) => {
//!         // Select a filter and retry
//!     }
//!     Err(_) => {}
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine configuration and per-sample operations
pub type FilterResult<T> = Result<T, ConfigError>;

/// Configuration errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Requested filter order is outside the supported {1, 2} domain
    #[error("Filter order {order} unsupported (valid orders: 1, 2)")]
    UnsupportedOrder {
        /// The order value that was rejected
        order: i32,
    },

    /// `run` was called before any filter mode was selected
    #[error("No filter selected; call configure() or set_filter() first")]
    NotConfigured,
}

#[cfg(feature = "defmt")]
impl defmt::Format for ConfigError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnsupportedOrder { order } =>
                defmt::write!(fmt, "Order {} unsupported (valid: 1, 2)", order),
            Self::NotConfigured =>
                defmt::write!(fmt, "No filter selected"),
        }
    }
}

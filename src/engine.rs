//! Filter Engine: Strategy Selection and Per-Sample Dispatch
//!
//! ## Overview
//!
//! [`FilterEngine`] is the single stateful component of this crate. It owns a
//! three-slot [`SampleWindow`], the tracker accumulator, and the smooth
//! tracker's step counter, plus the selected strategy. Each call to
//! [`FilterEngine::run`] consumes one raw sample, advances whatever state the
//! active strategy uses, and returns one filtered sample.
//!
//! ## State Machine
//!
//! The states are the (mode, order) combinations; `run` is the only
//! transition function and never changes mode or order itself. Strategy
//! changes happen exclusively through the configuration calls, and the
//! machine has no terminal state.
//!
//! Dispatch is total by construction: [`FilterOrder`] has exactly the two
//! supported variants and every mode either uses the order or ignores it, so
//! no (mode, order) pair is undefined. The one runtime failure is calling
//! `run` before any mode was selected, which returns
//! [`ConfigError::NotConfigured`] instead of a fabricated zero sample.
//!
//! ## Usage
//!
//! ```rust
//! use sigfilter::{FilterEngine, FilterMode, FilterOrder};
//!
//! let mut engine = FilterEngine::new();
//! engine.set_filter(FilterMode::Chebyshev);
//! engine.set_order(FilterOrder::Second);
//!
//! for raw in [512, 515, 980, 517, 514] {
//!     let smoothed = engine.run(raw).unwrap();
//!     let _ = smoothed;
//! }
//! ```
//!
//! ## Concurrency
//!
//! Pure synchronous computation with exclusively owned state: no locking is
//! needed as long as callers serialize access to an instance, typically one
//! engine per logical channel.

use crate::{
    errors::{ConfigError, FilterResult},
    filters::{lowpass, median, tracking},
    window::SampleWindow,
};

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Available filtering strategies
///
/// The three median modes are behaviorally identical (see
/// [`crate::filters::median`]); they are kept selectable because their code
/// size differs on constrained targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterMode {
    /// Fixed-point Chebyshev low-pass (-3 dB ripple at order 1, -1 dB at 2)
    Chebyshev,
    /// Fixed-point Bessel low-pass (alpha 0.1)
    Bessel,
    /// Median of three via comparison tree
    MedianFast,
    /// Median of three via between-ness tests
    MedianReadable,
    /// Median of three via min/mid/max selection
    MedianSorted,
    /// Growing-shrinking tracker with coarse-to-fine step cascade
    TrackingFast,
    /// Growing-shrinking tracker with trend-accelerated steps
    TrackingSmooth,
}

/// Filter order for the IIR low-pass modes
///
/// Only orders 1 and 2 exist; median and tracker modes ignore the order
/// entirely. Raw integers enter through [`TryFrom`], which rejects anything
/// else with [`ConfigError::UnsupportedOrder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterOrder {
    /// First-order recurrence, window slots 0..=1
    #[default]
    First,
    /// Second-order recurrence, all three window slots
    Second,
}

impl TryFrom<i32> for FilterOrder {
    type Error = ConfigError;

    fn try_from(order: i32) -> FilterResult<Self> {
        match order {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            _ => Err(ConfigError::UnsupportedOrder { order }),
        }
    }
}

impl TryFrom<u8> for FilterOrder {
    type Error = ConfigError;

    fn try_from(order: u8) -> FilterResult<Self> {
        Self::try_from(i32::from(order))
    }
}

/// Stateful single-channel filtering engine
///
/// Construction zeroes all state; configuration selects a strategy; `run`
/// drives it for the life of the process. Reconfiguration at any time is
/// allowed and never touches the sample state, so a mode switch picks up
/// from the current window and estimate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterEngine {
    window: SampleWindow,
    /// Tracker accumulator; persists across calls and reconfigurations
    estimate: i32,
    /// Smooth tracker acceleration counter, bounded to [0, 10]
    step_counter: u8,
    mode: Option<FilterMode>,
    order: FilterOrder,
}

impl FilterEngine {
    /// Creates an engine with zeroed state and no strategy selected
    ///
    /// Calling [`run`](Self::run) before [`configure`](Self::configure) or
    /// [`set_filter`](Self::set_filter) fails with
    /// [`ConfigError::NotConfigured`].
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            estimate: 0,
            step_counter: 0,
            mode: None,
            order: FilterOrder::First,
        }
    }

    /// Applies the documented defaults: Chebyshev, order 1
    pub fn configure(&mut self) {
        self.set_filter(FilterMode::Chebyshev);
        self.set_order(FilterOrder::First);
    }

    /// Selects the active strategy
    ///
    /// Idempotent and side-effect free with respect to the sample state:
    /// window, estimate and step counter are left untouched.
    pub fn set_filter(&mut self, mode: FilterMode) {
        log_debug!("filter mode set to {:?}", mode);
        self.mode = Some(mode);
    }

    /// Selects the filter order for the IIR low-pass modes
    ///
    /// Median and tracker modes ignore the order. Validation of raw integer
    /// orders happens in `FilterOrder::try_from`, so every value reaching
    /// this call is one the dispatch supports.
    pub fn set_order(&mut self, order: FilterOrder) {
        log_debug!("filter order set to {:?}", order);
        self.order = order;
    }

    /// Currently selected strategy, if any
    pub fn mode(&self) -> Option<FilterMode> {
        self.mode
    }

    /// Currently selected filter order
    pub fn order(&self) -> FilterOrder {
        self.order
    }

    /// Window contents as `[oldest, middle, newest]`
    ///
    /// Inspection accessor for callers that want to log or assert on the
    /// recurrence state; the engine itself never prints anything.
    pub fn window(&self) -> [i32; 3] {
        self.window.slots()
    }

    /// Current tracker estimate
    pub fn estimate(&self) -> i32 {
        self.estimate
    }

    /// Current smooth tracker step counter
    pub fn step_counter(&self) -> u8 {
        self.step_counter
    }

    /// Feeds one raw sample through the active strategy
    ///
    /// Deterministic given prior state. Mutates only the state the active
    /// strategy uses: the window for low-pass and median modes, the estimate
    /// (and counter) for tracker modes.
    pub fn run(&mut self, sample: i32) -> FilterResult<i32> {
        let mode = self.mode.ok_or(ConfigError::NotConfigured)?;
        Ok(match mode {
            FilterMode::Chebyshev => match self.order {
                FilterOrder::First => {
                    lowpass::first_order(&lowpass::CHEBYSHEV_ORDER1, &mut self.window, sample)
                }
                FilterOrder::Second => {
                    lowpass::second_order(&lowpass::CHEBYSHEV_ORDER2, &mut self.window, sample)
                }
            },
            FilterMode::Bessel => match self.order {
                FilterOrder::First => {
                    lowpass::first_order(&lowpass::BESSEL_ORDER1, &mut self.window, sample)
                }
                FilterOrder::Second => {
                    lowpass::second_order(&lowpass::BESSEL_ORDER2, &mut self.window, sample)
                }
            },
            FilterMode::MedianFast => self.run_median(sample, median::decision_tree),
            FilterMode::MedianReadable => self.run_median(sample, median::range_compare),
            FilterMode::MedianSorted => self.run_median(sample, median::min_mid_max),
            FilterMode::TrackingFast => tracking::track_fast(&mut self.estimate, sample),
            FilterMode::TrackingSmooth => {
                tracking::track_smooth(&mut self.estimate, &mut self.step_counter, sample)
            }
        })
    }

    fn run_median(&mut self, sample: i32, median: fn(i32, i32, i32) -> i32) -> i32 {
        self.window.push(sample);
        let [a, b, c] = self.window.slots();
        median(a, b, c)
    }
}

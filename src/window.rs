//! Three-Slot Sliding Window for Recurrence Inputs
//!
//! ## Overview
//!
//! Every window-based strategy in this crate (the IIR low-pass approximations
//! and the median filters) operates on the same tiny sliding window of three
//! signed samples. Unlike a general ring buffer there is no wrap-around
//! bookkeeping: slots are physically shifted left on every advance, so slot 0
//! is always the oldest value and slot 2 the newest. At three elements the
//! shift is two register moves and beats index arithmetic on small MCUs.
//!
//! ## Slot Semantics
//!
//! What the slots hold depends on the strategy driving the window:
//!
//! - **Median filters** store the three most recent *raw* samples and never
//!   read anything else.
//! - **First-order IIR** uses only slots 0 and 1, holding the previous and
//!   current recurrence values (truncated to 16 bits by the filter).
//! - **Second-order IIR** uses all three slots for its three-term recurrence.
//!
//! The window itself is policy-free; truncation and output combination live
//! in [`crate::filters::lowpass`].
//!
//! ## Memory Layout
//!
//! ```text
//! SampleWindow = [i32; 3] = 12 bytes, no padding
//! ┌──────────┬──────────┬──────────┐
//! │ slots[0] │ slots[1] │ slots[2] │
//! │  oldest  │  middle  │  newest  │
//! └──────────┴──────────┴──────────┘
//! ```
//!
//! ## Thread Safety
//!
//! Not thread-safe. One window belongs to one engine; callers serialize
//! access per engine instance.

/// Number of samples retained by the sliding window
pub const WINDOW_LEN: usize = 3;

/// Fixed three-slot sliding window of signed samples
///
/// Shifting discards the oldest slot; nothing is ever reset implicitly.
/// A freshly constructed window is all zeroes, matching the engine's
/// zero-initialized lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleWindow {
    pub(crate) slots: [i32; WINDOW_LEN],
}

impl SampleWindow {
    /// Creates a zeroed window
    ///
    /// Const so engines can live in static storage:
    /// ```rust
    /// use sigfilter::window::SampleWindow;
    /// static WINDOW: SampleWindow = SampleWindow::new();
    /// ```
    pub const fn new() -> Self {
        Self { slots: [0; WINDOW_LEN] }
    }

    /// Shifts the window left and appends `sample` as the newest slot
    ///
    /// Used by strategies that consume all three slots (median, second-order
    /// IIR pre-shift). The oldest value is discarded.
    #[inline]
    pub fn push(&mut self, sample: i32) {
        self.slots[0] = self.slots[1];
        self.slots[1] = self.slots[2];
        self.slots[2] = sample;
    }

    /// Returns the slots as `[oldest, middle, newest]`
    ///
    /// This is the inspection accessor replacing the debug serial dump of the
    /// original design; callers own any logging built on top of it.
    #[inline]
    pub fn slots(&self) -> [i32; WINDOW_LEN] {
        self.slots
    }

    /// Most recent value in the window
    #[inline]
    pub fn newest(&self) -> i32 {
        self.slots[WINDOW_LEN - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let w = SampleWindow::new();
        assert_eq!(w.slots(), [0, 0, 0]);
    }

    #[test]
    fn push_shifts_left() {
        let mut w = SampleWindow::new();
        w.push(5);
        assert_eq!(w.slots(), [0, 0, 5]);
        w.push(1);
        assert_eq!(w.slots(), [0, 5, 1]);
        w.push(9);
        assert_eq!(w.slots(), [5, 1, 9]);
        w.push(-3);
        assert_eq!(w.slots(), [1, 9, -3]);
        assert_eq!(w.newest(), -3);
    }
}

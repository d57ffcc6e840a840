//! Fixed-Point IIR Low-Pass Approximations (Chebyshev and Bessel)
//!
//! ## Overview
//!
//! These filters approximate analog low-pass transfer functions using integer
//! multiply, arithmetic shift and a rounding add - no floating point anywhere,
//! which keeps them usable on MCUs without an FPU and keeps every output
//! bit-reproducible across targets.
//!
//! Each real-valued coefficient is encoded as a *fixed-point filter constant*:
//! an integer multiplier paired with a right-shift, such that
//! `(x * mul) >> shift` approximates `x * coefficient`. The constants below
//! encode specific analog designs (Chebyshev with -3 dB / -1 dB passband
//! ripple, Bessel with alpha 0.1) and are calibrated as a set: multiplier,
//! per-term shift, rounding add and final shift belong together. Treat them
//! as opaque design constants; do not re-derive or "simplify" them.
//!
//! ## Arithmetic Width
//!
//! For 16-bit samples the products reach roughly 38 bits (22-bit constants
//! times 16-bit values), so all intermediates are computed in `i64`. A 32-bit
//! accumulator would silently wrap for large inputs.
//!
//! ## Recurrence State
//!
//! The recurrence values live in the engine's [`SampleWindow`]: a first-order
//! stage uses slots 0..=1, a second-order stage uses all three. Stored values
//! are truncated to 16 bits after each step, as is the combined output, which
//! bounds the state regardless of how long the filter runs.

use crate::window::SampleWindow;

/// A fixed-point filter constant: integer multiplier plus right-shift
///
/// `apply(x)` computes `(x * mul) >> shift` in 64-bit arithmetic. Negative
/// multipliers rely on arithmetic (sign-preserving) shift, which Rust
/// guarantees for signed integers.
#[derive(Debug, Clone, Copy)]
pub struct FixedCoeff {
    /// Integer encoding of the real coefficient
    pub mul: i64,
    /// Right-shift applied to the product
    pub shift: u32,
}

impl FixedCoeff {
    #[inline]
    fn apply(self, x: i32) -> i64 {
        (i64::from(x) * self.mul) >> self.shift
    }
}

/// Coefficient set for a first-order low-pass stage
#[derive(Debug, Clone, Copy)]
pub struct FirstOrderStage {
    /// Input (feed-forward) coefficient
    pub input: FixedCoeff,
    /// Feedback coefficient applied to the previous recurrence value
    pub feedback: FixedCoeff,
    /// Rounding add applied before the final shift
    pub round: i64,
    /// Final downshift out of fixed-point
    pub post_shift: u32,
}

/// Coefficient set for a second-order low-pass stage
#[derive(Debug, Clone, Copy)]
pub struct SecondOrderStage {
    /// Input (feed-forward) coefficient
    pub input: FixedCoeff,
    /// Feedback coefficient for the oldest recurrence value
    pub feedback1: FixedCoeff,
    /// Feedback coefficient for the middle recurrence value
    pub feedback2: FixedCoeff,
    /// Rounding add applied before the final shift
    pub round: i64,
    /// Final downshift out of fixed-point
    pub post_shift: u32,
}

/// Chebyshev low-pass, order 1, passband ripple -3 dB
pub const CHEBYSHEV_ORDER1: FirstOrderStage = FirstOrderStage {
    input: FixedCoeff { mul: 3_269_048, shift: 2 },    // ~0.3897009118
    feedback: FixedCoeff { mul: 3_701_023, shift: 3 }, // ~0.2205981765
    round: 1_048_576,
    post_shift: 21, // /2097152
};

/// Chebyshev low-pass, order 2, passband ripple -1 dB
pub const CHEBYSHEV_ORDER2: SecondOrderStage = SecondOrderStage {
    input: FixedCoeff { mul: 662_828, shift: 4 },       // ~0.07901529699
    feedback1: FixedCoeff { mul: -540_791, shift: 1 },  // ~-0.5157387562
    feedback2: FixedCoeff { mul: 628_977, shift: 0 },   // ~1.1996775682
    round: 262_144,
    post_shift: 19, // /524288
};

/// Bessel low-pass, order 1, alpha 0.1
pub const BESSEL_ORDER1: FirstOrderStage = FirstOrderStage {
    input: FixedCoeff { mul: 2_057_199, shift: 3 },    // ~0.2452372753
    feedback: FixedCoeff { mul: 1_068_552, shift: 1 }, // ~0.5095254495
    round: 524_288,
    post_shift: 20, // /1048576
};

/// Bessel low-pass, order 2, alpha 0.1
pub const BESSEL_ORDER2: SecondOrderStage = SecondOrderStage {
    input: FixedCoeff { mul: 759_505, shift: 4 },        // ~0.09053999670
    feedback1: FixedCoeff { mul: -1_011_418, shift: 3 }, // ~-0.2411407388
    feedback2: FixedCoeff { mul: 921_678, shift: 1 },    // ~0.8789807520
    round: 262_144,
    post_shift: 19, // /524288
};

/// Advances a first-order recurrence and returns the filtered sample
///
/// Only window slots 0 and 1 participate: slot 1 shifts into slot 0, the new
/// recurrence value (truncated to 16 bits) lands in slot 1, and the output is
/// the 16-bit-truncated sum of both.
pub fn first_order(stage: &FirstOrderStage, window: &mut SampleWindow, sample: i32) -> i32 {
    window.slots[0] = window.slots[1];
    let acc = stage.input.apply(sample) + stage.feedback.apply(window.slots[0]) + stage.round;
    window.slots[1] = i32::from((acc >> stage.post_shift) as i16);
    (window.slots[0] + window.slots[1]) as i16 as i32
}

/// Advances a second-order recurrence and returns the filtered sample
///
/// All three window slots participate. Output combination is
/// `v[0] + v[2] + 2*v[1]` over the post-update window, truncated to 16 bits.
pub fn second_order(stage: &SecondOrderStage, window: &mut SampleWindow, sample: i32) -> i32 {
    window.slots[0] = window.slots[1];
    window.slots[1] = window.slots[2];
    let acc = stage.input.apply(sample)
        + stage.feedback1.apply(window.slots[0])
        + stage.feedback2.apply(window.slots[1])
        + stage.round;
    window.slots[2] = i32::from((acc >> stage.post_shift) as i16);
    ((window.slots[0] + window.slots[2]) + 2 * window.slots[1]) as i16 as i32
}

//! Adaptive Growing-Shrinking Trackers
//!
//! Unlike the fixed-coefficient low-pass filters, these strategies carry no
//! transfer function: a single accumulator (`estimate`) chases the input with
//! a step size derived from the current deviation. Large deviations close
//! fast, small ones settle one unit at a time, so a step input converges in a
//! handful of calls while steady-state noise is flattened to ±1.
//!
//! Both trackers share the same accumulator in the engine; switching between
//! them mid-stream keeps the current estimate, since the accumulator is never
//! reset implicitly.

/// Maximum value of the smooth tracker's acceleration counter
///
/// Once the counter passes this bound it resets to zero at the end of the
/// call, capping the catch-up step at `8 * (STEP_COUNTER_MAX + 1)`.
pub const STEP_COUNTER_MAX: u8 = 10;

/// Deadband for the smooth tracker, in sample units
const DEADBAND: i32 = 8;

/// Fast tracker: coarse-to-fine step cascade
///
/// Thresholds 512, 128, 32 and 8 are tested in descending order, each against
/// the estimate *as updated so far*, so a single call can take several stacked
/// jumps; a final ±1 always applies. Equality is the fixed point: once the
/// estimate reaches the input it does not move.
pub fn track_fast(estimate: &mut i32, data: i32) -> i32 {
    if data > *estimate {
        if data > *estimate + 512 {
            *estimate += 512;
        }
        if data > *estimate + 128 {
            *estimate += 128;
        }
        if data > *estimate + 32 {
            *estimate += 32;
        }
        if data > *estimate + 8 {
            *estimate += 8;
        }
        *estimate += 1;
    } else if data < *estimate {
        if data < *estimate - 512 {
            *estimate -= 512;
        }
        if data < *estimate - 128 {
            *estimate -= 128;
        }
        if data < *estimate - 32 {
            *estimate -= 32;
        }
        if data < *estimate - 8 {
            *estimate -= 8;
        }
        *estimate -= 1;
    }
    *estimate
}

/// Smooth tracker: trend-accelerated steps
///
/// While the input stays more than 8 units on one side of the estimate,
/// `counter` grows and scales the catch-up step (`8 * counter`), so
/// a sustained trend accelerates the chase; a final ±1 always applies. The
/// counter resets once it exceeds [`STEP_COUNTER_MAX`], bounding step growth.
pub fn track_smooth(estimate: &mut i32, counter: &mut u8, data: i32) -> i32 {
    if data > *estimate {
        if data > *estimate + DEADBAND {
            *counter += 1;
            *estimate += DEADBAND * i32::from(*counter);
        }
        *estimate += 1;
    } else if data < *estimate {
        if data < *estimate - DEADBAND {
            *counter += 1;
            *estimate -= DEADBAND * i32::from(*counter);
        }
        *estimate -= 1;
    }
    if *counter > STEP_COUNTER_MAX {
        *counter = 0;
    }
    *estimate
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn fast_tracker_converges_and_holds() {
        let mut estimate = 0;
        for _ in 0..60 {
            track_fast(&mut estimate, 1000);
        }
        assert_eq!(estimate, 1000);
        // Steady state is a fixed point
        assert_eq!(track_fast(&mut estimate, 1000), 1000);
        assert_eq!(estimate, 1000);
    }

    #[test]
    fn fast_tracker_converges_downward() {
        let mut estimate = 0;
        for _ in 0..60 {
            track_fast(&mut estimate, -700);
        }
        assert_eq!(estimate, -700);
    }

    #[test]
    fn fast_tracker_stacks_cascade_steps() {
        // First call from 0 toward 1000: 512 + 128 + 32 + 8 + 1
        let mut estimate = 0;
        assert_eq!(track_fast(&mut estimate, 1000), 681);
    }

    #[test]
    fn smooth_tracker_counter_stays_bounded() {
        let mut estimate = 0;
        let mut counter = 0u8;
        for _ in 0..200 {
            // Keep the input far ahead so the deadband branch fires every call
            let target = estimate + 100_000;
            track_smooth(&mut estimate, &mut counter, target);
            assert!(counter <= STEP_COUNTER_MAX);
        }
    }

    #[test]
    fn smooth_tracker_counter_resets_after_bound() {
        let mut estimate = 0;
        let mut counter = STEP_COUNTER_MAX;
        // Next qualifying update pushes the counter past the bound; it must
        // come back as zero
        track_smooth(&mut estimate, &mut counter, 1_000);
        assert_eq!(counter, 0);
        assert_eq!(estimate, 89); // 8 * 11 + 1
    }

    #[test]
    fn smooth_tracker_settles_inside_deadband() {
        let mut estimate = 0;
        let mut counter = 0u8;
        for _ in 0..30 {
            track_smooth(&mut estimate, &mut counter, 5);
        }
        assert_eq!(estimate, 5);
    }

    proptest! {
        #[test]
        fn fast_tracker_reaches_any_target(target in -20_000i32..20_000) {
            let mut estimate = 0;
            for _ in 0..25_000 {
                if track_fast(&mut estimate, target) == target {
                    break;
                }
            }
            prop_assert_eq!(estimate, target);
        }
    }
}

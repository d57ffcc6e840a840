//! Median-of-Three for Impulse Noise Rejection
//!
//! Replaces each sample with the median of the last three, which drops
//! single-sample spikes (electrical glitches, contact bounce) without the lag
//! of a low-pass filter.
//!
//! Three implementations are provided. They are behaviorally identical for
//! every input permutation, ties included; the plurality exists because their
//! code size and comparison counts differ on small MCUs, and which wins
//! depends on the target. `benches/median.rs` compares them. When in doubt
//! use [`median_of_three`], the canonical min/mid/max form.

/// Canonical median of three values (min/mid/max selection)
///
/// Alias for [`min_mid_max`]; the binding contract for all variants.
#[inline]
pub fn median_of_three(a: i32, b: i32, c: i32) -> i32 {
    min_mid_max(a, b, c)
}

/// Median via nested comparison tree
///
/// Fewest comparisons on the common monotone paths; branchy.
pub fn decision_tree(a: i32, b: i32, c: i32) -> i32 {
    if c < b {
        if c < a {
            if b < a {
                b
            } else {
                a
            }
        } else {
            c
        }
    } else if c < a {
        c
    } else if b < a {
        a
    } else {
        b
    }
}

/// Median via between-ness tests
///
/// Reads as the definition: return whichever value lies between the other
/// two. Ties are resolved by the non-strict comparisons; the final arm is
/// total, so three equal values return that value rather than falling
/// through.
pub fn range_compare(a: i32, b: i32, c: i32) -> i32 {
    if (c <= b && c >= a) || (c <= a && c >= b) {
        c
    } else if (b <= c && b >= a) || (b <= a && b >= c) {
        b
    } else {
        a
    }
}

/// Median via explicit minimum elimination
///
/// Finds which value is the minimum, then takes the smaller of the two
/// remaining.
pub fn min_mid_max(a: i32, b: i32, c: i32) -> i32 {
    if a <= b && a <= c {
        if b <= c {
            b
        } else {
            c
        }
    } else if b <= a && b <= c {
        if a <= c {
            a
        } else {
            c
        }
    } else if a <= b {
        a
    } else {
        b
    }
}

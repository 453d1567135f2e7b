//! Geometric distributions built from Bernoulli trials.
//!
//! A trial is one draw of [`below_u32`] with bound `mean`; the trial succeeds
//! when the draw is zero. Counting trials up to and including the first
//! success gives a geometric distribution on the positive integers with
//! success probability `1 / mean`, hence expectation `mean`.
//!
//! Counts saturate at `i32::MAX`: the trial loop stops there instead of
//! wrapping.

use super::bounded::below_u32;
use crate::source::BitSource;

/// Draws a positive integer with geometric distribution of the given mean.
///
/// `mean` must be at least 2 (a mean of 1 would be the constant 1 and is
/// rejected by the generator layer before reaching here).
pub fn positive_geometric<B: BitSource + ?Sized>(source: &mut B, mean: u32) -> i32 {
    debug_assert!(mean >= 2, "geometric mean must be at least 2");
    let mut count: i32 = 0;
    loop {
        count += 1;
        if below_u32(source, mean) == 0 || count == i32::MAX {
            return count;
        }
    }
}

/// Draws a non-negative integer with geometric distribution of the given
/// mean, as `positive_geometric(mean + 1) - 1`.
pub fn natural_geometric<B: BitSource + ?Sized>(source: &mut B, mean: u32) -> i32 {
    debug_assert!(mean >= 1 && mean < u32::MAX);
    positive_geometric(source, mean + 1) - 1
}

/// Draws a non-negative integer with geometric distribution of mean
/// `numerator / denominator`.
///
/// Each trial draws from `[0, numerator + denominator)`; a draw below
/// `denominator` ends the run and every earlier draw counts one. The caller
/// guarantees both parameters are positive and their sum fits in `u32`.
pub fn natural_geometric_ratio<B: BitSource + ?Sized>(
    source: &mut B,
    numerator: u32,
    denominator: u32,
) -> i32 {
    debug_assert!(numerator > 0 && denominator > 0);
    let total = numerator + denominator;
    let mut count: i32 = 0;
    while below_u32(source, total) >= denominator && count < i32::MAX {
        count += 1;
    }
    count
}

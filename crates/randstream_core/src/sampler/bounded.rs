//! Uniform sampling over `[0, n)` for bounds up to 64 bits.
//!
//! Power-of-two bounds are served by masking a single draw. Any other bound
//! masks to `ceil(log2(n))` bits and rejects values `>= n`, so every value in
//! `[0, n)` is exactly equally likely and the expected number of trials is
//! `2^ceil(log2(n)) / n`, always below 2.

use crate::source::BitSource;

/// Returns `ceil(log2(n))` for `n >= 1`.
///
/// # Examples
///
/// ```rust
/// use randstream_core::sampler::ceiling_log2;
///
/// assert_eq!(ceiling_log2(1), 0);
/// assert_eq!(ceiling_log2(8), 3);
/// assert_eq!(ceiling_log2(9), 4);
/// ```
#[inline]
pub fn ceiling_log2(n: u64) -> u32 {
    debug_assert!(n >= 1, "ceiling_log2 is undefined for 0");
    u64::BITS - (n - 1).leading_zeros()
}

/// Expected number of masked trials needed by [`below_u64`] for bound `n`.
///
/// The exact value `2^k / n` with `k = ceil(log2 n)` is always below 2, but
/// for `n` just above a large power of two the `f64` quotient rounds up to
/// exactly `2.0`.
pub fn expected_trials(n: u64) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    (ceiling_log2(n) as f64).exp2() / n as f64
}

/// Draws a uniform value in `[0, 2^bits)` from one word.
///
/// `bits == 0` yields `0` without consuming entropy.
#[inline]
pub fn below_pow2_u32<B: BitSource + ?Sized>(source: &mut B, bits: u32) -> u32 {
    debug_assert!(bits <= 32);
    match bits {
        0 => 0,
        32 => source.next_u32(),
        _ => source.next_u32() & ((1u32 << bits) - 1),
    }
}

/// Draws a uniform value in `[0, n)`.
///
/// `n == 1` yields `0` without consuming entropy.
///
/// # Panics
///
/// Panics in debug builds if `n == 0`.
pub fn below_u32<B: BitSource + ?Sized>(source: &mut B, n: u32) -> u32 {
    debug_assert!(n > 0, "bound must be positive");
    if n <= 1 {
        return 0;
    }
    let bits = ceiling_log2(u64::from(n));
    if n.is_power_of_two() {
        return below_pow2_u32(source, bits);
    }
    loop {
        let candidate = below_pow2_u32(source, bits);
        if candidate < n {
            return candidate;
        }
    }
}

/// Draws a uniform value in `[0, 2^bits)`.
///
/// Up to 32 bits consume one word, wider masks consume two.
#[inline]
pub fn below_pow2_u64<B: BitSource + ?Sized>(source: &mut B, bits: u32) -> u64 {
    debug_assert!(bits <= 64);
    match bits {
        0..=32 => u64::from(below_pow2_u32(source, bits)),
        64 => source.next_u64(),
        _ => source.next_u64() & ((1u64 << bits) - 1),
    }
}

/// Draws a uniform value in `[0, n)`.
///
/// Bounds that fit in 32 bits delegate to [`below_u32`], so they consume
/// exactly the same entropy as the narrow sampler.
pub fn below_u64<B: BitSource + ?Sized>(source: &mut B, n: u64) -> u64 {
    debug_assert!(n > 0, "bound must be positive");
    if let Ok(narrow) = u32::try_from(n) {
        return u64::from(below_u32(source, narrow));
    }
    let bits = ceiling_log2(n);
    if n.is_power_of_two() {
        return below_pow2_u64(source, bits);
    }
    loop {
        let candidate = below_pow2_u64(source, bits);
        if candidate < n {
            return candidate;
        }
    }
}

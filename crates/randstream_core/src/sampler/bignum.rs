//! Uniform sampling of arbitrary-precision integers.
//!
//! Random values are assembled from bytes: a `k`-bit draw takes `k / 8 + 1`
//! bytes, four per word, with the most significant byte masked down to the
//! `k % 8` remaining bits. Bounded draws use the same mask-and-reject scheme
//! as the fixed-width sampler.

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::source::BitSource;

/// Draws a uniform value in `[0, 2^bits)`.
///
/// `bits == 0` yields zero without consuming entropy.
pub fn below_pow2_big<B: BitSource + ?Sized>(source: &mut B, bits: u64) -> BigUint {
    if bits == 0 {
        return BigUint::zero();
    }
    let byte_count = (bits / 8 + 1) as usize;
    let words = Integer::div_ceil(&byte_count, &4);
    let mut bytes = Vec::with_capacity(words * 4);
    for _ in 0..words {
        bytes.extend_from_slice(&source.next_u32().to_le_bytes());
    }
    bytes.truncate(byte_count);
    if let Some(top) = bytes.last_mut() {
        *top &= (1u8 << (bits % 8)) - 1;
    }
    BigUint::from_bytes_le(&bytes)
}

/// Draws a uniform value in `[0, n)`.
///
/// `n == 1` yields zero without consuming entropy.
///
/// # Panics
///
/// Panics in debug builds if `n` is zero.
pub fn below_big<B: BitSource + ?Sized>(source: &mut B, n: &BigUint) -> BigUint {
    debug_assert!(!n.is_zero(), "bound must be positive");
    if n.is_one() || n.is_zero() {
        return BigUint::zero();
    }
    let bits = n.bits();
    if is_power_of_two(n) {
        return below_pow2_big(source, bits - 1);
    }
    loop {
        let candidate = below_pow2_big(source, bits);
        if &candidate < n {
            return candidate;
        }
    }
}

/// Returns `true` if `n` is a positive power of two.
pub fn is_power_of_two(n: &BigUint) -> bool {
    !n.is_zero() && (n & &(n - 1u32)).is_zero()
}

//! IEEE-754 bit patterns as an ordered, enumerable domain.
//!
//! Two integer views of a float are used:
//!
//! - The **ordered representation** numbers every non-NaN bit pattern so that
//!   numeric order (with `-0.0` just below `+0.0`) becomes integer order.
//!   Uniform sampling over an ordered interval is uniform over bit patterns.
//! - The **grid representation** is the exact value scaled by `2^150` (`f32`)
//!   or `2^1075` (`f64`): an integer multiple of half the smallest subnormal.
//!   Sampling uniformly on this grid and rounding to nearest approximates a
//!   uniform real number rounded to the nearest representable float.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};
use std::fmt::{Debug, Display};
use std::ops::Neg;

use crate::source::BitSource;

mod private {
    pub trait Sealed {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Floating-point widths supported by the float samplers.
///
/// Implemented for `f32` and `f64` only.
pub trait IeeeFloat:
    Copy + PartialOrd + Neg<Output = Self> + Debug + Display + private::Sealed + 'static
{
    /// Largest finite value.
    const MAX: Self;
    /// Positive infinity.
    const INFINITY: Self;
    /// Negative infinity.
    const NEG_INFINITY: Self;
    /// Positive zero.
    const ZERO: Self;
    /// Negative zero.
    const NEG_ZERO: Self;
    /// Smallest positive subnormal value.
    const MIN_POSITIVE_SUBNORMAL: Self;
    /// Bit pattern of the canonical NaN.
    const CANONICAL_NAN_BITS: u64;

    /// Returns `true` for any NaN.
    fn is_nan(self) -> bool;

    /// Returns `true` unless the value is NaN or infinite.
    fn is_finite(self) -> bool;

    /// Returns `true` if the sign bit is set.
    fn is_sign_negative(self) -> bool;

    /// Returns the raw bit pattern widened to 64 bits.
    fn bits(self) -> u64;

    /// Returns `true` if both values have the same bit pattern.
    #[inline]
    fn is_identical(self, other: Self) -> bool {
        self.bits() == other.bits()
    }

    /// Ordered representation, or `None` for NaN.
    fn to_ordered(self) -> Option<i64>;

    /// Inverse of [`to_ordered`](IeeeFloat::to_ordered).
    fn from_ordered(index: i64) -> Self;

    /// Draws a bit pattern uniformly, retrying on every NaN encoding except
    /// the canonical one.
    fn bit_pattern<B: BitSource + ?Sized>(source: &mut B) -> Self;

    /// Exact grid representation of a finite value.
    fn to_grid(self) -> BigInt;

    /// Rounds a grid value to the nearest float, ties to even.
    fn from_grid_nearest(grid: &BigInt) -> Self;
}

impl IeeeFloat for f32 {
    const MAX: Self = f32::MAX;
    const INFINITY: Self = f32::INFINITY;
    const NEG_INFINITY: Self = f32::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const NEG_ZERO: Self = -0.0;
    const MIN_POSITIVE_SUBNORMAL: Self = 1.0e-45;
    const CANONICAL_NAN_BITS: u64 = 0x7fc0_0000;

    #[inline]
    fn is_nan(self) -> bool {
        f32::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f32::is_sign_negative(self)
    }

    #[inline]
    fn bits(self) -> u64 {
        u64::from(self.to_bits())
    }

    fn to_ordered(self) -> Option<i64> {
        if self.is_nan() {
            return None;
        }
        let bits = self.to_bits();
        Some(if bits & 0x8000_0000 == 0 {
            i64::from(bits)
        } else {
            -i64::from(bits & 0x7fff_ffff) - 1
        })
    }

    fn from_ordered(index: i64) -> Self {
        if index >= 0 {
            f32::from_bits(index as u32)
        } else {
            f32::from_bits((-(index + 1)) as u32 | 0x8000_0000)
        }
    }

    fn bit_pattern<B: BitSource + ?Sized>(source: &mut B) -> Self {
        loop {
            let bits = source.next_u32();
            let value = f32::from_bits(bits);
            if !value.is_nan() || u64::from(bits) == Self::CANONICAL_NAN_BITS {
                return value;
            }
        }
    }

    fn to_grid(self) -> BigInt {
        debug_assert!(self.is_finite());
        let bits = self.to_bits();
        let exponent = (bits >> 23) & 0xff;
        let mantissa = bits & 0x7f_ffff;
        let magnitude = if exponent == 0 {
            BigUint::from(mantissa) << 1u32
        } else {
            BigUint::from(mantissa | 0x80_0000) << exponent
        };
        signed(self.is_sign_negative(), magnitude)
    }

    fn from_grid_nearest(grid: &BigInt) -> Self {
        // Exact in f64: at most 24 significant bits and an exponent in range.
        round_grid(grid, 24, 150) as f32
    }
}

impl IeeeFloat for f64 {
    const MAX: Self = f64::MAX;
    const INFINITY: Self = f64::INFINITY;
    const NEG_INFINITY: Self = f64::NEG_INFINITY;
    const ZERO: Self = 0.0;
    const NEG_ZERO: Self = -0.0;
    const MIN_POSITIVE_SUBNORMAL: Self = 5.0e-324;
    const CANONICAL_NAN_BITS: u64 = 0x7ff8_0000_0000_0000;

    #[inline]
    fn is_nan(self) -> bool {
        f64::is_nan(self)
    }

    #[inline]
    fn is_finite(self) -> bool {
        f64::is_finite(self)
    }

    #[inline]
    fn is_sign_negative(self) -> bool {
        f64::is_sign_negative(self)
    }

    #[inline]
    fn bits(self) -> u64 {
        self.to_bits()
    }

    fn to_ordered(self) -> Option<i64> {
        if self.is_nan() {
            return None;
        }
        let bits = self.to_bits();
        Some(if bits >> 63 == 0 {
            bits as i64
        } else {
            -((bits & 0x7fff_ffff_ffff_ffff) as i64) - 1
        })
    }

    fn from_ordered(index: i64) -> Self {
        if index >= 0 {
            f64::from_bits(index as u64)
        } else {
            f64::from_bits((-(index + 1)) as u64 | (1 << 63))
        }
    }

    fn bit_pattern<B: BitSource + ?Sized>(source: &mut B) -> Self {
        loop {
            let bits = source.next_u64();
            let value = f64::from_bits(bits);
            if !value.is_nan() || bits == Self::CANONICAL_NAN_BITS {
                return value;
            }
        }
    }

    fn to_grid(self) -> BigInt {
        debug_assert!(self.is_finite());
        let bits = self.to_bits();
        let exponent = (bits >> 52) & 0x7ff;
        let mantissa = bits & 0x000f_ffff_ffff_ffff;
        let magnitude = if exponent == 0 {
            BigUint::from(mantissa) << 1u32
        } else {
            BigUint::from(mantissa | (1 << 52)) << exponent
        };
        signed(self.is_sign_negative(), magnitude)
    }

    fn from_grid_nearest(grid: &BigInt) -> Self {
        round_grid(grid, 53, 1075)
    }
}

fn signed(negative: bool, magnitude: BigUint) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

/// Rounds `grid * 2^-grid_shift` to `precision` significant bits, ties to
/// even, with the subnormal spacing of two grid units as the finest step.
fn round_grid(grid: &BigInt, precision: u64, grid_shift: i32) -> f64 {
    let magnitude = grid.magnitude();
    if magnitude.is_zero() {
        return 0.0;
    }
    let shift = magnitude.bits().saturating_sub(precision).max(1);
    let mut quotient: BigUint = magnitude >> shift;
    let remainder = magnitude - (&quotient << shift);
    let half = BigUint::one() << (shift - 1);
    if remainder > half || (remainder == half && quotient.bit(0)) {
        quotient += 1u32;
    }
    let significand = quotient.iter_u64_digits().next().unwrap_or(0);
    let value = significand as f64 * pow2(shift as i32 - grid_shift);
    if grid.sign() == Sign::Minus {
        -value
    } else {
        value
    }
}

/// Exact power of two for exponents in `[-1074, 1023]`.
fn pow2(exponent: i32) -> f64 {
    debug_assert!((-1074..=1023).contains(&exponent));
    if exponent >= -1022 {
        f64::from_bits(((exponent + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (exponent + 1074))
    }
}

/// Draws a uniform ordered index in `[low, high]`.
pub fn ordered_in_range<B: BitSource + ?Sized>(source: &mut B, low: i64, high: i64) -> i64 {
    debug_assert!(low <= high);
    let span = (high as i128 - low as i128 + 1) as u64;
    (low as i128 + super::bounded::below_u64(source, span) as i128) as i64
}

//! Uniform fixed-width integers, characters and raw streams.
//!
//! Every range reduces to `a + below(span)` with the span computed in `i128`.
//! Spans up to `u64::MAX` go through the fixed-width sampler; the only wider
//! span (the whole `i64` domain) goes through the bignum sampler.

use num_bigint::BigUint;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::RandomGenerator;
use crate::error::{GeneratorError, Result};
use crate::sampler::{below_big, below_u64};
use crate::source::BitSource;

mod private {
    pub trait Sealed {}
    impl Sealed for i8 {}
    impl Sealed for i16 {}
    impl Sealed for i32 {}
    impl Sealed for i64 {}
}

/// Signed fixed-width integer types with uniform range support.
pub trait FixedInt: Copy + Ord + Debug + Display + Hash + private::Sealed + 'static {
    /// Smallest value.
    const MIN: Self;
    /// Largest value.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;

    /// Widens to `i128`.
    fn to_i128(self) -> i128;

    /// Narrows from `i128`; the value must be in range.
    fn from_i128(value: i128) -> Self;
}

macro_rules! impl_fixed_int {
    ($($t:ty),*) => {
        $(
            impl FixedInt for $t {
                const MIN: Self = <$t>::MIN;
                const MAX: Self = <$t>::MAX;
                const ZERO: Self = 0;

                #[inline]
                fn to_i128(self) -> i128 {
                    i128::from(self)
                }

                #[inline]
                fn from_i128(value: i128) -> Self {
                    debug_assert!(value >= i128::from(<$t>::MIN) && value <= i128::from(<$t>::MAX));
                    value as $t
                }
            }
        )*
    };
}

impl_fixed_int!(i8, i16, i32, i64);

/// Number of Unicode scalar values below the surrogate block.
const SURROGATE_START: u32 = 0xd800;
/// Width of the surrogate block skipped by character ranges.
const SURROGATE_COUNT: u32 = 0x800;

/// Draws a uniform offset in `[0, span)`.
fn offset_below<B: BitSource + ?Sized>(source: &mut B, span: u128) -> u128 {
    match u64::try_from(span) {
        Ok(narrow) => u128::from(below_u64(source, narrow)),
        Err(_) => below_big(source, &BigUint::from(span))
            .iter_u64_digits()
            .rev()
            .fold(0u128, |acc, digit| (acc << 64) | u128::from(digit)),
    }
}

fn char_index(c: char) -> u32 {
    let code = u32::from(c);
    if code >= SURROGATE_START {
        code - SURROGATE_COUNT
    } else {
        code
    }
}

fn char_from_index(index: u32) -> char {
    let code = if index >= SURROGATE_START {
        index + SURROGATE_COUNT
    } else {
        index
    };
    // Indices produced by char ranges always map to scalar values.
    char::from_u32(code).unwrap_or(char::REPLACEMENT_CHARACTER)
}

impl RandomGenerator {
    /// Raw 32-bit words as `i32`, one draw each.
    pub fn integers(&self) -> impl Iterator<Item = i32> {
        self.sequence(|s| s.next_u32() as i32)
    }

    /// Raw 64-bit values, two draws each.
    pub fn longs(&self) -> impl Iterator<Item = i64> {
        self.sequence(|s| s.next_u64() as i64)
    }

    /// Fair coin flips.
    pub fn booleans(&self) -> impl Iterator<Item = bool> {
        self.sequence(|s| s.next_bool())
    }

    /// Uniform values in `[a, b]`.
    ///
    /// `a == b` yields the constant `a` without consuming entropy.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a > b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]);
    /// assert!(generator.range(-3i8, 3).unwrap().take(100).all(|x| (-3..=3).contains(&x)));
    /// assert!(generator.range(5, 4).is_err());
    /// ```
    pub fn range<T: FixedInt>(&self, a: T, b: T) -> Result<impl Iterator<Item = T>> {
        if a > b {
            return Err(GeneratorError::InvalidArgument(format!(
                "range requires a <= b, got a = {a}, b = {b}"
            )));
        }
        Ok(self.range_unchecked(a, b))
    }

    pub(crate) fn range_unchecked<T: FixedInt>(&self, a: T, b: T) -> impl Iterator<Item = T> {
        let low = a.to_i128();
        let span = (b.to_i128() - low + 1) as u128;
        self.sequence(move |s| {
            if span == 1 {
                a
            } else {
                T::from_i128(low + offset_below(s, span) as i128)
            }
        })
    }

    /// Uniform values in `[a, T::MAX]`.
    pub fn range_up<T: FixedInt>(&self, a: T) -> impl Iterator<Item = T> {
        self.range_unchecked(a, T::MAX)
    }

    /// Uniform values in `[T::MIN, a]`.
    pub fn range_down<T: FixedInt>(&self, a: T) -> impl Iterator<Item = T> {
        self.range_unchecked(T::MIN, a)
    }

    /// Uniform values over the whole type.
    pub fn all<T: FixedInt>(&self) -> impl Iterator<Item = T> {
        self.range_unchecked(T::MIN, T::MAX)
    }

    /// Uniform values in `[0, T::MAX]`.
    pub fn naturals<T: FixedInt>(&self) -> impl Iterator<Item = T> {
        self.range_up(T::ZERO)
    }

    /// Uniform values in `[1, T::MAX]`.
    pub fn positives<T: FixedInt>(&self) -> impl Iterator<Item = T> {
        self.range_up(T::from_i128(1))
    }

    /// Uniform values in `[T::MIN, -1]`.
    pub fn negatives<T: FixedInt>(&self) -> impl Iterator<Item = T> {
        self.range_down(T::from_i128(-1))
    }

    /// Uniform non-zero values.
    pub fn nonzeros<T: FixedInt>(&self) -> impl Iterator<Item = T> {
        self.all::<T>().filter(|&x| x != T::ZERO)
    }

    /// Uniform characters in `[a, b]`, skipping the surrogate block.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a > b`.
    pub fn char_range(&self, a: char, b: char) -> Result<impl Iterator<Item = char>> {
        if a > b {
            return Err(GeneratorError::InvalidArgument(format!(
                "char_range requires a <= b, got a = {a:?}, b = {b:?}"
            )));
        }
        Ok(self.char_range_unchecked(a, b))
    }

    fn char_range_unchecked(&self, a: char, b: char) -> impl Iterator<Item = char> {
        let low = char_index(a);
        let span = u64::from(char_index(b) - low) + 1;
        self.sequence(move |s| char_from_index(low + below_u64(s, span) as u32))
    }

    /// Uniform characters in `[a, char::MAX]`.
    pub fn char_range_up(&self, a: char) -> impl Iterator<Item = char> {
        self.char_range_unchecked(a, char::MAX)
    }

    /// Uniform characters in `['\0', a]`.
    pub fn char_range_down(&self, a: char) -> impl Iterator<Item = char> {
        self.char_range_unchecked('\0', a)
    }

    /// Uniform Unicode scalar values.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.char_range_unchecked('\0', char::MAX)
    }

    /// Uniform ASCII characters.
    pub fn ascii_chars(&self) -> impl Iterator<Item = char> {
        self.char_range_unchecked('\0', '\x7f')
    }
}

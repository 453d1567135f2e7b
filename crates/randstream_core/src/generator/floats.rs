//! Floating-point sequences under two distinct semantics.
//!
//! - **Bit-pattern-uniform** (`floats`, `float_range*`): every admissible bit
//!   pattern is equally likely. Both zeros and both infinities are ordinary
//!   patterns; NaN appears only as the canonical encoding and only in the
//!   unbounded [`floats`](RandomGenerator::floats) stream.
//! - **Real-number-uniform** (`*_uniform`): a uniform real in the range,
//!   rounded to the nearest float. Sampling happens on the exact integer grid
//!   of [`IeeeFloat::to_grid`], so wide binades get proportionally more mass.

use num_bigint::BigInt;

use super::RandomGenerator;
use crate::error::{GeneratorError, Result};
use crate::sampler::below_big;
use crate::sampler::float::ordered_in_range;
use crate::sampler::IeeeFloat;
use crate::source::BitSource;

/// Which zero a real-uniform draw that rounds to zero becomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ZeroPolicy {
    Positive,
    Negative,
    Either,
}

impl ZeroPolicy {
    /// `-0.0` is produced only when a bound is `-0.0`.
    fn for_bounds<T: IeeeFloat>(a: T, b: T) -> Self {
        if b.is_identical(T::NEG_ZERO) {
            ZeroPolicy::Negative
        } else if a.is_identical(T::NEG_ZERO) {
            ZeroPolicy::Either
        } else {
            ZeroPolicy::Positive
        }
    }

    fn resolve<T: IeeeFloat, B: BitSource + ?Sized>(self, source: &mut B) -> T {
        match self {
            ZeroPolicy::Positive => T::ZERO,
            ZeroPolicy::Negative => T::NEG_ZERO,
            ZeroPolicy::Either => {
                if source.next_bool() {
                    T::NEG_ZERO
                } else {
                    T::ZERO
                }
            }
        }
    }
}

fn reject_nan<T: IeeeFloat>(name: &str, value: T) -> Result<i64> {
    value.to_ordered().ok_or_else(|| {
        GeneratorError::InvalidArgument(format!("{name} cannot be NaN"))
    })
}

fn reject_non_finite<T: IeeeFloat>(name: &str, value: T) -> Result<()> {
    if !value.is_finite() {
        return Err(GeneratorError::InvalidArgument(format!(
            "{name} must be finite, got {value}"
        )));
    }
    Ok(())
}

impl RandomGenerator {
    /// Uniform bit patterns, with every NaN collapsed to the canonical NaN.
    pub fn floats<T: IeeeFloat>(&self) -> impl Iterator<Item = T> {
        self.sequence(|s| T::bit_pattern(s))
    }

    /// Uniform bit patterns between `a` and `b` inclusive, ordered with
    /// `-0.0 < +0.0`. Infinite bounds are allowed.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if a bound is NaN or
    /// `a` orders after `b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]);
    /// let values: Vec<f32> = generator.float_range(-1.0f32, 1.0).unwrap().take(100).collect();
    /// assert!(values.iter().all(|x| (-1.0..=1.0).contains(x)));
    /// assert!(generator.float_range(f32::NAN, 1.0).is_err());
    /// ```
    pub fn float_range<T: IeeeFloat>(&self, a: T, b: T) -> Result<impl Iterator<Item = T>> {
        let low = reject_nan("a", a)?;
        let high = reject_nan("b", b)?;
        if low > high {
            return Err(GeneratorError::InvalidArgument(format!(
                "float_range requires a <= b, got a = {a}, b = {b}"
            )));
        }
        Ok(self.ordered_range(low, high))
    }

    fn ordered_range<T: IeeeFloat>(&self, low: i64, high: i64) -> impl Iterator<Item = T> {
        self.sequence(move |s| {
            if low == high {
                T::from_ordered(low)
            } else {
                T::from_ordered(ordered_in_range(s, low, high))
            }
        })
    }

    /// Uniform bit patterns from `a` up to `+inf`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a` is NaN.
    pub fn float_range_up<T: IeeeFloat>(&self, a: T) -> Result<impl Iterator<Item = T>> {
        self.float_range(a, T::INFINITY)
    }

    /// Uniform bit patterns from `-inf` up to `a`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a` is NaN.
    pub fn float_range_down<T: IeeeFloat>(&self, a: T) -> Result<impl Iterator<Item = T>> {
        self.float_range(T::NEG_INFINITY, a)
    }

    /// Uniform positive bit patterns, subnormals through `+inf`.
    pub fn positive_floats<T: IeeeFloat>(&self) -> impl Iterator<Item = T> {
        let low = T::MIN_POSITIVE_SUBNORMAL.to_ordered().unwrap_or(1);
        let high = T::INFINITY.to_ordered().unwrap_or(low);
        self.ordered_range(low, high)
    }

    /// Uniform negative bit patterns, `-inf` through the largest negative
    /// subnormal.
    pub fn negative_floats<T: IeeeFloat>(&self) -> impl Iterator<Item = T> {
        let high = (-T::MIN_POSITIVE_SUBNORMAL).to_ordered().unwrap_or(-2);
        let low = T::NEG_INFINITY.to_ordered().unwrap_or(high);
        self.ordered_range(low, high)
    }

    /// Uniform non-zero, non-NaN bit patterns.
    pub fn nonzero_floats<T: IeeeFloat>(&self) -> impl Iterator<Item = T> {
        let low = T::NEG_INFINITY.to_ordered().unwrap_or(0);
        let high = T::INFINITY.to_ordered().unwrap_or(0);
        self.ordered_range::<T>(low, high).filter(|x| *x != T::ZERO)
    }

    /// Uniform reals in `[a, b]` rounded to the nearest float.
    ///
    /// A result that rounds to zero is `+0.0`, unless a bound is `-0.0`:
    /// `b == -0.0` gives `-0.0`, and `a == -0.0` alone gives either zero with
    /// equal probability.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if a bound is NaN or
    /// infinite, or `a > b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]);
    /// let values: Vec<f64> = generator.float_range_uniform(1.0, 2.0).unwrap().take(100).collect();
    /// assert!(values.iter().all(|x| (1.0..=2.0).contains(x)));
    /// assert!(generator.float_range_uniform(0.0, f64::INFINITY).is_err());
    /// ```
    pub fn float_range_uniform<T: IeeeFloat>(
        &self,
        a: T,
        b: T,
    ) -> Result<impl Iterator<Item = T>> {
        reject_nan("a", a)?;
        reject_nan("b", b)?;
        reject_non_finite("a", a)?;
        reject_non_finite("b", b)?;
        if a > b {
            return Err(GeneratorError::InvalidArgument(format!(
                "float_range_uniform requires a <= b, got a = {a}, b = {b}"
            )));
        }
        Ok(self.grid_range(a, b))
    }

    fn grid_range<T: IeeeFloat>(&self, a: T, b: T) -> impl Iterator<Item = T> {
        let low = a.to_grid();
        let span = b.to_grid() - &low + 1u32;
        let zeros = ZeroPolicy::for_bounds(a, b);
        self.sequence(move |s| {
            let grid = &low + BigInt::from(below_big(s, span.magnitude()));
            let value = T::from_grid_nearest(&grid);
            if value == T::ZERO {
                zeros.resolve(s)
            } else {
                value
            }
        })
    }

    /// Uniform reals in `[a, MAX]` rounded to the nearest float.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a` is NaN or infinite.
    pub fn float_range_up_uniform<T: IeeeFloat>(
        &self,
        a: T,
    ) -> Result<impl Iterator<Item = T>> {
        self.float_range_uniform(a, T::MAX)
    }

    /// Uniform reals in `[-MAX, a]` rounded to the nearest float.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a` is NaN or infinite.
    pub fn float_range_down_uniform<T: IeeeFloat>(
        &self,
        a: T,
    ) -> Result<impl Iterator<Item = T>> {
        self.float_range_uniform(-T::MAX, a)
    }

    /// Uniform reals in `[-MAX, MAX]` rounded to the nearest float.
    pub fn floats_uniform<T: IeeeFloat>(&self) -> impl Iterator<Item = T> {
        self.grid_range(-T::MAX, T::MAX)
    }
}

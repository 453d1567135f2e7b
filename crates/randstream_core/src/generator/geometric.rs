//! Geometric integers, shifted geometric ranges and arbitrary-precision
//! integers with geometrically distributed bit length.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{One, Zero};

use super::{require_scale_at_least, RandomGenerator};
use crate::error::{GeneratorError, Result};
use crate::sampler::{
    below_big, below_pow2_big, natural_geometric, natural_geometric_ratio, positive_geometric,
};
use crate::source::BitSource;

/// A geometric distribution shifted to start at a bound.
///
/// Upward: `a + g - 1` with `g` positive geometric of mean `scale - a + 1`,
/// so values are `>= a` with mean `scale`. Downward mirrors this around `a`.
/// Draws that leave the `i32` domain are rejected.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GeometricRange {
    bound: i64,
    mean: u32,
    upward: bool,
}

impl GeometricRange {
    /// Geometric values `>= a`; requires `scale > a`.
    pub(crate) fn up(scale: i32, a: i32) -> Result<Self> {
        if scale <= a {
            return Err(GeneratorError::InvalidScale(format!(
                "scale must be greater than the lower bound {a}, got {scale}"
            )));
        }
        Self::with_offset(i64::from(scale) - i64::from(a), a, true)
    }

    /// Geometric values `<= a`; requires `scale > -a`.
    pub(crate) fn down(scale: i32, a: i32) -> Result<Self> {
        if i64::from(scale) <= -i64::from(a) {
            return Err(GeneratorError::InvalidScale(format!(
                "scale must be greater than {}, the negated upper bound, got {scale}",
                -i64::from(a)
            )));
        }
        Self::with_offset(i64::from(scale) + i64::from(a), a, false)
    }

    fn with_offset(offset: i64, a: i32, upward: bool) -> Result<Self> {
        let mean = u32::try_from(offset + 1).map_err(|_| {
            GeneratorError::InvalidScale(format!(
                "geometric mean {} around bound {a} exceeds the sampler domain",
                offset + 1
            ))
        })?;
        Ok(Self {
            bound: i64::from(a),
            mean,
            upward,
        })
    }

    pub(crate) fn sample<B: BitSource + ?Sized>(&self, source: &mut B) -> i32 {
        loop {
            let distance = i64::from(positive_geometric(source, self.mean)) - 1;
            let value = if self.upward {
                self.bound + distance
            } else {
                self.bound - distance
            };
            if let Ok(value) = i32::try_from(value) {
                return value;
            }
        }
    }
}

/// Uniform value with bit length exactly `bits` (`bits >= 1`).
fn with_bit_length<B: BitSource + ?Sized>(source: &mut B, bits: u64) -> BigUint {
    (BigUint::one() << (bits - 1)) | below_pow2_big(source, bits - 1)
}

/// Uniform value in `[low, high]` for `low <= high`.
fn big_between<B: BitSource + ?Sized>(source: &mut B, low: &BigInt, high: &BigInt) -> BigInt {
    let span = high - low + 1u32;
    low + BigInt::from(below_big(source, span.magnitude()))
}

fn negate_if(negative: bool, magnitude: BigUint) -> BigInt {
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    BigInt::from_biguint(sign, magnitude)
}

impl RandomGenerator {
    fn scale_as_mean(&self, min: i32) -> Result<u32> {
        require_scale_at_least("scale", self.scale, min)?;
        Ok(self.scale as u32)
    }

    /// Positive integers, geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn positive_integers_geometric(&self) -> Result<impl Iterator<Item = i32>> {
        let mean = self.scale_as_mean(2)?;
        Ok(self.sequence(move |s| positive_geometric(s, mean)))
    }

    /// Negative integers whose magnitude is geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn negative_integers_geometric(&self) -> Result<impl Iterator<Item = i32>> {
        let mean = self.scale_as_mean(2)?;
        Ok(self.sequence(move |s| -positive_geometric(s, mean)))
    }

    /// Non-negative integers, geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]).with_scale(4);
    /// assert!(generator.natural_integers_geometric().unwrap().take(50).all(|x| x >= 0));
    /// assert!(generator.with_scale(0).natural_integers_geometric().is_err());
    /// ```
    pub fn natural_integers_geometric(&self) -> Result<impl Iterator<Item = i32>> {
        let mean = self.scale_as_mean(1)?;
        Ok(self.sequence(move |s| natural_geometric(s, mean)))
    }

    /// Non-zero integers: a positive geometric magnitude with a uniform sign.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn nonzero_integers_geometric(&self) -> Result<impl Iterator<Item = i32>> {
        let mean = self.scale_as_mean(2)?;
        Ok(self.sequence(move |s| {
            let magnitude = positive_geometric(s, mean);
            if s.next_bool() {
                magnitude
            } else {
                -magnitude
            }
        }))
    }

    /// Integers: a non-negative geometric magnitude with a uniform sign.
    ///
    /// The sign is drawn for zero as well, so zero is as likely as a
    /// natural draw of zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn integers_geometric(&self) -> Result<impl Iterator<Item = i32>> {
        let mean = self.scale_as_mean(1)?;
        Ok(self.sequence(move |s| {
            let magnitude = natural_geometric(s, mean);
            if s.next_bool() {
                magnitude
            } else {
                -magnitude
            }
        }))
    }

    /// Integers `>= a`, geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale <= a`.
    pub fn range_up_geometric(&self, a: i32) -> Result<impl Iterator<Item = i32>> {
        let distribution = GeometricRange::up(self.scale, a)?;
        Ok(self.sequence(move |s| distribution.sample(s)))
    }

    /// Integers `<= a`, geometric with mean `-scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale <= -a`.
    pub fn range_down_geometric(&self, a: i32) -> Result<impl Iterator<Item = i32>> {
        let distribution = GeometricRange::down(self.scale, a)?;
        Ok(self.sequence(move |s| distribution.sample(s)))
    }

    /// Non-negative integers, geometric with mean `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] unless both parameters
    /// are positive.
    pub fn natural_integers_geometric_ratio(
        &self,
        numerator: i32,
        denominator: i32,
    ) -> Result<impl Iterator<Item = i32>> {
        if numerator <= 0 || denominator <= 0 {
            return Err(GeneratorError::InvalidArgument(format!(
                "geometric ratio requires a positive numerator and denominator, got {numerator}/{denominator}"
            )));
        }
        let (numerator, denominator) = (numerator as u32, denominator as u32);
        Ok(self.sequence(move |s| natural_geometric_ratio(s, numerator, denominator)))
    }

    /// Positive big integers whose bit length is geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn positive_big_integers(&self) -> Result<impl Iterator<Item = BigInt>> {
        let mean = self.scale_as_mean(2)?;
        Ok(self.sequence(move |s| {
            let bits = positive_geometric(s, mean) as u64;
            BigInt::from(with_bit_length(s, bits))
        }))
    }

    /// Negative big integers whose bit length is geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn negative_big_integers(&self) -> Result<impl Iterator<Item = BigInt>> {
        Ok(self.positive_big_integers()?.map(|x| -x))
    }

    /// Non-negative big integers whose bit length is geometric with mean
    /// `scale`; a bit length of zero is the value zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn natural_big_integers(&self) -> Result<impl Iterator<Item = BigInt>> {
        let mean = self.scale_as_mean(1)?;
        Ok(self.sequence(move |s| {
            let bits = natural_geometric(s, mean) as u64;
            if bits == 0 {
                BigInt::zero()
            } else {
                BigInt::from(with_bit_length(s, bits))
            }
        }))
    }

    /// Non-zero big integers: a positive big integer with a uniform sign.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 2`.
    pub fn nonzero_big_integers(&self) -> Result<impl Iterator<Item = BigInt>> {
        let mean = self.scale_as_mean(2)?;
        Ok(self.sequence(move |s| {
            let bits = positive_geometric(s, mean) as u64;
            let magnitude = with_bit_length(s, bits);
            negate_if(!s.next_bool(), magnitude)
        }))
    }

    /// Big integers: a natural big integer with a uniform sign.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn big_integers(&self) -> Result<impl Iterator<Item = BigInt>> {
        let mean = self.scale_as_mean(1)?;
        Ok(self.sequence(move |s| {
            let bits = natural_geometric(s, mean) as u64;
            let magnitude = if bits == 0 {
                BigUint::zero()
            } else {
                with_bit_length(s, bits)
            };
            negate_if(!s.next_bool(), magnitude)
        }))
    }

    /// Uniform big integers in `[a, b]`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `a > b`.
    pub fn big_range(&self, a: BigInt, b: BigInt) -> Result<impl Iterator<Item = BigInt>> {
        if a > b {
            return Err(GeneratorError::InvalidArgument(format!(
                "big_range requires a <= b, got a = {a}, b = {b}"
            )));
        }
        Ok(self.sequence(move |s| big_between(s, &a, &b)))
    }

    /// Big integers `>= a`.
    ///
    /// The bit length is geometric, anchored at the bit length `m` of `a`
    /// (`m = 0` for negative `a`). At length `m` the value is uniform in
    /// `[a, 2^m - 1]` (`[a, 0]` for negative `a`); at any longer length it is
    /// uniform among values of exactly that length. Every value `>= a` is
    /// reachable.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale` does not exceed `m`.
    pub fn big_range_up(&self, a: BigInt) -> Result<impl Iterator<Item = BigInt>> {
        let min_bits = if a.sign() == Sign::Minus { 0 } else { a.bits() };
        let anchor = i32::try_from(min_bits).map_err(|_| {
            GeneratorError::InvalidArgument(format!("bit length {min_bits} of a is too large"))
        })?;
        let lengths = GeometricRange::up(self.scale, anchor)?;
        let top = if a.sign() == Sign::Minus {
            BigInt::zero()
        } else {
            (BigInt::one() << min_bits) - 1u32
        };
        Ok(self.sequence(move |s| {
            let bits = lengths.sample(s) as u64;
            if bits == min_bits {
                big_between(s, &a, &top)
            } else {
                BigInt::from(with_bit_length(s, bits))
            }
        }))
    }

    /// Big integers `<= a`, the negation of [`big_range_up`](Self::big_range_up)`(-a)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale` does not exceed
    /// the bit length of `-a` (zero when `a` is positive).
    pub fn big_range_down(&self, a: BigInt) -> Result<impl Iterator<Item = BigInt>> {
        Ok(self.big_range_up(-a)?.map(|x| -x))
    }
}

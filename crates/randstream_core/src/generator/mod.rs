//! # Generator Handle
//!
//! [`RandomGenerator`] is the public entry point: a handle to a shared
//! [`SeedStream`] plus three scale parameters. Every distribution method
//! returns a lazy, unbounded iterator that draws from the shared stream only
//! when the next element is requested.
//!
//! ## Sharing Semantics
//!
//! - [`copy`](RandomGenerator::copy) (and `Clone`) returns a handle to the
//!   **same** stream: drawing through either advances both
//! - [`deep_copy`](RandomGenerator::deep_copy) clones the stream: the two
//!   handles are independent from then on
//! - `with_*_scale` returns a shallow copy with one scale overridden
//!
//! Handles are single-threaded (`Rc<RefCell<_>>`), so they are neither `Send`
//! nor `Sync`.
//!
//! ## Scales
//!
//! | Scale | Default | Used for |
//! |-------|---------|----------|
//! | `scale` | 32 | geometric means, bignum bit lengths, list and string lengths |
//! | `secondary_scale` | 8 | distinct list and subset sizes, shuffled prefix lengths |
//! | `tertiary_scale` | 2 | inverse frequency of special values in `with_element` / `optionals` |
//!
//! ## Usage Example
//!
//! ```rust
//! use randstream_core::RandomGenerator;
//!
//! let generator = RandomGenerator::new([1, 2, 3, 4, 5, 6, 7, 8]);
//! let digits: Vec<i32> = generator.range(0, 9).unwrap().take(5).collect();
//! assert!(digits.iter().all(|d| (0..=9).contains(d)));
//!
//! // A fresh generator with the same seed reproduces the sequence.
//! let again = RandomGenerator::new([1, 2, 3, 4, 5, 6, 7, 8]);
//! let replay: Vec<i32> = again.range(0, 9).unwrap().take(5).collect();
//! assert_eq!(digits, replay);
//! ```

mod composite;
mod floats;
mod geometric;
mod integers;

pub use composite::PrefixPermutation;
pub use integers::FixedInt;

use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use tracing::{debug, trace};

use crate::config::GeneratorConfig;
use crate::error::{GeneratorError, Result};
use crate::source::{BitSource, SeedStream, StreamPosition, SEED_SIZE};

/// Default primary scale.
pub const DEFAULT_SCALE: i32 = 32;
/// Default secondary scale.
pub const DEFAULT_SECONDARY_SCALE: i32 = 8;
/// Default tertiary scale.
pub const DEFAULT_TERTIARY_SCALE: i32 = 2;

/// Serialisable capture of a generator's exact state.
///
/// Restoring a snapshot with [`RandomGenerator::from_snapshot`] yields an
/// independent generator that continues exactly where the captured one was.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Seed words.
    pub seed: [i32; SEED_SIZE],
    /// Position in the seeded stream.
    pub position: StreamPosition,
    /// Primary scale.
    pub scale: i32,
    /// Secondary scale.
    pub secondary_scale: i32,
    /// Tertiary scale.
    pub tertiary_scale: i32,
}

/// Seeded generator of lazy random sequences.
///
/// See the [module documentation](self) for sharing semantics and scales.
#[derive(Clone)]
pub struct RandomGenerator {
    stream: Rc<RefCell<SeedStream>>,
    scale: i32,
    secondary_scale: i32,
    tertiary_scale: i32,
}

impl RandomGenerator {
    /// Creates a generator from an explicit seed with default scales.
    pub fn new(seed: [i32; SEED_SIZE]) -> Self {
        debug!(?seed, "creating generator from explicit seed");
        Self::from_stream(SeedStream::new(seed))
    }

    /// Creates a generator from a seed slice of exactly [`SEED_SIZE`] words.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSeed`] for any other length.
    pub fn from_seed_slice(seed: &[i32]) -> Result<Self> {
        let stream = SeedStream::from_slice(seed)?;
        debug!(seed = ?stream.seed(), "creating generator from seed slice");
        Ok(Self::from_stream(stream))
    }

    /// Creates a generator seeded from system entropy.
    pub fn from_entropy() -> Self {
        let stream = SeedStream::from_entropy();
        debug!(seed = ?stream.seed(), "creating generator from system entropy");
        Self::from_stream(stream)
    }

    /// Creates a generator from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails validation.
    pub fn from_config(config: &GeneratorConfig) -> Result<Self> {
        config.validate()?;
        let generator = match &config.seed {
            Some(seed) => Self::from_seed_slice(seed)?,
            None => Self::from_entropy(),
        };
        Ok(generator
            .with_scale(config.scale)
            .with_secondary_scale(config.secondary_scale)
            .with_tertiary_scale(config.tertiary_scale))
    }

    /// Recreates an independent generator from a snapshot.
    pub fn from_snapshot(snapshot: &GeneratorSnapshot) -> Self {
        let mut stream = SeedStream::new(snapshot.seed);
        stream.restore(snapshot.position);
        debug!(position = snapshot.position.0, "restoring generator from snapshot");
        Self {
            stream: Rc::new(RefCell::new(stream)),
            scale: snapshot.scale,
            secondary_scale: snapshot.secondary_scale,
            tertiary_scale: snapshot.tertiary_scale,
        }
    }

    fn from_stream(stream: SeedStream) -> Self {
        Self {
            stream: Rc::new(RefCell::new(stream)),
            scale: DEFAULT_SCALE,
            secondary_scale: DEFAULT_SECONDARY_SCALE,
            tertiary_scale: DEFAULT_TERTIARY_SCALE,
        }
    }

    /// Returns the seed words.
    pub fn seed(&self) -> [i32; SEED_SIZE] {
        *self.stream.borrow().seed()
    }

    /// Returns the current position in the shared stream.
    pub fn position(&self) -> StreamPosition {
        self.stream.borrow().position()
    }

    /// Returns the primary scale.
    #[inline]
    pub fn scale(&self) -> i32 {
        self.scale
    }

    /// Returns the secondary scale.
    #[inline]
    pub fn secondary_scale(&self) -> i32 {
        self.secondary_scale
    }

    /// Returns the tertiary scale.
    #[inline]
    pub fn tertiary_scale(&self) -> i32 {
        self.tertiary_scale
    }

    /// Returns a handle sharing this generator's stream with a new primary scale.
    pub fn with_scale(&self, scale: i32) -> Self {
        trace!(scale, "overriding primary scale");
        Self {
            scale,
            ..self.clone()
        }
    }

    /// Returns a handle sharing this generator's stream with a new secondary scale.
    pub fn with_secondary_scale(&self, secondary_scale: i32) -> Self {
        trace!(secondary_scale, "overriding secondary scale");
        Self {
            secondary_scale,
            ..self.clone()
        }
    }

    /// Returns a handle sharing this generator's stream with a new tertiary scale.
    pub fn with_tertiary_scale(&self, tertiary_scale: i32) -> Self {
        trace!(tertiary_scale, "overriding tertiary scale");
        Self {
            tertiary_scale,
            ..self.clone()
        }
    }

    /// Restores the shared stream to its seed state. Scales are unchanged.
    ///
    /// Every handle sharing the stream observes the reset.
    pub fn reset(&self) {
        let mut stream = self.stream.borrow_mut();
        debug!(from = stream.position().0, "resetting generator to seed state");
        stream.reset();
    }

    /// Returns a handle to the same stream (shallow copy).
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Returns a generator with an independent clone of the stream.
    pub fn deep_copy(&self) -> Self {
        let stream = self.stream.borrow().clone();
        debug!(position = stream.position().0, "deep-copying generator");
        Self {
            stream: Rc::new(RefCell::new(stream)),
            ..self.clone()
        }
    }

    /// Captures the generator's exact state.
    pub fn snapshot(&self) -> GeneratorSnapshot {
        let stream = self.stream.borrow();
        GeneratorSnapshot {
            seed: *stream.seed(),
            position: stream.position(),
            scale: self.scale,
            secondary_scale: self.secondary_scale,
            tertiary_scale: self.tertiary_scale,
        }
    }

    /// Draws one raw 32-bit word as a signed integer.
    pub fn next_i32(&self) -> i32 {
        self.draw(|s| s.next_u32() as i32)
    }

    /// Draws a 64-bit integer from two words.
    pub fn next_i64(&self) -> i64 {
        self.draw(|s| s.next_u64() as i64)
    }

    /// Draws a fair coin flip.
    pub fn next_bool(&self) -> bool {
        self.draw(|s| s.next_bool())
    }

    /// Runs `f` with exclusive access to the shared stream.
    ///
    /// The borrow ends when `f` returns, so `f` must not pull from other
    /// sequences built on this stream.
    #[inline]
    pub(crate) fn draw<R>(&self, f: impl FnOnce(&mut SeedStream) -> R) -> R {
        f(&mut self.stream.borrow_mut())
    }

    /// Builds an unbounded sequence whose elements are produced by `f`.
    pub(crate) fn sequence<T>(
        &self,
        mut f: impl FnMut(&mut SeedStream) -> T,
    ) -> impl Iterator<Item = T> {
        let stream = Rc::clone(&self.stream);
        std::iter::from_fn(move || Some(f(&mut stream.borrow_mut())))
    }
}

impl PartialEq for RandomGenerator {
    fn eq(&self, other: &Self) -> bool {
        self.scale == other.scale
            && self.secondary_scale == other.secondary_scale
            && self.tertiary_scale == other.tertiary_scale
            && *self.stream.borrow() == *other.stream.borrow()
    }
}

impl Eq for RandomGenerator {}

impl Hash for RandomGenerator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.stream.borrow().hash(state);
        self.scale.hash(state);
        self.secondary_scale.hash(state);
        self.tertiary_scale.hash(state);
    }
}

impl fmt::Debug for RandomGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stream = self.stream.borrow();
        f.debug_struct("RandomGenerator")
            .field("seed", stream.seed())
            .field("position", &stream.position().0)
            .field("scale", &self.scale)
            .field("secondary_scale", &self.secondary_scale)
            .field("tertiary_scale", &self.tertiary_scale)
            .finish()
    }
}

/// Fails with [`GeneratorError::InvalidScale`] unless `value >= min`.
pub(crate) fn require_scale_at_least(name: &str, value: i32, min: i32) -> Result<()> {
    if value < min {
        return Err(GeneratorError::InvalidScale(format!(
            "{name} must be at least {min}, got {value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;

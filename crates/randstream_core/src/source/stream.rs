//! Seeded ChaCha stream with snapshot and reset support.
//!
//! This module provides [`SeedStream`], the concrete [`BitSource`] behind every
//! generator handle.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

use super::BitSource;
use crate::error::{GeneratorError, Result};

/// Number of 32-bit words in a seed.
pub const SEED_SIZE: usize = 8;

/// A position within a [`SeedStream`], measured in 32-bit words drawn since
/// the seed state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StreamPosition(pub u128);

/// Deterministic bit source seeded by a fixed-length word array.
///
/// The seed is immutable after construction. Drawing advances the internal
/// ChaCha12 state; [`reset`](SeedStream::reset) returns to the seed state and
/// [`restore`](SeedStream::restore) jumps to any previously captured position.
///
/// Cloning produces an independent stream whose subsequent output is identical
/// to the original's subsequent output at the time of the clone.
///
/// # Examples
///
/// ```rust
/// use randstream_core::source::{BitSource, SeedStream};
///
/// let mut stream = SeedStream::new([7; 8]);
/// let mark = stream.position();
/// let first = stream.next_u32();
///
/// stream.restore(mark);
/// assert_eq!(stream.next_u32(), first);
/// ```
#[derive(Clone, Debug)]
pub struct SeedStream {
    /// The seed used for initialisation (kept for reset and equality).
    seed: [i32; SEED_SIZE],
    /// The underlying ChaCha12 instance.
    inner: ChaCha12Rng,
}

impl SeedStream {
    /// Creates a stream initialised with the given seed.
    pub fn new(seed: [i32; SEED_SIZE]) -> Self {
        Self {
            inner: ChaCha12Rng::from_seed(key_bytes(&seed)),
            seed,
        }
    }

    /// Creates a stream from a seed slice, which must hold exactly
    /// [`SEED_SIZE`] words.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidSeed`] for any other length.
    pub fn from_slice(seed: &[i32]) -> Result<Self> {
        let words: [i32; SEED_SIZE] = seed.try_into().map_err(|_| GeneratorError::InvalidSeed {
            expected: SEED_SIZE,
            got: seed.len(),
        })?;
        Ok(Self::new(words))
    }

    /// Creates a stream seeded from the thread-local system entropy source.
    pub fn from_entropy() -> Self {
        let seed: [i32; SEED_SIZE] = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// Returns the seed this stream was created from.
    #[inline]
    pub fn seed(&self) -> &[i32; SEED_SIZE] {
        &self.seed
    }

    /// Restores the stream to its seed state.
    pub fn reset(&mut self) {
        self.inner = ChaCha12Rng::from_seed(key_bytes(&self.seed));
    }

    /// Returns the current position in the stream.
    #[inline]
    pub fn position(&self) -> StreamPosition {
        StreamPosition(self.inner.get_word_pos())
    }

    /// Moves the stream to a previously captured position.
    #[inline]
    pub fn restore(&mut self, position: StreamPosition) {
        self.inner.set_word_pos(position.0);
    }
}

impl BitSource for SeedStream {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }
}

impl PartialEq for SeedStream {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed && self.position() == other.position()
    }
}

impl Eq for SeedStream {}

impl Hash for SeedStream {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.seed.hash(state);
        self.position().hash(state);
    }
}

/// Packs the seed words little-endian into a ChaCha key.
fn key_bytes(seed: &[i32; SEED_SIZE]) -> [u8; 32] {
    let mut key = [0u8; 32];
    for (chunk, word) in key.chunks_exact_mut(4).zip(seed) {
        chunk.copy_from_slice(&word.to_le_bytes());
    }
    key
}

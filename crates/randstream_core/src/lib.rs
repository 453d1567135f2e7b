//! # randstream_core: Deterministic Random Value Sequences
//!
//! A seedable generator of lazily evaluated, unbounded sequences of random
//! values: integers of every width, arbitrary-precision integers, characters,
//! floats under two sampling semantics, and composite values (lists, strings,
//! sets, permutations, tuples, interleavings) built from other sequences.
//!
//! ## Layers
//!
//! - [`source`]: the deterministic bit source (seeded ChaCha12 stream)
//! - [`sampler`]: stateless sampling algorithms over any bit source
//! - [`generator`]: the [`RandomGenerator`] handle and its distributions
//! - [`combinators`]: tuples and dependent pairs over infinite sequences
//! - [`config`]: construction parameters, loadable from TOML
//! - [`error`]: the [`GeneratorError`] taxonomy
//!
//! ## Determinism
//!
//! Every value is a deterministic function of the seed and of the order in
//! which values are requested. Two generators built from the same seed yield
//! identical sequences for identical call patterns, and a
//! [`GeneratorSnapshot`] reproduces any point of a stream.
//!
//! ## Usage Examples
//!
//! ```rust
//! use randstream_core::{combinators::pairs, RandomGenerator};
//!
//! let generator = RandomGenerator::new([1, 2, 3, 4, 5, 6, 7, 8]).with_scale(4);
//!
//! // Lists of small digits with geometric length of mean 4
//! let lists = generator.lists(generator.range(0i8, 9).unwrap()).unwrap();
//! for list in lists.take(3) {
//!     assert!(list.iter().all(|d| (0..=9).contains(d)));
//! }
//!
//! // Pairs of a boolean and an ASCII character
//! let (_flag, c) = pairs(generator.booleans(), generator.ascii_chars()).next().unwrap();
//! assert!(c.is_ascii());
//! ```
//!
//! ## Thread Safety
//!
//! Generators share their stream through `Rc<RefCell<_>>` and are neither
//! `Send` nor `Sync`. A [`GeneratorSnapshot`] is plain data and can be sent
//! to another thread and restored there with
//! [`RandomGenerator::from_snapshot`].

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod combinators;
pub mod config;
pub mod error;
pub mod generator;
pub mod sampler;
pub mod source;

pub use combinators::Either;
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{GeneratorError, Result};
pub use generator::{
    FixedInt, GeneratorSnapshot, PrefixPermutation, RandomGenerator, DEFAULT_SCALE,
    DEFAULT_SECONDARY_SCALE, DEFAULT_TERTIARY_SCALE,
};
pub use sampler::IeeeFloat;
pub use source::{SeedStream, StreamPosition, SEED_SIZE};

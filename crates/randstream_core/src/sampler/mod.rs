//! # Samplers
//!
//! Stateless sampling algorithms over any [`BitSource`](crate::source::BitSource).
//! Each function consumes a deterministic number of words for a given stream,
//! which keeps every derived sequence reproducible from its seed.
//!
//! ## Module Structure
//!
//! - [`bounded`]: uniform `[0, n)` for 32- and 64-bit bounds (mask and reject)
//! - [`bignum`]: uniform `[0, n)` for arbitrary-precision bounds
//! - [`geometric`]: geometric distributions from Bernoulli trials
//! - [`float`]: ordered and grid representations of IEEE-754 values

pub mod bignum;
pub mod bounded;
pub mod float;
pub mod geometric;

pub use bignum::{below_big, below_pow2_big};
pub use bounded::{
    below_pow2_u32, below_pow2_u64, below_u32, below_u64, ceiling_log2, expected_trials,
};
pub use float::IeeeFloat;
pub use geometric::{natural_geometric, natural_geometric_ratio, positive_geometric};

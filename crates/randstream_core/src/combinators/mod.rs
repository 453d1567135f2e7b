//! Combinators over infinite sequences.
//!
//! - [`tuples`]: zip two to seven infinite sequences, from independent
//!   sources or from consecutive elements of one source
//! - [`dependent`]: pairs whose second component comes from a per-key
//!   sequence that continues across repeated keys
//!
//! All combinators here have zip-infinite semantics: a component sequence
//! that ends is a contract violation and panics, rather than silently
//! shortening the result.

pub mod dependent;
pub mod tuples;

pub use dependent::{
    dependent_pairs, dependent_pairs_by_identity, DependentPairs, IdentityDependentPairs,
};
pub use tuples::{
    pairs, pairs_from, quadruples, quadruples_from, quintuples, quintuples_from, septuples,
    septuples_from, sextuples, sextuples_from, triples, triples_from,
};

/// Pulls the next element of a sequence that must be infinite.
///
/// # Panics
///
/// Panics if `source` is exhausted, naming `combinator` in the message.
#[inline]
pub(crate) fn next_infinite<I: Iterator + ?Sized>(source: &mut I, combinator: &str) -> I::Item {
    match source.next() {
        Some(x) => x,
        None => panic!("{combinator}: source sequence ended, but it must be infinite"),
    }
}

/// A value from one of two sequences, tagged with its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Either<L, R> {
    /// Drawn from the first sequence.
    Left(L),
    /// Drawn from the second sequence.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` for [`Either::Left`].
    pub fn is_left(&self) -> bool {
        matches!(self, Either::Left(_))
    }

    /// Returns `true` for [`Either::Right`].
    pub fn is_right(&self) -> bool {
        matches!(self, Either::Right(_))
    }

    /// Returns the left value, if any.
    pub fn left(self) -> Option<L> {
        match self {
            Either::Left(l) => Some(l),
            Either::Right(_) => None,
        }
    }

    /// Returns the right value, if any.
    pub fn right(self) -> Option<R> {
        match self {
            Either::Left(_) => None,
            Either::Right(r) => Some(r),
        }
    }

    /// Maps the left value.
    pub fn map_left<T, F: FnOnce(L) -> T>(self, f: F) -> Either<T, R> {
        match self {
            Either::Left(l) => Either::Left(f(l)),
            Either::Right(r) => Either::Right(r),
        }
    }

    /// Maps the right value.
    pub fn map_right<T, F: FnOnce(R) -> T>(self, f: F) -> Either<L, T> {
        match self {
            Either::Left(l) => Either::Left(l),
            Either::Right(r) => Either::Right(f(r)),
        }
    }
}

//! Tuples of two to seven elements.
//!
//! `pairs(xs, ys)` zips independent sources; `pairs_from(xs)` groups
//! consecutive elements of a single source. Components are pulled left to
//! right, so a shared generator stream is consumed in a fixed order.
//!
//! ```rust
//! use randstream_core::combinators::{pairs, triples_from};
//!
//! let p: Vec<(u32, char)> = pairs(0.., "ab".chars().cycle()).take(2).collect();
//! assert_eq!(p, vec![(0, 'a'), (1, 'b')]);
//!
//! let t: Vec<(u32, u32, u32)> = triples_from(0..).take(2).collect();
//! assert_eq!(t, vec![(0, 1, 2), (3, 4, 5)]);
//! ```

use super::next_infinite;

/// Expands to `$item` once per repetition of `$_marker`.
macro_rules! repeat_type {
    ($_marker:ident, $item:ty) => {
        $item
    };
}

/// Expands to `$e` once per repetition of `$_marker`.
macro_rules! repeat_expr {
    ($_marker:ident, $e:expr) => {
        $e
    };
}

macro_rules! zip_infinite {
    ($name:ident, $from:ident, $arity:literal: $($source:ident: $t:ident),+) => {
        #[doc = concat!("Zips ", $arity, " infinite sequences into tuples.")]
        ///
        /// # Panics
        ///
        /// Panics if any component sequence ends.
        pub fn $name<$($t: Iterator),+>(
            $(mut $source: $t),+
        ) -> impl Iterator<Item = ($($t::Item,)+)> {
            std::iter::from_fn(move || {
                Some(($(next_infinite(&mut $source, stringify!($name)),)+))
            })
        }

        #[doc = concat!("Groups ", $arity, " consecutive elements of one infinite sequence into tuples.")]
        ///
        /// # Panics
        ///
        /// Panics if the sequence ends.
        pub fn $from<I: Iterator>(
            mut xs: I,
        ) -> impl Iterator<Item = ($(repeat_type!($t, I::Item),)+)> {
            std::iter::from_fn(move || {
                Some(($(repeat_expr!($source, next_infinite(&mut xs, stringify!($from))),)+))
            })
        }
    };
}

zip_infinite!(pairs, pairs_from, "two": a: A, b: B);
zip_infinite!(triples, triples_from, "three": a: A, b: B, c: C);
zip_infinite!(quadruples, quadruples_from, "four": a: A, b: B, c: C, d: D);
zip_infinite!(quintuples, quintuples_from, "five": a: A, b: B, c: C, d: D, e: E);
zip_infinite!(sextuples, sextuples_from, "six": a: A, b: B, c: C, d: D, e: E, f: F);
zip_infinite!(septuples, septuples_from, "seven": a: A, b: B, c: C, d: D, e: E, f: F, g: G);

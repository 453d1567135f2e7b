//! Collections, strings, permutations and interleavings built on top of
//! other sequences.
//!
//! Composite sequences pull elements from caller-supplied iterators that may
//! themselves draw from this generator's stream. Structural draws (lengths,
//! coin flips, swap indices) therefore take the stream in a short borrow
//! that ends before any source is pulled.
//!
//! Every source passed here must be infinite. A source that ends is a
//! contract violation and panics with the name of the combinator.

use std::collections::{BTreeSet, HashSet};
use std::hash::Hash;
use std::iter::Chain;
use std::vec;

use super::geometric::GeometricRange;
use super::{require_scale_at_least, RandomGenerator};
use crate::combinators::{next_infinite, Either};
use crate::error::{GeneratorError, Result};
use crate::sampler::{below_u32, below_u64, natural_geometric};
use crate::source::BitSource;

/// One element of [`RandomGenerator::prefix_permutations`]: a shuffled
/// prefix followed by the untouched rest of the source.
pub type PrefixPermutation<I> = Chain<vec::IntoIter<<I as Iterator>::Item>, I>;

/// How the length of each composite element is chosen.
#[derive(Clone, Copy, Debug)]
enum Length {
    Fixed(usize),
    Geometric(u32),
    AtLeast(GeometricRange),
}

impl Length {
    fn sample<B: BitSource + ?Sized>(self, source: &mut B) -> usize {
        match self {
            Length::Fixed(n) => n,
            Length::Geometric(mean) => natural_geometric(source, mean) as usize,
            Length::AtLeast(range) => range.sample(source) as usize,
        }
    }
}

fn minimum_as_i32(min: usize) -> Result<i32> {
    i32::try_from(min).map_err(|_| {
        GeneratorError::InvalidArgument(format!("minimum size {min} exceeds i32::MAX"))
    })
}

/// Shuffles `items` in place, uniformly over all permutations.
fn fisher_yates<T, B: BitSource + ?Sized>(source: &mut B, items: &mut [T]) {
    let m = items.len() as u64;
    for i in 0..m.saturating_sub(1) {
        let j = i + below_u64(source, m - i);
        items.swap(i as usize, j as usize);
    }
}

impl RandomGenerator {
    fn geometric_length(&self, name: &str, scale: i32) -> Result<Length> {
        require_scale_at_least(name, scale, 1)?;
        Ok(Length::Geometric(scale as u32))
    }

    fn at_least_length(&self, scale: i32, min: usize) -> Result<Length> {
        Ok(Length::AtLeast(GeometricRange::up(scale, minimum_as_i32(min)?)?))
    }

    /// One side of a two-way mix is taken when `below(tertiary_scale) == 0`.
    fn mixing_odds(&self) -> Result<u32> {
        require_scale_at_least("tertiary_scale", self.tertiary_scale, 2)?;
        Ok(self.tertiary_scale as u32)
    }

    fn lists_with<I>(&self, length: Length, mut xs: I) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
    {
        let generator = self.clone();
        std::iter::from_fn(move || {
            let n = generator.draw(|s| length.sample(s));
            Some((0..n).map(|_| next_infinite(&mut xs, "lists")).collect())
        })
    }

    fn distinct_lists_with<I>(
        &self,
        length: Length,
        mut xs: I,
    ) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
        I::Item: Eq + Hash + Clone,
    {
        let generator = self.clone();
        std::iter::from_fn(move || {
            let n = generator.draw(|s| length.sample(s));
            let mut seen = HashSet::with_capacity(n);
            let mut list = Vec::with_capacity(n);
            while list.len() < n {
                let x = next_infinite(&mut xs, "distinct_lists");
                if seen.insert(x.clone()) {
                    list.push(x);
                }
            }
            Some(list)
        })
    }

    fn subsets_with<I>(&self, length: Length, mut xs: I) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
        I::Item: Ord,
    {
        let generator = self.clone();
        std::iter::from_fn(move || {
            let n = generator.draw(|s| length.sample(s));
            let mut set = BTreeSet::new();
            while set.len() < n {
                set.insert(next_infinite(&mut xs, "subsets"));
            }
            Some(set.into_iter().collect())
        })
    }

    /// Samples uniformly from `items`, which must be non-empty.
    ///
    /// A single item is repeated without consuming entropy.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `items` is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]);
    /// let colours = generator.uniform_sample(vec!["red", "green", "blue"]).unwrap();
    /// assert!(colours.take(20).all(|c| ["red", "green", "blue"].contains(&c)));
    /// assert!(generator.uniform_sample(Vec::<u8>::new()).is_err());
    /// ```
    pub fn uniform_sample<T: Clone>(&self, items: Vec<T>) -> Result<impl Iterator<Item = T>> {
        if items.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "uniform_sample requires at least one item".to_string(),
            ));
        }
        let len = items.len() as u64;
        Ok(self.sequence(move |s| items[below_u64(s, len) as usize].clone()))
    }

    /// Samples uniformly from the characters of `alphabet`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `alphabet` is empty.
    pub fn uniform_sample_chars(&self, alphabet: &str) -> Result<impl Iterator<Item = char>> {
        self.uniform_sample(alphabet.chars().collect())
    }

    /// Lists of exactly `n` consecutive elements of `xs`.
    pub fn lists_of_size<I: Iterator>(
        &self,
        n: usize,
        xs: I,
    ) -> impl Iterator<Item = Vec<I::Item>> {
        self.lists_with(Length::Fixed(n), xs)
    }

    /// Lists whose length is geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn lists<I: Iterator>(&self, xs: I) -> Result<impl Iterator<Item = Vec<I::Item>>> {
        let length = self.geometric_length("scale", self.scale)?;
        Ok(self.lists_with(length, xs))
    }

    /// Lists of at least `min` elements, length geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale <= min`.
    pub fn lists_at_least<I: Iterator>(
        &self,
        min: usize,
        xs: I,
    ) -> Result<impl Iterator<Item = Vec<I::Item>>> {
        let length = self.at_least_length(self.scale, min)?;
        Ok(self.lists_with(length, xs))
    }

    /// Strings of exactly `n` uniform characters.
    pub fn strings_of_length(&self, n: usize) -> impl Iterator<Item = String> {
        self.lists_of_size(n, self.chars())
            .map(|cs| cs.into_iter().collect())
    }

    /// Strings of uniform characters with geometric length of mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn strings(&self) -> Result<impl Iterator<Item = String>> {
        Ok(self.lists(self.chars())?.map(|cs| cs.into_iter().collect()))
    }

    /// Strings of at least `min` uniform characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale <= min`.
    pub fn strings_at_least(&self, min: usize) -> Result<impl Iterator<Item = String>> {
        Ok(self
            .lists_at_least(min, self.chars())?
            .map(|cs| cs.into_iter().collect()))
    }

    /// Strings over `alphabet` with geometric length of mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `alphabet` is empty and
    /// [`GeneratorError::InvalidScale`] if `scale < 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]).with_scale(4);
    /// let words: Vec<String> = generator.strings_from("ab").unwrap().take(10).collect();
    /// assert!(words.iter().all(|w| w.chars().all(|c| c == 'a' || c == 'b')));
    /// ```
    pub fn strings_from(&self, alphabet: &str) -> Result<impl Iterator<Item = String>> {
        let chars = self.uniform_sample_chars(alphabet)?;
        Ok(self.lists(chars)?.map(|cs| cs.into_iter().collect()))
    }

    /// Lists of exactly `n` distinct elements in order of first appearance.
    ///
    /// `xs` must contain at least `n` distinct values, otherwise the
    /// iterator never yields.
    pub fn distinct_lists_of_size<I>(
        &self,
        n: usize,
        xs: I,
    ) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
        I::Item: Eq + Hash + Clone,
    {
        self.distinct_lists_with(Length::Fixed(n), xs)
    }

    /// Distinct lists whose length is geometric with mean `secondary_scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `secondary_scale < 1`.
    pub fn distinct_lists<I>(&self, xs: I) -> Result<impl Iterator<Item = Vec<I::Item>>>
    where
        I: Iterator,
        I::Item: Eq + Hash + Clone,
    {
        let length = self.geometric_length("secondary_scale", self.secondary_scale)?;
        Ok(self.distinct_lists_with(length, xs))
    }

    /// Distinct lists of at least `min` elements, length geometric with mean
    /// `secondary_scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `secondary_scale <= min`.
    pub fn distinct_lists_at_least<I>(
        &self,
        min: usize,
        xs: I,
    ) -> Result<impl Iterator<Item = Vec<I::Item>>>
    where
        I: Iterator,
        I::Item: Eq + Hash + Clone,
    {
        let length = self.at_least_length(self.secondary_scale, min)?;
        Ok(self.distinct_lists_with(length, xs))
    }

    /// Sorted lists of exactly `n` elements.
    pub fn bags_of_size<I>(&self, n: usize, xs: I) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
        I::Item: Ord,
    {
        self.lists_of_size(n, xs).map(|mut list| {
            list.sort();
            list
        })
    }

    /// Sorted lists whose length is geometric with mean `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `scale < 1`.
    pub fn bags<I>(&self, xs: I) -> Result<impl Iterator<Item = Vec<I::Item>>>
    where
        I: Iterator,
        I::Item: Ord,
    {
        Ok(self.lists(xs)?.map(|mut list| {
            list.sort();
            list
        }))
    }

    /// Sorted lists of exactly `n` distinct elements.
    ///
    /// `xs` must contain at least `n` distinct values, otherwise the
    /// iterator never yields.
    pub fn subsets_of_size<I>(&self, n: usize, xs: I) -> impl Iterator<Item = Vec<I::Item>>
    where
        I: Iterator,
        I::Item: Ord,
    {
        self.subsets_with(Length::Fixed(n), xs)
    }

    /// Sorted distinct lists whose size is geometric with mean
    /// `secondary_scale`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `secondary_scale < 1`.
    pub fn subsets<I>(&self, xs: I) -> Result<impl Iterator<Item = Vec<I::Item>>>
    where
        I: Iterator,
        I::Item: Ord,
    {
        let length = self.geometric_length("secondary_scale", self.secondary_scale)?;
        Ok(self.subsets_with(length, xs))
    }

    /// Uniformly random permutations of `items`.
    ///
    /// Each element is an independent Fisher-Yates shuffle of a copy of
    /// `items`, so all `m!` orderings are equally likely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use randstream_core::RandomGenerator;
    ///
    /// let generator = RandomGenerator::new([0; 8]);
    /// for mut p in generator.permutations_finite(vec![1, 2, 3]).take(10) {
    ///     p.sort();
    ///     assert_eq!(p, vec![1, 2, 3]);
    /// }
    /// ```
    pub fn permutations_finite<T: Clone>(&self, items: Vec<T>) -> impl Iterator<Item = Vec<T>> {
        self.sequence(move |s| {
            let mut permutation = items.clone();
            fisher_yates(s, &mut permutation);
            permutation
        })
    }

    /// Permutations of a conceptually infinite sequence.
    ///
    /// Each element shuffles a prefix of geometric length (mean
    /// `secondary_scale`) of a fresh clone of `xs` and leaves the rest in
    /// place. The result is not uniform over all permutations.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `secondary_scale < 1`.
    pub fn prefix_permutations<I>(
        &self,
        xs: I,
    ) -> Result<impl Iterator<Item = PrefixPermutation<I>>>
    where
        I: Iterator + Clone,
    {
        let length = self.geometric_length("secondary_scale", self.secondary_scale)?;
        let generator = self.clone();
        Ok(std::iter::from_fn(move || {
            let n = generator.draw(|s| length.sample(s));
            let mut rest = xs.clone();
            let mut prefix: Vec<I::Item> = rest.by_ref().take(n).collect();
            generator.draw(|s| fisher_yates(s, &mut prefix));
            Some(prefix.into_iter().chain(rest))
        }))
    }

    /// Interleaves two sequences, pulling from `xs` with probability
    /// `1 / tertiary_scale` and from `ys` otherwise.
    ///
    /// Only the chosen source advances. The default tertiary scale of 2 is a
    /// fair coin.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `tertiary_scale < 2`.
    pub fn choose<I, J>(&self, mut xs: I, mut ys: J) -> Result<impl Iterator<Item = I::Item>>
    where
        I: Iterator,
        J: Iterator<Item = I::Item>,
    {
        let odds = self.mixing_odds()?;
        let generator = self.clone();
        Ok(std::iter::from_fn(move || {
            if generator.draw(|s| below_u32(s, odds)) == 0 {
                Some(next_infinite(&mut xs, "choose"))
            } else {
                Some(next_infinite(&mut ys, "choose"))
            }
        }))
    }

    /// Interleaves several sequences, pulling from a uniformly chosen one.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidArgument`] if `sources` is empty.
    pub fn choose_among<I: Iterator>(
        &self,
        mut sources: Vec<I>,
    ) -> Result<impl Iterator<Item = I::Item>> {
        if sources.is_empty() {
            return Err(GeneratorError::InvalidArgument(
                "choose_among requires at least one source".to_string(),
            ));
        }
        let generator = self.clone();
        let count = sources.len() as u64;
        Ok(std::iter::from_fn(move || {
            let index = generator.draw(|s| below_u64(s, count)) as usize;
            Some(next_infinite(&mut sources[index], "choose_among"))
        }))
    }

    /// Tagged interleaving of two sequences: `Left` from `xs` with
    /// probability `1 / tertiary_scale`, `Right` from `ys` otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `tertiary_scale < 2`.
    pub fn eithers<I, J>(
        &self,
        mut xs: I,
        mut ys: J,
    ) -> Result<impl Iterator<Item = Either<I::Item, J::Item>>>
    where
        I: Iterator,
        J: Iterator,
    {
        let odds = self.mixing_odds()?;
        let generator = self.clone();
        Ok(std::iter::from_fn(move || {
            if generator.draw(|s| below_u32(s, odds)) == 0 {
                Some(Either::Left(next_infinite(&mut xs, "eithers")))
            } else {
                Some(Either::Right(next_infinite(&mut ys, "eithers")))
            }
        }))
    }

    /// Yields `x` with probability `1 / tertiary_scale`, otherwise the next
    /// element of `xs`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `tertiary_scale < 2`.
    pub fn with_element<I>(&self, x: I::Item, mut xs: I) -> Result<impl Iterator<Item = I::Item>>
    where
        I: Iterator,
        I::Item: Clone,
    {
        let odds = self.mixing_odds()?;
        let generator = self.clone();
        Ok(std::iter::from_fn(move || {
            if generator.draw(|s| below_u32(s, odds)) == 0 {
                Some(x.clone())
            } else {
                Some(next_infinite(&mut xs, "with_element"))
            }
        }))
    }

    /// Yields `None` with probability `1 / tertiary_scale`, otherwise the
    /// next element of `xs` wrapped in `Some`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidScale`] if `tertiary_scale < 2`.
    pub fn optionals<I>(&self, xs: I) -> Result<impl Iterator<Item = Option<I::Item>>>
    where
        I: Iterator,
        I::Item: Clone,
    {
        self.with_element(None, xs.map(Some))
    }
}

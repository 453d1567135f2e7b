//! Dependent pairs: `(key, value)` where the value sequence depends on the key.
//!
//! The first time a key is seen, `f(&key)` builds its value sequence and
//! caches it. Later occurrences of the same key continue that sequence
//! instead of restarting it. Two keying policies exist:
//!
//! - [`dependent_pairs`]: keys compare by equality (`K: Eq + Hash + Clone`)
//! - [`dependent_pairs_by_identity`]: keys are `Rc<K>` and compare by
//!   allocation, so equal but distinct keys get separate sequences
//!
//! The cache holds one iterator per distinct key and grows without bound
//! over an unbounded key space.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use super::next_infinite;

/// Iterator returned by [`dependent_pairs`].
pub struct DependentPairs<I, F, J>
where
    I: Iterator,
{
    keys: I,
    f: F,
    cache: HashMap<I::Item, J>,
}

impl<I, F, J> DependentPairs<I, F, J>
where
    I: Iterator,
{
    /// Number of distinct keys seen so far.
    pub fn cached_keys(&self) -> usize {
        self.cache.len()
    }
}

impl<I, F, J> Iterator for DependentPairs<I, F, J>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> J,
    J: Iterator,
{
    type Item = (I::Item, J::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let key = next_infinite(&mut self.keys, "dependent_pairs");
        let f = &mut self.f;
        let values = self
            .cache
            .entry(key.clone())
            .or_insert_with(|| f(&key));
        let value = next_infinite(values, "dependent_pairs");
        Some((key, value))
    }
}

impl<I, F, J> fmt::Debug for DependentPairs<I, F, J>
where
    I: Iterator,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependentPairs")
            .field("cached_keys", &self.cache.len())
            .finish_non_exhaustive()
    }
}

/// Pairs each key with the next element of its own value sequence, caching
/// sequences by key equality.
///
/// # Panics
///
/// The iterator panics if `keys` or a value sequence ends.
///
/// # Examples
///
/// ```rust
/// use randstream_core::combinators::dependent_pairs;
///
/// let keys = vec![1u32, 2, 1, 1].into_iter().chain(std::iter::repeat(0));
/// let pairs: Vec<(u32, u32)> = dependent_pairs(keys, |&k| (k * 10..)).take(4).collect();
/// assert_eq!(pairs, vec![(1, 10), (2, 20), (1, 11), (1, 12)]);
/// ```
pub fn dependent_pairs<I, F, J>(keys: I, f: F) -> DependentPairs<I, F, J>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
    F: FnMut(&I::Item) -> J,
    J: Iterator,
{
    DependentPairs {
        keys,
        f,
        cache: HashMap::new(),
    }
}

/// Iterator returned by [`dependent_pairs_by_identity`].
pub struct IdentityDependentPairs<I, K, F, J> {
    keys: I,
    f: F,
    // The Rc is kept so the allocation (and therefore the address) stays
    // unique for as long as the entry exists.
    cache: HashMap<*const K, (Rc<K>, J)>,
}

impl<I, K, F, J> IdentityDependentPairs<I, K, F, J> {
    /// Number of distinct key allocations seen so far.
    pub fn cached_keys(&self) -> usize {
        self.cache.len()
    }
}

impl<I, K, F, J> Iterator for IdentityDependentPairs<I, K, F, J>
where
    I: Iterator<Item = Rc<K>>,
    F: FnMut(&K) -> J,
    J: Iterator,
{
    type Item = (Rc<K>, J::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let key = next_infinite(&mut self.keys, "dependent_pairs_by_identity");
        let f = &mut self.f;
        let (_, values) = self
            .cache
            .entry(Rc::as_ptr(&key))
            .or_insert_with(|| (Rc::clone(&key), f(&key)));
        let value = next_infinite(values, "dependent_pairs_by_identity");
        Some((key, value))
    }
}

impl<I, K, F, J> fmt::Debug for IdentityDependentPairs<I, K, F, J> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityDependentPairs")
            .field("cached_keys", &self.cache.len())
            .finish_non_exhaustive()
    }
}

/// Pairs each key with the next element of its own value sequence, caching
/// sequences by key identity (`Rc` allocation).
///
/// # Panics
///
/// The iterator panics if `keys` or a value sequence ends.
///
/// # Examples
///
/// ```rust
/// use std::rc::Rc;
/// use randstream_core::combinators::dependent_pairs_by_identity;
///
/// let first = Rc::new("k");
/// let second = Rc::new("k");
/// let keys = vec![Rc::clone(&first), second, first].into_iter().cycle();
/// let values: Vec<u32> = dependent_pairs_by_identity(keys, |_| 0u32..)
///     .take(3)
///     .map(|(_, v)| v)
///     .collect();
/// assert_eq!(values, vec![0, 0, 1]);
/// ```
pub fn dependent_pairs_by_identity<I, K, F, J>(keys: I, f: F) -> IdentityDependentPairs<I, K, F, J>
where
    I: Iterator<Item = Rc<K>>,
    F: FnMut(&K) -> J,
    J: Iterator,
{
    IdentityDependentPairs {
        keys,
        f,
        cache: HashMap::new(),
    }
}

//! Hasher selection for the hash-based operators.
//!
//! `uniq`, `intersection`, `difference` and `memoize` build hash tables
//! internally. The `fxhash` and `ahash` features swap the standard SipHash
//! builder for a faster one; `fxhash` wins when both are enabled.

use std::collections::{HashMap, HashSet};

#[cfg(feature = "fxhash")]
pub type FastBuildHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastBuildHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type FastBuildHasher = std::collections::hash_map::RandomState;

pub type FastHashMap<K, V> = HashMap<K, V, FastBuildHasher>;
pub type FastHashSet<T> = HashSet<T, FastBuildHasher>;

#[inline]
pub fn new_set<T>(capacity: usize) -> FastHashSet<T> {
    HashSet::with_capacity_and_hasher(capacity, FastBuildHasher::default())
}

#[inline]
pub fn new_map<K, V>() -> FastHashMap<K, V> {
    HashMap::with_hasher(FastBuildHasher::default())
}

//! Mapping merge operators.
//!
//! [`extend`] and [`defaults`] copy entries from a list of sources into a
//! target mapping. They are the only operators in this crate that mutate an
//! argument: the target is updated in place and handed back.
//!
//! | Operator | On an existing key |
//! |---|---|
//! | [`extend`] | overwritten, later sources win |
//! | [`defaults`] | kept, first value wins |
//!
//! Sources are any iterables of entries: maps by value yield `(K, V)`,
//! borrowed maps yield `(&K, &V)` and are cloned on insertion.
//!
//! # Examples
//!
//! ```rust
//! use underbar::mapping::{defaults, extend};
//! use std::collections::HashMap;
//!
//! let mut settings = HashMap::from([("color", "red")]);
//! let overrides = HashMap::from([("color", "blue"), ("size", "large")]);
//! extend(&mut settings, [&overrides]);
//! assert_eq!(settings["color"], "blue");
//! assert_eq!(settings["size"], "large");
//!
//! let mut options = HashMap::from([("color", "red")]);
//! defaults(&mut options, [HashMap::from([("color", "blue"), ("size", "small")])]);
//! assert_eq!(options["color"], "red");
//! assert_eq!(options["size"], "small");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// A key/value mapping that can be merged into.
pub trait Mapping {
    /// The key type.
    type Key;
    /// The value type.
    type Value;

    /// Returns `true` if `key` already has a value.
    fn has_key(&self, key: &Self::Key) -> bool;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: Self::Key, value: Self::Value);
}

impl<K, V, S> Mapping for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Key = K;
    type Value = V;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

impl<K: Ord, V> Mapping for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn has_key(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    #[inline]
    fn set(&mut self, key: K, value: V) {
        self.insert(key, value);
    }
}

/// Conversion of a source item into an owned entry.
///
/// Implemented for owned `(K, V)` pairs and for borrowed `(&K, &V)` pairs,
/// which are cloned.
pub trait IntoEntry<K, V> {
    /// Converts the item into an owned `(key, value)` pair.
    fn into_entry(self) -> (K, V);
}

impl<K, V> IntoEntry<K, V> for (K, V) {
    #[inline]
    fn into_entry(self) -> (K, V) {
        self
    }
}

impl<K: Clone, V: Clone> IntoEntry<K, V> for (&K, &V) {
    #[inline]
    fn into_entry(self) -> (K, V) {
        (self.0.clone(), self.1.clone())
    }
}

/// Copies every entry of every source into `target`, overwriting.
///
/// Sources are applied in order, so a key present in several sources ends
/// up with the value from the last one. Returns the updated target.
///
/// # Examples
///
/// ```rust
/// use underbar::mapping::extend;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// let first = BTreeMap::from([("b", 2)]);
/// let second = BTreeMap::from([("b", 3), ("c", 4)]);
///
/// let merged = extend(&mut target, [&first, &second]);
/// assert_eq!(merged, &BTreeMap::from([("a", 1), ("b", 3), ("c", 4)]));
/// ```
pub fn extend<M, I, S, E>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = E>,
    E: IntoEntry<M::Key, M::Value>,
{
    for source in sources {
        for entry in source {
            let (key, value) = entry.into_entry();
            target.set(key, value);
        }
    }
    target
}

/// Copies entries of every source into `target` only for missing keys.
///
/// A key that is already present, whether from the original target or from
/// an earlier source, keeps its value. Returns the updated target.
///
/// # Examples
///
/// ```rust
/// use underbar::mapping::defaults;
/// use std::collections::BTreeMap;
///
/// let mut target = BTreeMap::from([("a", 1)]);
/// let first = BTreeMap::from([("a", 10), ("b", 2)]);
/// let second = BTreeMap::from([("b", 20), ("c", 3)]);
///
/// defaults(&mut target, [&first, &second]);
/// assert_eq!(target, BTreeMap::from([("a", 1), ("b", 2), ("c", 3)]));
/// ```
pub fn defaults<M, I, S, E>(target: &mut M, sources: I) -> &mut M
where
    M: Mapping,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = E>,
    E: IntoEntry<M::Key, M::Value>,
{
    for source in sources {
        for entry in source {
            let (key, value) = entry.into_entry();
            if !target.has_key(&key) {
                target.set(key, value);
            }
        }
    }
    target
}

//! The iteration kernel.
//!
//! Every operator in this crate walks its input through the [`Collection`]
//! trait. A collection is either an ordered sequence (`[T]`, `[T; N]`,
//! `Vec<T>`, `VecDeque<T>`) keyed by `usize` indices, or a key/value mapping
//! (`HashMap<K, V, S>`, `BTreeMap<K, V>`) keyed by `&K`. The shape is chosen
//! at compile time by the implementation, never by a runtime check.
//!
//! - [`each`]: the single primitive that invokes a callback per element
//! - [`Truthy`]: truthiness used by predicates and the default iterator
//! - [`Property`]: named-property lookup used by `pluck` and `sort_by_property`
//!
//! # Examples
//!
//! ```rust
//! use underbar::collection::each;
//! use std::collections::BTreeMap;
//!
//! let mut seen = Vec::new();
//! each(&vec!["a", "b"], |value, index, _| seen.push((*value, index)));
//! assert_eq!(seen, vec![("a", 0), ("b", 1)]);
//!
//! let scores = BTreeMap::from([("ada".to_string(), 3), ("bob".to_string(), 5)]);
//! let mut total = 0;
//! each(&scores, |score, _name, _| total += score);
//! assert_eq!(total, 8);
//! ```

mod property;
mod truthy;

pub use property::Property;
pub use truthy::Truthy;

use std::collections::{BTreeMap, HashMap, VecDeque, btree_map, hash_map, vec_deque};
use std::hash::BuildHasher;
use std::iter::Enumerate;
use std::slice;

/// A collection whose elements can be visited together with their keys.
///
/// Ordered sequences report `usize` indices and visit elements in ascending
/// index order. Mappings report borrowed keys and visit only their own
/// entries, in the map's enumeration order.
///
/// # Type Parameters
///
/// * `Item` - The element (value) type
/// * `Key<'a>` - The key handed to callbacks alongside each element
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let values = [10, 20, 30];
/// let keyed: Vec<(usize, &i32)> = values.entries().collect();
/// assert_eq!(keyed, vec![(0, &10), (1, &20), (2, &30)]);
/// assert_eq!(values.size(), 3);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The key paired with each element.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Iterator over `(key, element)` pairs.
    type Entries<'a>: Iterator<Item = (Self::Key<'a>, &'a Self::Item)>
    where
        Self: 'a;

    /// Returns an iterator over the collection's own entries.
    fn entries(&self) -> Self::Entries<'_>;

    /// Returns the number of elements.
    fn size(&self) -> usize;

    /// Returns `true` if the collection has no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.size() == 0
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Entries<'a>
        = Enumerate<slice::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;
    type Entries<'a>
        = Enumerate<vec_deque::Iter<'a, T>>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter().enumerate()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S: BuildHasher> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Entries<'a>
        = hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;
    type Entries<'a>
        = btree_map::Iter<'a, K, V>
    where
        Self: 'a;

    #[inline]
    fn entries(&self) -> Self::Entries<'_> {
        self.iter()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Invokes `iterator(value, key, collection)` once per element.
///
/// Sequences are visited in ascending index order; mappings in their own
/// enumeration order. The callback's return value is ignored, and the
/// collection is never modified.
///
/// # Arguments
///
/// * `collection` - The collection to walk
/// * `iterator` - Called with the element, its key, and the collection itself
///
/// # Examples
///
/// ```rust
/// use underbar::collection::each;
///
/// let letters = ['x', 'y', 'z'];
/// let mut calls = Vec::new();
/// each(&letters, |letter, index, whole| calls.push((*letter, index, whole.len())));
/// assert_eq!(calls, vec![('x', 0, 3), ('y', 1, 3), ('z', 2, 3)]);
/// ```
pub fn each<'a, C, F>(collection: &'a C, mut iterator: F)
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item, C::Key<'a>, &'a C),
{
    for (key, value) in collection.entries() {
        iterator(value, key, collection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_on_empty_slice_never_calls() {
        let empty: &[i32] = &[];
        let mut calls = 0;
        each(empty, |_, _, _| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_vec_deque_keys_follow_logical_order() {
        let mut deque = VecDeque::from(vec![2, 3]);
        deque.push_front(1);
        let keys: Vec<usize> = deque.entries().map(|(index, _)| index).collect();
        let values: Vec<i32> = deque.entries().map(|(_, value)| *value).collect();
        assert_eq!(keys, vec![0, 1, 2]);
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_btree_map_visits_keys_in_order() {
        let map = BTreeMap::from([("b", 2), ("a", 1)]);
        let mut keys = Vec::new();
        each(&map, |_, key, _| keys.push(*key));
        assert_eq!(keys, vec!["a", "b"]);
    }
}

//! Named-property lookup.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

/// Elements that expose a value under a key.
///
/// This is the typed stand-in for reading `element[key]`: maps look the key
/// up, sequences index by position, and user types can expose their fields
/// by name. A missing property is `None`, never an error.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Property;
///
/// struct Person {
///     name: String,
///     age: u32,
/// }
///
/// impl Property<str> for Person {
///     type Value = u32;
///
///     fn property(&self, key: &str) -> Option<&u32> {
///         match key {
///             "age" => Some(&self.age),
///             _ => None,
///         }
///     }
/// }
///
/// let person = Person { name: "Ada".to_string(), age: 36 };
/// assert_eq!(person.property("age"), Some(&36));
/// assert_eq!(person.property("height"), None);
/// # let _ = person.name;
/// ```
pub trait Property<Q: ?Sized> {
    /// The type of the property value.
    type Value;

    /// Returns the value stored under `key`, if any.
    fn property(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Property<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Hash + Eq,
    Q: Hash + Eq + ?Sized,
    S: BuildHasher,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Property<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Value = V;

    #[inline]
    fn property(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<T> Property<usize> for [T] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T, const N: usize> Property<usize> for [T; N] {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

impl<T> Property<usize> for Vec<T> {
    type Value = T;

    #[inline]
    fn property(&self, key: &usize) -> Option<&T> {
        self.get(*key)
    }
}

//! Stable sorting by a computed key.

use crate::collection::{Collection, Property};
use crate::sequence::map;

/// Returns the elements sorted ascending by `key(element)`.
///
/// The key is computed once per element. The sort is stable, so elements
/// with equal keys keep their enumeration order. Keys must be totally
/// ordered; use `std::cmp::Reverse` for a descending sort.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::sort_by;
///
/// let words = ["banana", "fig", "apple", "kiwi"];
/// assert_eq!(sort_by(&words, |word| word.len()), vec!["fig", "kiwi", "apple", "banana"]);
/// ```
pub fn sort_by<'a, C, K, F>(collection: &'a C, mut key: F) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    K: Ord,
    F: FnMut(&'a C::Item) -> K,
{
    let mut keyed = map(collection, |element, _| (key(element), element));
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    keyed.into_iter().map(|(_, element)| element.clone()).collect()
}

/// Returns the elements sorted ascending by the property `name`.
///
/// Elements that lack the property are placed after all elements that have
/// it, in their original order.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::sort_by_property;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", 3), ("age", 60)]),
///     HashMap::from([("name", 1)]),
///     HashMap::from([("name", 2), ("age", 40)]),
/// ];
/// let sorted = sort_by_property(&people, &"age");
/// assert_eq!(sorted[0]["name"], 2);
/// assert_eq!(sorted[1]["name"], 3);
/// assert_eq!(sorted[2]["name"], 1);
/// ```
pub fn sort_by_property<'a, C, Q>(collection: &'a C, name: &Q) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone + Property<Q>,
    <C::Item as Property<Q>>::Value: Ord,
    Q: ?Sized,
{
    sort_by(collection, |element| {
        let value = element.property(name);
        (value.is_none(), value)
    })
}

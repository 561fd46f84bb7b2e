//! Derived sequence operators.
//!
//! Every operator here is expressed through the iteration kernel
//! ([`each`]) or through [`reduce`], so their element semantics stay
//! consistent with one another:
//!
//! - [`map`], [`filter`], [`reject`], [`pluck`], [`every`], [`reduce`] and
//!   [`reduce_first`] are built on [`each`]
//! - [`contains`] is a fold built on [`reduce`]
//! - [`some`] is the negation of [`every`] over the negated predicate
//! - [`uniq`] and [`index_of`] operate on ordered sequences
//!
//! All operators are eager: they return materialized `Vec`s and never
//! modify their input.
//!
//! # Examples
//!
//! ```rust
//! use underbar::sequence::{filter, map, reduce, reject};
//!
//! let numbers = vec![1, 2, 3, 4, 5];
//!
//! let doubled = map(&numbers, |number, _| number * 2);
//! assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
//!
//! let even = filter(&numbers, |number, _| number % 2 == 0);
//! let odd = reject(&numbers, |number, _| number % 2 == 0);
//! assert_eq!(even, vec![2, 4]);
//! assert_eq!(odd, vec![1, 3, 5]);
//!
//! let sum = reduce(&numbers, |total, number| total + number, 0);
//! assert_eq!(sum, 15);
//! ```

pub mod positional;

pub use positional::{first, first_n, last, last_n};

use std::hash::Hash;

use crate::collection::{Collection, Property, Truthy, each};
use crate::hash;

/// Returns the value unchanged.
///
/// This is the default iterator: [`every_truthy`] and [`some_truthy`] are
/// [`every`] and [`some`] with `identity` as the predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::{every, identity};
///
/// assert_eq!(identity(42), 42);
/// assert!(every(&[1, 2, 3], |number, _| identity(*number)));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Returns the results of applying `iterator(value, key)` to each element.
///
/// The result has the same length and order as the input's enumeration.
/// For mappings, the result holds the mapped values in enumeration order.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::map;
///
/// let labels = map(&["a", "b"], |letter, index| format!("{index}:{letter}"));
/// assert_eq!(labels, vec!["0:a", "1:b"]);
/// ```
pub fn map<'a, C, U, F>(collection: &'a C, mut iterator: F) -> Vec<U>
where
    C: Collection + ?Sized + 'a,
    F: FnMut(&'a C::Item, C::Key<'a>) -> U,
{
    let mut result = Vec::with_capacity(collection.size());
    each(collection, |value, key, _| result.push(iterator(value, key)));
    result
}

/// Returns the elements for which `predicate(value, key)` is truthy.
///
/// Elements keep their original relative order.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::filter;
///
/// let words = vec!["apple", "", "cherry"];
/// assert_eq!(filter(&words, |word, _| *word), vec!["apple", "cherry"]);
/// assert_eq!(filter(&words, |_, index| index > 0), vec!["", "cherry"]);
/// ```
pub fn filter<'a, C, B, F>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    B: Truthy,
    F: FnMut(&'a C::Item, C::Key<'a>) -> B,
{
    let mut result = Vec::new();
    each(collection, |value, key, _| {
        if predicate(value, key).is_truthy() {
            result.push(value.clone());
        }
    });
    result
}

/// Returns the elements for which `predicate(value, key)` is falsy.
///
/// This is [`filter`] with the negated predicate, so both operators agree on
/// every element.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |number, _| number % 2), vec![2, 4]);
/// ```
pub fn reject<'a, C, B, F>(collection: &'a C, mut predicate: F) -> Vec<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    B: Truthy,
    F: FnMut(&'a C::Item, C::Key<'a>) -> B,
{
    filter(collection, move |value, key| !predicate(value, key).is_truthy())
}

/// Returns the elements of `sequence` with duplicates removed.
///
/// Only the first occurrence of each distinct value is kept, and first
/// occurrences stay in their original order. Equality is `Eq`.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::uniq;
///
/// assert_eq!(uniq(&[1, 2, 1, 3, 2]), vec![1, 2, 3]);
/// ```
pub fn uniq<T>(sequence: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = hash::new_set(sequence.len());
    let mut result = Vec::new();
    each(sequence, |element, _, _| {
        if seen.insert(element) {
            result.push(element.clone());
        }
    });
    result
}

/// Extracts the property `key` from each element.
///
/// This is [`map`] specialised to [`Property`] lookup. Elements without the
/// property yield `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::pluck;
/// use std::collections::HashMap;
///
/// let people = vec![
///     HashMap::from([("name", "moe"), ("age", "30")]),
///     HashMap::from([("name", "curly")]),
/// ];
/// assert_eq!(pluck(&people, &"age"), vec![Some("30"), None]);
/// ```
pub fn pluck<'a, C, Q>(
    collection: &'a C,
    key: &Q,
) -> Vec<Option<<C::Item as Property<Q>>::Value>>
where
    C: Collection + ?Sized + 'a,
    C::Item: Property<Q>,
    <C::Item as Property<Q>>::Value: Clone,
    Q: ?Sized,
{
    map(collection, |element, _| element.property(key).cloned())
}

/// Folds the collection from left to right, starting from `seed`.
///
/// Each step computes `accumulator = iterator(accumulator, value)`; the final
/// accumulator is returned. An empty collection returns `seed` unchanged.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3], |total, number| total + number, 0), 6);
///
/// let sentence = reduce(&["a", "b"], |text, word| text + *word, String::new());
/// assert_eq!(sentence, "ab");
/// ```
pub fn reduce<'a, C, A, F>(collection: &'a C, mut iterator: F, seed: A) -> A
where
    C: Collection + ?Sized + 'a,
    F: FnMut(A, &'a C::Item) -> A,
{
    let mut accumulator = Some(seed);
    each(collection, |value, _, _| {
        accumulator = accumulator.take().map(|current| iterator(current, value));
    });
    accumulator.unwrap_or_else(|| unreachable!("the accumulator is restored after every step"))
}

/// Folds the collection using its first element as the seed.
///
/// The first element is cloned into the accumulator and iteration starts at
/// the second element, so `iterator` is never invoked for a single-element
/// collection. Returns `None` for an empty collection.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::reduce_first;
///
/// assert_eq!(reduce_first(&[5], |total, number| total + number * number), Some(5));
/// assert_eq!(reduce_first(&[1, 2, 3], |total, number| total + number), Some(6));
/// assert_eq!(reduce_first(&[] as &[i32], |total, number| total + number), None);
/// ```
pub fn reduce_first<'a, C, F>(collection: &'a C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized + 'a,
    C::Item: Clone,
    F: FnMut(C::Item, &'a C::Item) -> C::Item,
{
    let mut accumulator: Option<C::Item> = None;
    each(collection, |value, _, _| {
        accumulator = Some(match accumulator.take() {
            None => value.clone(),
            Some(current) => iterator(current, value),
        });
    });
    accumulator
}

/// Returns `true` if any element equals `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::contains;
/// use std::collections::HashMap;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &4));
///
/// let colors = HashMap::from([("sky", "blue")]);
/// assert!(contains(&colors, &"blue"));
/// ```
pub fn contains<C, T>(collection: &C, target: &T) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq<T>,
    T: ?Sized,
{
    reduce(
        collection,
        |was_found, element| was_found || element == target,
        false,
    )
}

/// Returns `true` if `predicate(value, key)` is truthy for every element.
///
/// An empty collection satisfies any predicate.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::every;
///
/// assert!(every(&[2, 4, 6], |number, _| number % 2 == 0));
/// assert!(!every(&[2, 3], |number, _| number % 2 == 0));
/// assert!(every(&[] as &[i32], |_, _| false));
/// ```
pub fn every<'a, C, B, F>(collection: &'a C, mut predicate: F) -> bool
where
    C: Collection + ?Sized + 'a,
    B: Truthy,
    F: FnMut(&'a C::Item, C::Key<'a>) -> B,
{
    let mut all_passed = true;
    each(collection, |value, key, _| {
        all_passed = all_passed && predicate(value, key).is_truthy();
    });
    all_passed
}

/// Returns `true` if every element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::every_truthy;
///
/// assert!(every_truthy(&[1, 2, 3]));
/// assert!(!every_truthy(&[1, 0, 3]));
/// ```
pub fn every_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    every(collection, |value, _| identity(value))
}

/// Returns `true` if `predicate(value, key)` is truthy for at least one
/// element.
///
/// Defined as "not every element fails the predicate", so [`some`] and
/// [`every`] always agree. An empty collection never satisfies it.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::some;
///
/// assert!(some(&[1, 2, 3], |number, _| *number > 2));
/// assert!(!some(&[] as &[i32], |_, _| true));
/// ```
pub fn some<'a, C, B, F>(collection: &'a C, mut predicate: F) -> bool
where
    C: Collection + ?Sized + 'a,
    B: Truthy,
    F: FnMut(&'a C::Item, C::Key<'a>) -> B,
{
    !every(collection, |value, key| !predicate(value, key).is_truthy())
}

/// Returns `true` if at least one element is itself truthy.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::some_truthy;
///
/// assert!(some_truthy(&["", "x"]));
/// assert!(!some_truthy(&[0, 0]));
/// ```
pub fn some_truthy<C>(collection: &C) -> bool
where
    C: Collection + ?Sized,
    C::Item: Truthy,
{
    some(collection, |value, _| identity(value))
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20], &30), None);
/// ```
pub fn index_of<T, U>(sequence: &[T], target: &U) -> Option<usize>
where
    T: PartialEq<U>,
    U: ?Sized,
{
    let mut result = None;
    each(sequence, |element, index, _| {
        if result.is_none() && element == target {
            result = Some(index);
        }
    });
    result
}

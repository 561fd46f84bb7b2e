//! Structural utilities over whole sequences.
//!
//! - [`flatten`] splices arbitrarily [`Nested`] sequences into one
//! - [`zip`] and [`zip_pair`] transpose sequences position by position
//! - [`intersection`] and [`difference`] combine sequences by value
//! - [`invoke`] and [`invoke_named`] call a method on every element
//! - [`sort_by`] and [`sort_by_property`] stably sort by a computed key
//! - [`shuffle`] permutes a copy uniformly at random
//!
//! Like the rest of the crate, every operator returns a new `Vec` and leaves
//! its inputs untouched.
//!
//! # Examples
//!
//! ```rust
//! use underbar::nested;
//! use underbar::structural::{difference, flatten, intersection, zip};
//!
//! assert_eq!(flatten(&nested![1, [2, [3]]]), vec![1, 2, 3]);
//! assert_eq!(intersection(&[1, 2, 3], &[&[2, 3, 4], &[3, 2]]), vec![2, 3]);
//! assert_eq!(difference(&[1, 2, 3, 4], &[&[2], &[4]]), vec![1, 3]);
//! assert_eq!(
//!     zip(&[1, 2], &[&[10]]),
//!     vec![vec![Some(1), Some(10)], vec![Some(2), None]]
//! );
//! ```

mod invoke;
mod nested;
mod shuffle;
mod sort;

pub use invoke::{Invocable, invoke, invoke_named};
pub use nested::{Branch, Nested, flatten};
pub use shuffle::{shuffle, shuffle_with};
pub use sort::{sort_by, sort_by_property};

use std::hash::Hash;
use std::iter;

use crate::hash::{self, FastHashSet};
use crate::sequence::{filter, reject};

/// Groups the elements of several sequences by position.
///
/// Returns one row per index up to the length of the longest input; row `i`
/// holds the `i`-th element of `first` followed by the `i`-th element of each
/// sequence in `rest`. Sequences shorter than the longest are padded with
/// `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::zip;
///
/// let rows = zip(&["moe", "larry"], &[&["30", "40"], &["true"]]);
/// assert_eq!(rows[0], vec![Some("moe"), Some("30"), Some("true")]);
/// assert_eq!(rows[1], vec![Some("larry"), Some("40"), None]);
/// ```
pub fn zip<T: Clone>(first: &[T], rest: &[&[T]]) -> Vec<Vec<Option<T>>> {
    let length = rest
        .iter()
        .map(|sequence| sequence.len())
        .fold(first.len(), usize::max);
    (0..length)
        .map(|index| {
            iter::once(first)
                .chain(rest.iter().copied())
                .map(|sequence| sequence.get(index).cloned())
                .collect()
        })
        .collect()
}

/// Groups two sequences of different element types by position.
///
/// The heterogeneous form of [`zip`]; the shorter side is padded with
/// `None`.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::zip_pair;
///
/// assert_eq!(
///     zip_pair(&["a", "b"], &[1]),
///     vec![(Some("a"), Some(1)), (Some("b"), None)]
/// );
/// ```
pub fn zip_pair<A: Clone, B: Clone>(left: &[A], right: &[B]) -> Vec<(Option<A>, Option<B>)> {
    (0..left.len().max(right.len()))
        .map(|index| (left.get(index).cloned(), right.get(index).cloned()))
        .collect()
}

/// Returns the distinct elements of `first` that appear in every sequence of
/// `rest`.
///
/// Order follows `first`; each value appears once, at its first occurrence.
/// With no other sequences this is `first` with duplicates removed.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::intersection;
///
/// assert_eq!(intersection(&[1, 2, 2, 3], &[&[2, 3]]), vec![2, 3]);
/// assert_eq!(intersection(&[1, 2], &[&[2], &[]]), Vec::<i32>::new());
/// ```
pub fn intersection<T>(first: &[T], rest: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let others: Vec<FastHashSet<&T>> = rest
        .iter()
        .map(|sequence| sequence.iter().collect())
        .collect();
    let mut emitted = hash::new_set(first.len());
    filter(first, |element, _| {
        others.iter().all(|other| other.contains(&element)) && emitted.insert(element)
    })
}

/// Returns the elements of `sequence` that appear in none of `others`.
///
/// Order and duplicates of `sequence` are preserved.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::difference;
///
/// assert_eq!(difference(&[1, 2, 3, 4, 1], &[&[2, 30], &[4]]), vec![1, 3, 1]);
/// ```
pub fn difference<T>(sequence: &[T], others: &[&[T]]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let excluded: FastHashSet<&T> = others.iter().flat_map(|other| other.iter()).collect();
    reject(sequence, |element, _| excluded.contains(&element))
}

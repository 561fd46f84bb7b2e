//! Arbitrarily nested sequences and their flattening.
//!
//! A [`Nested<T>`] is either a scalar [`Leaf`](Nested::Leaf) or a
//! [`Branch`] holding further nested values. Both [`flatten`] and
//! [`Nested::into_flat`] walk the structure with an explicit stack of
//! sub-sequence iterators instead of recursion, and dropping a [`Branch`]
//! dismantles it iteratively, so nesting depth is bounded only by memory.

use std::ops::Deref;
use std::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

/// Depth up to which the flattening stack stays inline.
const INLINE_DEPTH: usize = 16;

/// A value that is either a scalar or a sequence of further nested values.
///
/// With the `serde` feature, a `Nested<T>` serializes as the bare JSON-style
/// structure: `[1, [2, [3]]]`.
///
/// Construction, [`flatten`], [`into_flat`](Nested::into_flat),
/// [`depth`](Nested::depth) and dropping never recurse. The derived `Clone`,
/// `PartialEq`, `Hash` and `Debug` impls do.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::structural::{Nested, flatten};
///
/// let values: Vec<Nested<i32>> = nested![1, [2, [3, [4]], 5]];
/// assert_eq!(flatten(&values), vec![1, 2, 3, 4, 5]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(untagged))]
pub enum Nested<T> {
    /// A sub-sequence.
    Branch(Branch<T>),
    /// A scalar element.
    Leaf(T),
}

impl<T> Nested<T> {
    /// Creates a scalar element.
    #[inline]
    #[must_use]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates a sub-sequence from its children.
    #[must_use]
    pub fn branch<I>(children: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        Self::Branch(children.into_iter().collect())
    }

    /// Returns `true` for a scalar element.
    #[inline]
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the nesting depth: 0 for a leaf, 1 for a branch of leaves.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::structural::Nested;
    ///
    /// assert_eq!(Nested::leaf(1).depth(), 0);
    /// let tree = Nested::branch([Nested::leaf(1), Nested::branch([Nested::leaf(2)])]);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut pending: Vec<(&Self, usize)> = vec![(self, 0)];
        while let Some((node, depth)) = pending.pop() {
            if let Self::Branch(branch) = node {
                deepest = deepest.max(depth + 1);
                pending.extend(branch.iter().map(|child| (child, depth + 1)));
            }
        }
        deepest
    }

    /// Consumes the value and returns its scalars in left-to-right order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::structural::Nested;
    ///
    /// let tree = Nested::branch([
    ///     Nested::leaf("a".to_string()),
    ///     Nested::branch([Nested::leaf("b".to_string())]),
    /// ]);
    /// assert_eq!(tree.into_flat(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn into_flat(self) -> Vec<T> {
        let mut result = Vec::new();
        let mut stack: SmallVec<[std::vec::IntoIter<Self>; INLINE_DEPTH]> = SmallVec::new();
        match self {
            Self::Leaf(value) => result.push(value),
            Self::Branch(branch) => stack.push(branch.into_vec().into_iter()),
        }
        while let Some(top) = stack.last_mut() {
            match top.next() {
                Some(Self::Leaf(value)) => result.push(value),
                Some(Self::Branch(branch)) => stack.push(branch.into_vec().into_iter()),
                None => {
                    stack.pop();
                }
            }
        }
        result
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Leaf(value)
    }
}

/// The children of a [`Nested::Branch`].
///
/// Dereferences to a slice of children. Dropping a `Branch` moves every
/// descendant onto a work list first, so even a million levels of nesting
/// drop without deep recursion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(transparent))]
pub struct Branch<T>(Vec<Nested<T>>);

impl<T> Branch<T> {
    /// Creates a branch from its children.
    #[inline]
    #[must_use]
    pub const fn new(children: Vec<Nested<T>>) -> Self {
        Self(children)
    }

    /// Returns the children as a slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[Nested<T>] {
        self.0.as_slice()
    }

    /// Consumes the branch and returns its children.
    #[inline]
    #[must_use]
    pub fn into_vec(mut self) -> Vec<Nested<T>> {
        std::mem::take(&mut self.0)
    }
}

impl<T> Deref for Branch<T> {
    type Target = [Nested<T>];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> From<Vec<Nested<T>>> for Branch<T> {
    #[inline]
    fn from(children: Vec<Nested<T>>) -> Self {
        Self(children)
    }
}

impl<T> FromIterator<Nested<T>> for Branch<T> {
    fn from_iter<I: IntoIterator<Item = Nested<T>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T> Drop for Branch<T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.0);
        while let Some(node) = pending.pop() {
            if let Nested::Branch(mut branch) = node {
                pending.append(&mut branch.0);
            }
        }
    }
}

/// Flattens a nested sequence into one flat sequence.
///
/// Scalars keep their left-to-right order; sub-sequences of any depth are
/// spliced in place. The input is not modified.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::structural::flatten;
///
/// assert_eq!(flatten(&nested![[1, 2], [], [[3]], 4]), vec![1, 2, 3, 4]);
/// ```
pub fn flatten<T: Clone>(nested: &[Nested<T>]) -> Vec<T> {
    let mut result = Vec::with_capacity(nested.len());
    let mut stack: SmallVec<[slice::Iter<'_, Nested<T>>; INLINE_DEPTH]> = smallvec![nested.iter()];
    while let Some(top) = stack.last_mut() {
        match top.next() {
            Some(Nested::Leaf(value)) => result.push(value.clone()),
            Some(Nested::Branch(branch)) => stack.push(branch.iter()),
            None => {
                stack.pop();
            }
        }
    }
    result
}

/// Builds a `Vec<Nested<_>>` from bracketed literal syntax.
///
/// Each element is either a bracketed list, which becomes a
/// [`Branch`](crate::structural::Branch), or a single token tree, which
/// becomes a [`Leaf`](crate::structural::Nested::Leaf). Wrap multi-token
/// expressions such as `-1` or `a + b` in parentheses.
///
/// # Examples
///
/// ```rust
/// use underbar::nested;
/// use underbar::structural::Nested;
///
/// let values: Vec<Nested<i32>> = nested![1, [2, [(-3)]]];
/// assert_eq!(
///     values,
///     vec![
///         Nested::leaf(1),
///         Nested::branch([Nested::leaf(2), Nested::branch([Nested::leaf(-3)])]),
///     ]
/// );
/// ```
#[macro_export]
macro_rules! nested {
    (@node [ $($inner:tt),* $(,)? ]) => {
        $crate::structural::Nested::Branch($crate::structural::Branch::new(
            ::std::vec![$($crate::nested!(@node $inner)),*]
        ))
    };
    (@node $leaf:expr) => {
        $crate::structural::Nested::Leaf($leaf)
    };
    ($($node:tt),* $(,)?) => {
        ::std::vec![$($crate::nested!(@node $node)),*]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deep_chain(depth: usize) -> Nested<usize> {
        let mut node = Nested::leaf(depth);
        for level in (0..depth).rev() {
            node = Nested::branch([Nested::leaf(level), node]);
        }
        node
    }

    #[test]
    fn test_flatten_empty_input() {
        let empty: Vec<Nested<i32>> = Vec::new();
        assert!(flatten(&empty).is_empty());
    }

    #[test]
    fn test_flatten_does_not_modify_input() {
        let values: Vec<Nested<i32>> = crate::nested![1, [2]];
        let before = values.clone();
        let _ = flatten(&values);
        assert_eq!(values, before);
    }

    #[test]
    fn test_deep_nesting_flattens_and_drops() {
        let depth = 200_000;
        let tree = deep_chain(depth);
        let flat = flatten(std::slice::from_ref(&tree));
        assert_eq!(flat.len(), depth + 1);
        assert_eq!(flat.first(), Some(&0));
        assert_eq!(flat.last(), Some(&depth));
        drop(tree);
    }

    #[test]
    fn test_deep_nesting_into_flat() {
        let depth = 200_000;
        let flat = deep_chain(depth).into_flat();
        assert_eq!(flat, (0..=depth).collect::<Vec<_>>());
    }

    #[test]
    fn test_depth_of_deep_chain() {
        assert_eq!(deep_chain(1_000).depth(), 1_000);
    }
}

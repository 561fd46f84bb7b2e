//! Positional accessors.
//!
//! Slicing helpers that read from the front or the back of an ordered
//! sequence. They do not go through the iteration kernel.

/// Returns the first element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::first;
///
/// assert_eq!(first(&[1, 2, 3]), Some(&1));
/// assert_eq!(first::<i32>(&[]), None);
/// ```
#[inline]
pub fn first<T>(sequence: &[T]) -> Option<&T> {
    sequence.first()
}

/// Returns the first `count` elements.
///
/// Asking for more elements than exist returns the whole sequence; a count
/// of zero returns an empty `Vec`.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::first_n;
///
/// assert_eq!(first_n(&[1, 2, 3], 2), vec![1, 2]);
/// assert_eq!(first_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// assert!(first_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn first_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    sequence[..count.min(sequence.len())].to_vec()
}

/// Returns the last element, or `None` for an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::last;
///
/// assert_eq!(last(&[1, 2, 3]), Some(&3));
/// assert_eq!(last::<i32>(&[]), None);
/// ```
#[inline]
pub fn last<T>(sequence: &[T]) -> Option<&T> {
    sequence.last()
}

/// Returns the last `count` elements, in their original order.
///
/// A count of zero always yields an empty `Vec`; asking for more elements
/// than exist returns the whole sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::sequence::last_n;
///
/// assert_eq!(last_n(&[1, 2, 3], 2), vec![2, 3]);
/// assert_eq!(last_n(&[1, 2, 3], 5), vec![1, 2, 3]);
/// assert!(last_n(&[1, 2, 3], 0).is_empty());
/// ```
pub fn last_n<T: Clone>(sequence: &[T], count: usize) -> Vec<T> {
    if count == 0 {
        return Vec::new();
    }
    sequence[sequence.len().saturating_sub(count)..].to_vec()
}

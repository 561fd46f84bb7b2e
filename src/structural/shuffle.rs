//! Uniform random permutation.

use rand::Rng;

/// Returns a uniformly random permutation of `sequence`, drawn from the
/// thread-local generator.
///
/// The input is not modified.
///
/// # Examples
///
/// ```rust
/// use underbar::structural::shuffle;
///
/// let deck = [1, 2, 3, 4, 5];
/// let mut shuffled = shuffle(&deck);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, deck);
/// ```
pub fn shuffle<T: Clone>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::rng())
}

/// Returns a uniformly random permutation of `sequence`, drawn from
/// `random`.
///
/// Uses the Fisher-Yates shuffle: walking down from the last position, each
/// position is swapped with a uniformly chosen position at or before it, so
/// all `n!` orderings are equally likely. Passing a seeded generator makes
/// the result reproducible.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::structural::shuffle_with;
///
/// let first = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// let second = shuffle_with(&[1, 2, 3, 4], &mut StdRng::seed_from_u64(7));
/// assert_eq!(first, second);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], random: &mut R) -> Vec<T>
where
    T: Clone,
    R: Rng + ?Sized,
{
    let mut shuffled = sequence.to_vec();
    for index in (1..shuffled.len()).rev() {
        let target = random.random_range(0..=index);
        shuffled.swap(index, target);
    }
    shuffled
}

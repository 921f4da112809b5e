//! In-place and copy-producing shuffles over randomly indexable sequences.

use crate::rng::{CollectionRng, RandomSource, ThreadLocalRng};

/// Shuffles `items` in place using the calling thread's generator.
///
/// Repeated calls from different threads never contend on a shared
/// generator and need no synchronisation.
///
/// # Examples
///
/// ```rust
/// use collection_core::shuffle::shuffle_in_place;
///
/// let mut items = vec![3, 1, 2];
/// shuffle_in_place(&mut items);
/// items.sort();
/// assert_eq!(items, vec![1, 2, 3]);
/// ```
pub fn shuffle_in_place<T>(items: &mut [T]) {
    shuffle_in_place_with(items, &mut ThreadLocalRng::new());
}

/// Shuffles `items` in place with a fresh generator built from `seed`.
///
/// Two sequences with identical contents shuffled with the same seed end
/// up in identical order.
///
/// # Examples
///
/// ```rust
/// use collection_core::shuffle::shuffle_in_place_seeded;
///
/// let mut a = vec!['a', 'b', 'c', 'd'];
/// let mut b = a.clone();
/// shuffle_in_place_seeded(&mut a, 666);
/// shuffle_in_place_seeded(&mut b, 666);
/// assert_eq!(a, b);
/// ```
pub fn shuffle_in_place_seeded<T>(items: &mut [T], seed: u64) {
    shuffle_in_place_with(items, &mut CollectionRng::from_seed(seed));
}

/// Shuffles `items` in place, drawing from `rng`.
///
/// The source advances, so shuffling repeatedly with one source produces
/// a different permutation each time.
pub fn shuffle_in_place_with<T, R>(items: &mut [T], rng: &mut R)
where
    R: RandomSource + ?Sized,
{
    let n = items.len();
    if n <= 1 {
        return;
    }

    for i in 0..n - 1 {
        let j = rng.next_in_range(i, n);
        items.swap(i, j);
    }
}

/// Returns a shuffled copy of `items` using the calling thread's generator.
///
/// The input is left untouched.
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place(&mut copy);
    copy
}

/// Returns a copy of `items` shuffled with a generator built from `seed`.
pub fn shuffled_seeded<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle_in_place_seeded(&mut copy, seed);
    copy
}

/// Returns a copy of `items` shuffled with draws from `rng`.
pub fn shuffled_with<T, R>(items: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone,
    R: RandomSource + ?Sized,
{
    let mut copy = items.to_vec();
    shuffle_in_place_with(&mut copy, rng);
    copy
}

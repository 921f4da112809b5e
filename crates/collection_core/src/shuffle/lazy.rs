//! Lazily yielded shuffles over forward-only sequences.
//!
//! Fisher–Yates needs random access, so the whole source is buffered on the
//! first pull. After that one element is produced per call to `next`, in the
//! same order the in-place shuffle would leave them.

use std::iter::FusedIterator;

use tracing::trace;

use crate::rng::{BorrowedSource, CollectionRng, RandomSource, ThreadLocalRng};

/// Lazily shuffled view of an iterator.
///
/// Created by [`shuffle_iter`], [`shuffle_iter_seeded`] and
/// [`shuffle_iter_with`]. Nothing is read from the source, and nothing is
/// drawn from the random source, until the first call to `next`.
///
/// The iterator is single-pass: it is fused once drained and cannot be
/// cloned or rewound. To obtain another permutation, call the operation
/// again with a fresh source.
pub struct Shuffled<I: Iterator, R> {
    state: State<I>,
    rng: R,
}

enum State<I: Iterator> {
    /// Source not yet read.
    Pending(I),
    /// Source buffered. `reversed[k]` holds logical position `total - 1 - k`,
    /// so the next position to fill is always the last element.
    Draining { reversed: Vec<I::Item>, total: usize },
}

impl<I: Iterator> State<I> {
    fn materialise(&mut self) {
        if let State::Pending(source) = self {
            let mut reversed: Vec<I::Item> = source.collect();
            reversed.reverse();
            let total = reversed.len();
            trace!(len = total, "buffered source for lazy shuffle");
            *self = State::Draining { reversed, total };
        }
    }
}

impl<I: Iterator, R: RandomSource> Shuffled<I, R> {
    fn new(source: I, rng: R) -> Self {
        Self {
            state: State::Pending(source),
            rng,
        }
    }
}

impl<I: Iterator, R: RandomSource> Iterator for Shuffled<I, R> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.materialise();
        let State::Draining { reversed, total } = &mut self.state else {
            return None;
        };

        match reversed.len() {
            0 => None,
            1 => reversed.pop(),
            remaining => {
                let position = *total - remaining;
                let target = self.rng.next_in_range(position, *total);
                // Removing the target moves the element at `position` into its
                // slot, which is exactly the Fisher–Yates swap.
                Some(reversed.swap_remove(*total - 1 - target))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.state {
            State::Pending(source) => source.size_hint(),
            State::Draining { reversed, .. } => (reversed.len(), Some(reversed.len())),
        }
    }
}

impl<I: Iterator, R: RandomSource> FusedIterator for Shuffled<I, R> {}

impl<I: ExactSizeIterator, R: RandomSource> ExactSizeIterator for Shuffled<I, R> {}

/// Lazily shuffles `source` using the calling thread's generator.
///
/// # Examples
///
/// ```rust
/// use collection_core::shuffle::shuffle_iter;
///
/// let mut values: Vec<u32> = shuffle_iter((0..10).map(|x| x * x)).collect();
/// values.sort();
/// assert_eq!(values, vec![0, 1, 4, 9, 16, 25, 36, 49, 64, 81]);
/// ```
pub fn shuffle_iter<I: IntoIterator>(source: I) -> Shuffled<I::IntoIter, ThreadLocalRng> {
    Shuffled::new(source.into_iter(), ThreadLocalRng::new())
}

/// Lazily shuffles `source` with a generator built from `seed`.
///
/// The order produced matches [`shuffle_in_place_seeded`](super::shuffle_in_place_seeded)
/// on the same contents and seed.
pub fn shuffle_iter_seeded<I: IntoIterator>(
    source: I,
    seed: u64,
) -> Shuffled<I::IntoIter, CollectionRng> {
    Shuffled::new(source.into_iter(), CollectionRng::from_seed(seed))
}

/// Lazily shuffles `source`, drawing from the borrowed `rng`.
///
/// The caller keeps `rng` once the shuffle is dropped; its state advances as
/// elements are pulled, so consecutive shuffles with one source differ. Any
/// [`RandomSource`] works, including hand-written ones that are not `rand`
/// generators.
///
/// # Examples
///
/// ```rust
/// use collection_core::rng::CollectionRng;
/// use collection_core::shuffle::shuffle_iter_with;
///
/// let mut rng = CollectionRng::from_seed(7);
/// let first: Vec<char> = shuffle_iter_with("abcdef".chars(), &mut rng).collect();
/// let second: Vec<char> = shuffle_iter_with("abcdef".chars(), &mut rng).collect();
/// assert_eq!(first.len(), second.len());
/// ```
pub fn shuffle_iter_with<'a, I, R>(
    source: I,
    rng: &'a mut R,
) -> Shuffled<I::IntoIter, BorrowedSource<'a, R>>
where
    I: IntoIterator,
    R: RandomSource + ?Sized,
{
    Shuffled::new(source.into_iter(), BorrowedSource::new(rng))
}

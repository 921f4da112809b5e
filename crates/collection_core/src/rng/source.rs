//! Bounded uniform integer generation.

use rand::{Rng, RngCore};

/// A generator of uniformly distributed indices in a half-open range.
///
/// Every [`rand::RngCore`] implements this trait, so `StdRng`, `ThreadRng`,
/// [`CollectionRng`](super::CollectionRng) and `&mut` references to them can
/// all be handed to the shuffle operations. Implement it directly to script
/// the draws of a shuffle; [`BorrowedSource`] lends such a source to a lazy
/// shuffle without giving it up.
///
/// # Examples
///
/// ```rust
/// use collection_core::rng::RandomSource;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let value = rng.next_in_range(0, 4);
/// assert!(value < 4);
/// ```
pub trait RandomSource {
    /// Returns a uniformly distributed value in `[low, high)`.
    ///
    /// Callers guarantee `low < high`.
    fn next_in_range(&mut self, low: usize, high: usize) -> usize;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.gen_range(low..high)
    }
}

/// Mutable borrow of a [`RandomSource`] that is itself a source.
///
/// Lazy shuffles hold their source for as long as they are pulled, so a
/// caller that wants the source back afterwards lends it through this
/// wrapper. Draws advance the borrowed source.
#[derive(Debug)]
pub struct BorrowedSource<'a, R: ?Sized>(&'a mut R);

impl<'a, R: RandomSource + ?Sized> BorrowedSource<'a, R> {
    /// Borrows `source` for the lifetime of the wrapper.
    pub fn new(source: &'a mut R) -> Self {
        Self(source)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for BorrowedSource<'_, R> {
    #[inline]
    fn next_in_range(&mut self, low: usize, high: usize) -> usize {
        self.0.next_in_range(low, high)
    }
}

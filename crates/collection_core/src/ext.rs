//! Extension traits giving method syntax to the free functions.
//!
//! ```rust
//! use collection_core::ext::{IteratorExt, SliceExt};
//!
//! let mut deck: Vec<u8> = (1..=52).collect();
//! deck.shuffle_in_place_seeded(666);
//!
//! let hands = deck.split_chunks(13).unwrap();
//! assert_eq!(hands.len(), 4);
//!
//! let dealt: Vec<u8> = hands.into_iter().flatten().shuffle_iter_seeded(7).collect();
//! assert_eq!(dealt.len(), 52);
//! ```

use std::hash::Hash;

use crate::ops;
use crate::rng::{BorrowedSource, CollectionRng, RandomSource, ThreadLocalRng};
use crate::shuffle::{self, Shuffled};
use crate::split;
use crate::types::Result;

/// Methods over randomly indexable sequences.
pub trait SliceExt<T> {
    /// See [`shuffle::shuffle_in_place`].
    fn shuffle_in_place(&mut self);

    /// See [`shuffle::shuffle_in_place_seeded`].
    fn shuffle_in_place_seeded(&mut self, seed: u64);

    /// See [`shuffle::shuffle_in_place_with`].
    fn shuffle_in_place_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R);

    /// See [`shuffle::shuffled`].
    fn shuffled(&self) -> Vec<T>
    where
        T: Clone;

    /// See [`shuffle::shuffled_seeded`].
    fn shuffled_seeded(&self, seed: u64) -> Vec<T>
    where
        T: Clone;

    /// See [`shuffle::shuffled_with`].
    fn shuffled_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone;

    /// See [`split::split`].
    fn split_chunks(&self, group_size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone;

    /// See [`ops::min_index`].
    fn min_index(&self) -> Option<usize>
    where
        T: PartialOrd;

    /// See [`ops::max_index`].
    fn max_index(&self) -> Option<usize>
    where
        T: PartialOrd;
}

impl<T> SliceExt<T> for [T] {
    fn shuffle_in_place(&mut self) {
        shuffle::shuffle_in_place(self)
    }

    fn shuffle_in_place_seeded(&mut self, seed: u64) {
        shuffle::shuffle_in_place_seeded(self, seed)
    }

    fn shuffle_in_place_with<R: RandomSource + ?Sized>(&mut self, rng: &mut R) {
        shuffle::shuffle_in_place_with(self, rng)
    }

    fn shuffled(&self) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled(self)
    }

    fn shuffled_seeded(&self, seed: u64) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled_seeded(self, seed)
    }

    fn shuffled_with<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled_with(self, rng)
    }

    fn split_chunks(&self, group_size: usize) -> Result<Vec<Vec<T>>>
    where
        T: Clone,
    {
        split::split(self, group_size)
    }

    fn min_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        ops::min_index(self)
    }

    fn max_index(&self) -> Option<usize>
    where
        T: PartialOrd,
    {
        ops::max_index(self)
    }
}

/// Methods over forward-only sequences.
pub trait IteratorExt: Iterator + Sized {
    /// See [`shuffle::shuffle_iter`].
    fn shuffle_iter(self) -> Shuffled<Self, ThreadLocalRng> {
        shuffle::shuffle_iter(self)
    }

    /// See [`shuffle::shuffle_iter_seeded`].
    fn shuffle_iter_seeded(self, seed: u64) -> Shuffled<Self, CollectionRng> {
        shuffle::shuffle_iter_seeded(self, seed)
    }

    /// See [`shuffle::shuffle_iter_with`].
    fn shuffle_iter_with<'a, R: RandomSource + ?Sized>(
        self,
        rng: &'a mut R,
    ) -> Shuffled<Self, BorrowedSource<'a, R>> {
        shuffle::shuffle_iter_with(self, rng)
    }

    /// See [`split::split_iter`].
    fn split_chunks(self, group_size: usize) -> Result<Vec<Vec<Self::Item>>> {
        split::split_iter(self, group_size)
    }

    /// See [`ops::contains_all`].
    fn contains_all<B>(self, subset: B) -> bool
    where
        Self::Item: Eq + Hash,
        B: IntoIterator<Item = Self::Item>,
    {
        ops::contains_all(self, subset)
    }
}

impl<I: Iterator> IteratorExt for I {}

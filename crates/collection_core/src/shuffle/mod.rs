//! # Shuffle Engine
//!
//! Uniform random permutations using the Fisher–Yates algorithm in
//! Durstenfeld's in-place form:
//!
//! ```text
//! for i in 0 .. n-1:
//!     j = random.next_in_range(i, n)
//!     swap buffer[i], buffer[j]
//! ```
//!
//! Every one of the `n!` permutations is equally likely when the source is
//! unbiased. The last position is never drawn for since its only candidate
//! is itself, and inputs of length 0 or 1 are returned unchanged without
//! consuming any randomness.
//!
//! ## Entry Points
//!
//! | Randomness | In place | Copy | Lazy |
//! |---|---|---|---|
//! | per-thread fallback | [`shuffle_in_place`] | [`shuffled`] | [`shuffle_iter`] |
//! | integer seed | [`shuffle_in_place_seeded`] | [`shuffled_seeded`] | [`shuffle_iter_seeded`] |
//! | caller-supplied source | [`shuffle_in_place_with`] | [`shuffled_with`] | [`shuffle_iter_with`] |
//!
//! All three forms consume the source identically, so the same seed yields
//! the same order whichever form is used.
//!
//! ## Usage Example
//!
//! ```rust
//! use collection_core::shuffle::{shuffle_in_place_seeded, shuffle_iter_seeded};
//!
//! let mut items = vec![1, 2, 3, 4, 5, 6];
//! shuffle_in_place_seeded(&mut items, 666);
//!
//! let lazy: Vec<i32> = shuffle_iter_seeded(1..=6, 666).collect();
//! assert_eq!(items, lazy);
//! ```

mod in_place;
mod lazy;

pub use in_place::{
    shuffle_in_place, shuffle_in_place_seeded, shuffle_in_place_with, shuffled, shuffled_seeded,
    shuffled_with,
};
pub use lazy::{shuffle_iter, shuffle_iter_seeded, shuffle_iter_with, Shuffled};

//! # Random Sources for Shuffling
//!
//! This module provides the randomness consumed by the shuffle engine.
//!
//! ## Module Structure
//!
//! - `source`: The [`RandomSource`] trait, implemented for every `rand::RngCore`,
//!   and [`BorrowedSource`] for lending any source by mutable reference
//! - `prng`: [`CollectionRng`], a seedable generator that remembers its seed
//! - `thread_local`: [`ThreadLocalRng`], the per-thread fallback used when
//!   the caller supplies no source
//!
//! ## Usage Example
//!
//! ```rust
//! use collection_core::rng::{CollectionRng, RandomSource};
//!
//! let mut rng = CollectionRng::from_seed(666);
//! let j = rng.next_in_range(3, 10);
//! assert!((3..10).contains(&j));
//! ```
//!
//! ## Ownership
//!
//! Caller-supplied sources are borrowed mutably and only their internal state
//! advances. Sources created from a seed are owned by the call that created
//! them and dropped when it returns.

mod prng;
mod source;
mod thread_local;

pub use prng::CollectionRng;
pub use source::{BorrowedSource, RandomSource};
pub use thread_local::ThreadLocalRng;

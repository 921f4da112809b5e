//! # collection_core: Generic Helpers for In-Memory Sequences
//!
//! ## Overview
//!
//! collection_core provides two facilities with real correctness contracts,
//! plus a handful of small helpers:
//! - Shuffle engine (`shuffle`): unbiased Fisher–Yates permutations, in place,
//!   as a copy, or lazily over any iterator
//! - Chunker (`split`): contiguous fixed-size groups, last group possibly shorter
//! - Random sources (`rng`): seeded generators and a per-thread fallback
//! - Helpers (`ops`): null-coalescing, extrema, subset tests, grouping
//! - Extension traits (`ext`): method syntax over slices and iterators
//! - Error types: `CollectionError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use collection_core::shuffle::shuffle_in_place_seeded;
//! use collection_core::split::split;
//!
//! let mut items: Vec<u32> = (0..33).collect();
//! shuffle_in_place_seeded(&mut items, 666);
//!
//! let chunks = split(&items, 10).unwrap();
//! let lengths: Vec<usize> = chunks.iter().map(Vec::len).collect();
//! assert_eq!(lengths, vec![10, 10, 10, 3]);
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous. Shuffles without an explicit source draw
//! from a generator owned by the calling thread (see [`rng::ThreadLocalRng`]);
//! sources and sequences passed in by the caller are never synchronised.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod ext;
pub mod ops;
pub mod rng;
pub mod shuffle;
pub mod split;
pub mod types;

pub use types::{CollectionError, Result};

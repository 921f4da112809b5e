//! # Chunker
//!
//! Partitions a finite sequence into contiguous, non-overlapping chunks of a
//! fixed maximum size.
//!
//! For an input of length `n` and a group size `g`:
//! - exactly `ceil(n / g)` chunks are produced
//! - every chunk but the last holds exactly `g` elements
//! - the last chunk holds between 1 and `g` elements
//! - an empty input produces no chunks at all
//! - concatenating the chunks in order reproduces the input
//!
//! A group size of zero is rejected before any element is read.
//!
//! ## Usage Example
//!
//! ```rust
//! use collection_core::split::split;
//!
//! let chunks = split(&[1, 2, 3, 4, 5], 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

use tracing::debug;

use crate::types::{CollectionError, Result};

/// Splits `items` into chunks of `group_size` elements, cloning them.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `group_size` is zero.
pub fn split<T: Clone>(items: &[T], group_size: usize) -> Result<Vec<Vec<T>>> {
    validate_group_size(group_size)?;

    let chunks: Vec<Vec<T>> = items.chunks(group_size).map(<[T]>::to_vec).collect();
    debug!(
        len = items.len(),
        group_size,
        chunks = chunks.len(),
        "split sequence"
    );
    Ok(chunks)
}

/// Splits any iterator into chunks of `group_size` elements, moving them.
///
/// Works for forward-only sources and for element types that are not
/// `Clone`.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `group_size` is zero.
/// The source is not touched in that case.
///
/// # Examples
///
/// ```rust
/// use collection_core::split::split_iter;
///
/// let chunks = split_iter("abcdefg".chars(), 3).unwrap();
/// assert_eq!(chunks.len(), 3);
/// assert_eq!(chunks[2], vec!['g']);
/// ```
pub fn split_iter<I: IntoIterator>(source: I, group_size: usize) -> Result<Vec<Vec<I::Item>>> {
    validate_group_size(group_size)?;

    let mut chunks = Vec::new();
    let mut current = Vec::with_capacity(group_size);
    for item in source {
        current.push(item);
        if current.len() == group_size {
            chunks.push(std::mem::replace(
                &mut current,
                Vec::with_capacity(group_size),
            ));
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    debug!(group_size, chunks = chunks.len(), "split iterator");
    Ok(chunks)
}

/// Converts a signed group size request into a usable group size.
///
/// # Errors
///
/// Returns [`CollectionError::InvalidArgument`] when `raw` is zero or
/// negative, or does not fit in `usize`.
///
/// # Examples
///
/// ```rust
/// use collection_core::split::group_size_from_signed;
///
/// assert_eq!(group_size_from_signed(10).unwrap(), 10);
/// assert!(group_size_from_signed(0).is_err());
/// assert!(group_size_from_signed(-5).is_err());
/// ```
pub fn group_size_from_signed(raw: i64) -> Result<usize> {
    if raw <= 0 {
        return Err(invalid_group_size(raw));
    }
    usize::try_from(raw).map_err(|_| invalid_group_size(raw))
}

fn validate_group_size(group_size: usize) -> Result<()> {
    if group_size == 0 {
        return Err(invalid_group_size(0));
    }
    Ok(())
}

fn invalid_group_size(raw: impl std::fmt::Display) -> CollectionError {
    CollectionError::InvalidArgument(format!(
        "group size must be strictly positive, got {}",
        raw
    ))
}

//! Error types for collection operations.
//!
//! Only argument validation can fail. Emptiness is never an error: it is
//! reported through `None` or an empty collection instead.

use thiserror::Error;

/// Errors raised by collection operations.
///
/// Validation always happens eagerly, at the call that received the bad
/// argument. Lazily produced sequences never fail while being consumed.
///
/// # Examples
/// ```
/// use collection_core::types::CollectionError;
///
/// let err = CollectionError::InvalidArgument("group size must be positive".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: group size must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollectionError {
    /// A required argument was out of its accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result alias for fallible collection operations.
pub type Result<T> = std::result::Result<T, CollectionError>;

//! Core types shared across the crate.
//!
//! - [`CollectionError`]: the single error kind raised by validating operations
//! - [`Result`]: crate-wide result alias

pub mod error;

pub use error::{CollectionError, Result};

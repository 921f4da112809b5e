//! Error types for the CLI.

use collection_core::CollectionError;
use thiserror::Error;

/// CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Input token could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON rendering failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Rejected by the collection library.
    #[error(transparent)]
    Collection(#[from] CollectionError),
}

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

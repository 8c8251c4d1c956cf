//! Error types and handling for the Balti search core

use thiserror::Error;

/// Result type alias for search core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the search core
///
/// Scoring, filtering and caching never fail; only loading settings and
/// dictionary data from disk can.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}

// src/error.rs

//! Unified error handling for the insights application.

use thiserror::Error;

/// Result type alias for insights operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A resource could not be fetched from the API
    #[error("Cannot get {resource} from API")]
    Fetch { resource: String },

    /// Fetched records are structurally incomplete (wrong or malformed endpoint)
    #[error("{0}")]
    Integrity(String),

    /// An analysis function was called with a missing collection
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl AppError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a fetch error for a named resource.
    pub fn fetch(resource: impl Into<String>) -> Self {
        Self::Fetch {
            resource: resource.into(),
        }
    }

    /// Create a data integrity error.
    pub fn integrity(message: impl Into<String>) -> Self {
        Self::Integrity(message.into())
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

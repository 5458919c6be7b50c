//! Error handling for keyed signatures
//!
//! Hashing itself cannot fail. These errors cover parsing algorithm names,
//! loading configuration and the async worker plumbing.

use thiserror::Error;

/// Signature-specific errors
#[derive(Debug, Error)]
pub enum SignatureError {
    /// Algorithm name not recognised
    #[error("Unsupported hash algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Configuration could not be parsed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal plumbing failure, such as a dropped worker task
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SignatureError {
    /// Create an internal error
    #[must_use]
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<serde_json::Error> for SignatureError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type for signature operations
pub type Result<T> = std::result::Result<T, SignatureError>;

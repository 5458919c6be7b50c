//! Signature configuration loaded from JSON

use crate::{HashAlgorithm, KeyedHasher, Result, selection};
use serde::{Deserialize, Serialize};

/// Algorithm selection for keyed signatures
///
/// Every field has a default, so `{}` parses to SHA-1.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureConfig {
    /// Hash algorithm used by the composer
    #[serde(default)]
    pub algorithm: HashAlgorithm,
}

impl SignatureConfig {
    /// Config selecting `algorithm`
    #[must_use]
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }

    /// Parse a JSON document such as `{"algorithm": "md5"}`
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::Config` if the document is malformed or names
    /// an unknown algorithm.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize back to JSON
    ///
    /// # Errors
    ///
    /// Returns `SignatureError::Config` if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Explicit composer for the configured algorithm
    #[must_use]
    pub fn hasher(&self) -> KeyedHasher {
        KeyedHasher::new(self.algorithm)
    }

    /// Make the configured algorithm the process-wide default
    pub fn install(&self) {
        tracing::debug!(algorithm = %self.algorithm, "Installing signature configuration");
        selection::set_hash_func(self.algorithm.hash_func());
    }
}

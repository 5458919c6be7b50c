//! Entry point for the fluent signature API

use super::signature_builder::SignatureBuilder;
use crate::{HashAlgorithm, HashFunc, selection};

/// Entry point for keyed signature operations
pub struct Signature;

impl Signature {
    /// Use SHA-1
    #[must_use]
    pub fn sha1() -> SignatureBuilder {
        SignatureBuilder::new(HashAlgorithm::Sha1)
    }

    /// Use MD5
    #[must_use]
    pub fn md5() -> SignatureBuilder {
        SignatureBuilder::new(HashAlgorithm::Md5)
    }

    /// Use SHA-256
    #[must_use]
    pub fn sha256() -> SignatureBuilder {
        SignatureBuilder::new(HashAlgorithm::Sha256)
    }

    /// Use a builtin algorithm picked at runtime
    #[must_use]
    pub fn with_algorithm(algorithm: HashAlgorithm) -> SignatureBuilder {
        SignatureBuilder::new(algorithm)
    }

    /// Use a custom digest function
    #[must_use]
    pub fn with_hash_func(hash_func: HashFunc) -> SignatureBuilder {
        SignatureBuilder::new(hash_func)
    }

    /// Snapshot the process-wide digest function
    #[must_use]
    pub fn current() -> SignatureBuilder {
        SignatureBuilder::new(selection::current_hash_func())
    }
}

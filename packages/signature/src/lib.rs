//! Keyed hash signatures for request bodies and URLs
//!
//! A signature is the digest of `body || public_key || ':' || private_key`.
//! The digest function is pluggable: SHA-1 by default, MD5 and SHA-256 are
//! builtin, and any closure can be wrapped in a [`HashFunc`].
//!
//! ```
//! use cryypt_signature::{HashAlgorithm, KeyedHasher, hash_with_keys};
//!
//! // process-wide default (SHA-1)
//! let signature = hash_with_keys(b"page=2", b"ABC123", b"s3cr3t");
//! assert_eq!(signature.len(), 40);
//!
//! // explicit per call site
//! let md5 = KeyedHasher::new(HashAlgorithm::Md5).hash_with_keys(b"page=2", b"ABC123", b"s3cr3t");
//! assert_eq!(md5.len(), 32);
//! ```

#![forbid(unsafe_code)]

pub mod algorithm;
pub mod api;
pub mod async_result;
pub mod composer;
pub mod config;
pub mod error;
pub mod hash_func;
pub mod selection;

pub use error::{Result, SignatureError};

pub use algorithm::HashAlgorithm;
pub use api::{
    Signature, SignatureBuilder, SignatureBuilderWithError, SignatureBuilderWithHandler,
    SignatureBuilderWithKeys,
};
pub use async_result::{
    AsyncSignatureResult, AsyncSignatureResultWithError, AsyncSignatureResultWithHandler,
};
pub use composer::{KEY_SEPARATOR, KeyedHasher, compose, hash_with_keys, merge_bytes};
pub use config::SignatureConfig;
pub use hash_func::{HashFunc, md5_hash, sha1_hash, sha256_hash};
pub use selection::{current_hash_func, reset_hash_func, set_hash_func};

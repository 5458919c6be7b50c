//! Fluent signature API
//!
//! Usage: `Signature::sha1().with_keys(public, private).compute(body).await`

pub mod signature_builder;
pub mod signature_entry;

pub use signature_entry::Signature;

pub use signature_builder::{
    SignatureBuilder, SignatureBuilderWithError, SignatureBuilderWithHandler,
    SignatureBuilderWithKeys,
};

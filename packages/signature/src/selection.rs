//! Process-wide digest function selection
//!
//! The selection defaults to SHA-1 and can be swapped atomically at any time.
//! Readers take a snapshot and never block, so swapping while other threads
//! hash is memory-safe. Which function an in-flight call observes is up to
//! the caller to order.

use crate::HashFunc;
use arc_swap::ArcSwap;
use once_cell::sync::Lazy;
use std::sync::Arc;

static CURRENT: Lazy<ArcSwap<HashFunc>> = Lazy::new(|| ArcSwap::from_pointee(HashFunc::sha1()));

/// Digest function currently in effect for [`crate::hash_with_keys`]
#[must_use]
pub fn current_hash_func() -> HashFunc {
    HashFunc::clone(&CURRENT.load_full())
}

/// Replace the process-wide digest function for all later calls
pub fn set_hash_func(func: HashFunc) {
    tracing::debug!(hash_func = func.name(), "Selected digest function changed");
    CURRENT.store(Arc::new(func));
}

/// Restore the SHA-1 default
pub fn reset_hash_func() {
    set_hash_func(HashFunc::sha1());
}

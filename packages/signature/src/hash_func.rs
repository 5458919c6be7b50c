//! Digest functions rendering lowercase hexadecimal output

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Hash any byte input with `D` and render it as lowercase hex
fn hex_digest<D: Digest>(data: &[u8]) -> String {
    hex::encode(D::digest(data))
}

/// SHA-1 digest as defined in RFC 3174, rendered as 40 hex characters
pub fn sha1_hash<T: AsRef<[u8]>>(data: T) -> String {
    hex_digest::<Sha1>(data.as_ref())
}

/// MD5 digest as defined in RFC 1321, rendered as 32 hex characters
pub fn md5_hash<T: AsRef<[u8]>>(data: T) -> String {
    hex_digest::<Md5>(data.as_ref())
}

/// SHA-256 digest as defined in FIPS 180-4, rendered as 64 hex characters
pub fn sha256_hash<T: AsRef<[u8]>>(data: T) -> String {
    hex_digest::<Sha256>(data.as_ref())
}

/// A pluggable digest function mapping bytes to a hex string.
///
/// Cloning is cheap: the function itself is shared behind an `Arc`.
/// Any closure can be wrapped, which is how callers plug in algorithms
/// this crate does not ship:
///
/// ```
/// use cryypt_signature::HashFunc;
///
/// let upper = HashFunc::new("sha1-upper", |data: &[u8]| {
///     cryypt_signature::sha1_hash(data).to_uppercase()
/// });
/// assert_eq!(upper.hash(b"").len(), 40);
/// ```
#[derive(Clone)]
pub struct HashFunc {
    name: Cow<'static, str>,
    func: Arc<dyn Fn(&[u8]) -> String + Send + Sync>,
}

impl HashFunc {
    /// Wrap a closure as a named digest function
    pub fn new<N, F>(name: N, func: F) -> Self
    where
        N: Into<Cow<'static, str>>,
        F: Fn(&[u8]) -> String + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Builtin SHA-1
    #[must_use]
    pub fn sha1() -> Self {
        Self::new("sha1", |data: &[u8]| sha1_hash(data))
    }

    /// Builtin MD5
    #[must_use]
    pub fn md5() -> Self {
        Self::new("md5", |data: &[u8]| md5_hash(data))
    }

    /// Builtin SHA-256
    #[must_use]
    pub fn sha256() -> Self {
        Self::new("sha256", |data: &[u8]| sha256_hash(data))
    }

    /// Name used in logs and `Debug` output
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the function to `data`
    pub fn hash<T: AsRef<[u8]>>(&self, data: T) -> String {
        (self.func)(data.as_ref())
    }
}

impl Default for HashFunc {
    fn default() -> Self {
        Self::sha1()
    }
}

impl fmt::Debug for HashFunc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashFunc").field("name", &self.name).finish()
    }
}

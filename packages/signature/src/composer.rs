//! Keyed hash composition
//!
//! A keyed hash is the digest of `body || public_key || ':' || private_key`.
//! The bytes are hashed as-is, so binary bodies need no text encoding.

use crate::{HashFunc, selection};

/// Separator placed between the public and private key
pub const KEY_SEPARATOR: u8 = b':';

/// Concatenate byte slices into one buffer
#[must_use]
pub fn merge_bytes(parts: &[&[u8]]) -> Vec<u8> {
    let total = parts.iter().map(|part| part.len()).sum();
    let mut merged = Vec::with_capacity(total);
    for part in parts {
        merged.extend_from_slice(part);
    }
    merged
}

/// Build the exact byte sequence that gets hashed
#[must_use]
pub fn compose(body: &[u8], public_key: &[u8], private_key: &[u8]) -> Vec<u8> {
    merge_bytes(&[body, public_key, &[KEY_SEPARATOR], private_key])
}

/// Hash `body` with a key pair using the process-wide digest function.
///
/// Useful for signing non-URL payloads such as response bodies. Select a
/// different algorithm with [`crate::set_hash_func`], or use a
/// [`KeyedHasher`] to keep the choice local to a call site.
pub fn hash_with_keys<B, P, K>(body: B, public_key: P, private_key: K) -> String
where
    B: AsRef<[u8]>,
    P: AsRef<[u8]>,
    K: AsRef<[u8]>,
{
    KeyedHasher::new(selection::current_hash_func()).hash_with_keys(body, public_key, private_key)
}

/// Keyed hash composer bound to one explicit digest function
#[derive(Clone, Debug, Default)]
pub struct KeyedHasher {
    hash_func: HashFunc,
}

impl KeyedHasher {
    /// Composer using `hash_func`
    pub fn new(hash_func: impl Into<HashFunc>) -> Self {
        Self {
            hash_func: hash_func.into(),
        }
    }

    /// Digest function this composer applies
    #[must_use]
    pub fn hash_func(&self) -> &HashFunc {
        &self.hash_func
    }

    /// Hash `body || public_key || ':' || private_key`
    pub fn hash_with_keys<B, P, K>(&self, body: B, public_key: P, private_key: K) -> String
    where
        B: AsRef<[u8]>,
        P: AsRef<[u8]>,
        K: AsRef<[u8]>,
    {
        let (body, public_key, private_key) =
            (body.as_ref(), public_key.as_ref(), private_key.as_ref());
        tracing::trace!(
            hash_func = self.hash_func.name(),
            body_len = body.len(),
            public_key_len = public_key.len(),
            private_key_len = private_key.len(),
            "Composing keyed hash"
        );
        self.hash_func.hash(compose(body, public_key, private_key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HashAlgorithm, md5_hash, sha1_hash};

    #[test]
    fn merge_bytes_preserves_order() {
        let parts: [&[u8]; 4] = [b"ab", b"", b"c", b"de"];
        assert_eq!(merge_bytes(&parts), b"abcde".to_vec());
        assert!(merge_bytes(&[]).is_empty());
    }

    #[test]
    fn compose_places_separator_between_keys() {
        assert_eq!(compose(b"body", b"pub", b"priv"), b"bodypub:priv".to_vec());
        assert_eq!(compose(b"", b"", b""), vec![0x3A]);
    }

    #[test]
    fn empty_inputs_hash_the_colon() {
        let hasher = KeyedHasher::new(HashAlgorithm::Sha1);
        assert_eq!(hasher.hash_with_keys(b"", b"", b""), sha1_hash(":"));
    }

    #[test]
    fn matches_manual_concatenation() {
        let hasher = KeyedHasher::new(HashAlgorithm::Md5);
        assert_eq!(
            hasher.hash_with_keys("GET /items?page=2", "ABC123", "s3cr3t"),
            md5_hash("GET /items?page=2ABC123:s3cr3t")
        );
    }

    #[test]
    fn algorithm_choice_changes_output() {
        let sha1 = KeyedHasher::new(HashAlgorithm::Sha1).hash_with_keys("b", "p", "k");
        let md5 = KeyedHasher::new(HashAlgorithm::Md5).hash_with_keys("b", "p", "k");
        assert_ne!(sha1, md5);
        assert_eq!(sha1.len(), 40);
        assert_eq!(md5.len(), 32);
    }

    #[test]
    fn swapping_keys_changes_output() {
        let hasher = KeyedHasher::default();
        assert_ne!(
            hasher.hash_with_keys("body", "public", "private"),
            hasher.hash_with_keys("body", "private", "public")
        );
    }

    #[test]
    fn custom_hash_func_sees_composed_bytes() {
        let hasher = KeyedHasher::new(HashFunc::new("echo", |data: &[u8]| {
            String::from_utf8_lossy(data).into_owned()
        }));
        assert_eq!(hasher.hash_with_keys("b", "p", "k"), "bp:k");
        assert_eq!(hasher.hash_func().name(), "echo");
    }
}

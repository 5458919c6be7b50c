//! Catalogue of builtin hash algorithms

use crate::{HashFunc, SignatureError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Builtin hash algorithms usable for keyed signatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// SHA-1, RFC 3174
    #[default]
    Sha1,
    /// MD5, RFC 1321
    Md5,
    /// SHA-256, FIPS 180-4
    Sha256,
}

impl HashAlgorithm {
    /// All builtin algorithms
    pub const ALL: [Self; 3] = [Self::Sha1, Self::Md5, Self::Sha256];

    /// Digest function implementing this algorithm
    #[must_use]
    pub fn hash_func(self) -> HashFunc {
        match self {
            Self::Sha1 => HashFunc::sha1(),
            Self::Md5 => HashFunc::md5(),
            Self::Sha256 => HashFunc::sha256(),
        }
    }

    /// Raw digest width in bytes
    #[must_use]
    pub fn digest_len(self) -> usize {
        match self {
            Self::Sha1 => 20,
            Self::Md5 => 16,
            Self::Sha256 => 32,
        }
    }

    /// Width of the rendered hex digest
    #[must_use]
    pub fn hex_len(self) -> usize {
        self.digest_len() * 2
    }

    /// Canonical lowercase name
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Md5 => "md5",
            Self::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" | "sha-1" => Ok(Self::Sha1),
            "md5" | "md-5" => Ok(Self::Md5),
            "sha256" | "sha-256" => Ok(Self::Sha256),
            _ => Err(SignatureError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl From<HashAlgorithm> for HashFunc {
    fn from(algorithm: HashAlgorithm) -> Self {
        algorithm.hash_func()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_aliases_case_insensitively() {
        assert_eq!("SHA-1".parse::<HashAlgorithm>().ok(), Some(HashAlgorithm::Sha1));
        assert_eq!("md5".parse::<HashAlgorithm>().ok(), Some(HashAlgorithm::Md5));
        assert_eq!(" Sha256 ".parse::<HashAlgorithm>().ok(), Some(HashAlgorithm::Sha256));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "whirlpool".parse::<HashAlgorithm>();
        assert!(matches!(err, Err(SignatureError::UnsupportedAlgorithm(name)) if name == "whirlpool"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.to_string().parse::<HashAlgorithm>().ok(), Some(algorithm));
        }
    }

    #[test]
    fn hex_len_matches_hash_func_output() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(algorithm.hash_func().hash(b"width").len(), algorithm.hex_len());
        }
    }

    #[test]
    fn default_is_sha1() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }
}

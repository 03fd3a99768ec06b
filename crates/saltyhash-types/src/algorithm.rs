//! The closed set of supported hash algorithms.
//!
//! Identifiers are matched exactly and case-sensitively. The constructions
//! themselves live in `saltyhash-core::hash::registry`.

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// A supported hash algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    Sha1,
    Sha2_256,
    Sha2_512,
    Sha3_256,
    Sha3_512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in identifier order.
    pub const ALL: [HashAlgorithm; 5] = [
        HashAlgorithm::Sha1,
        HashAlgorithm::Sha2_256,
        HashAlgorithm::Sha2_512,
        HashAlgorithm::Sha3_256,
        HashAlgorithm::Sha3_512,
    ];

    /// The identifier used to select this algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha2_256 => "sha2-256",
            HashAlgorithm::Sha2_512 => "sha2-512",
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha3_512 => "sha3-512",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha2_256 | HashAlgorithm::Sha3_256 => 32,
            HashAlgorithm::Sha2_512 | HashAlgorithm::Sha3_512 => 64,
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HashAlgorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.as_str() == s)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_string()))
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_identifiers() {
        for algorithm in HashAlgorithm::ALL {
            let parsed: HashAlgorithm = algorithm.as_str().parse().unwrap();
            assert_eq!(parsed, algorithm);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "SHA1".parse::<HashAlgorithm>().unwrap_err();
        assert!(matches!(err, HashError::UnsupportedAlgorithm(ref id) if id == "SHA1"));
    }

    #[test]
    fn test_parse_rejects_outside_closed_set() {
        for id in ["md5", "sha3-384", "sha2-384", "", "shabracadabra", "sha256"] {
            let err = id.parse::<HashAlgorithm>().unwrap_err();
            assert!(
                matches!(err, HashError::UnsupportedAlgorithm(ref got) if got == id),
                "{id} should be unsupported"
            );
        }
    }

    #[test]
    fn test_digest_lengths() {
        assert_eq!(HashAlgorithm::Sha1.digest_len(), 20);
        assert_eq!(HashAlgorithm::Sha2_256.digest_len(), 32);
        assert_eq!(HashAlgorithm::Sha2_512.digest_len(), 64);
        assert_eq!(HashAlgorithm::Sha3_256.digest_len(), 32);
        assert_eq!(HashAlgorithm::Sha3_512.digest_len(), 64);
    }

    #[test]
    fn test_display_matches_identifier() {
        assert_eq!(HashAlgorithm::Sha3_512.to_string(), "sha3-512");
    }
}

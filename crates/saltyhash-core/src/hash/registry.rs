//! Algorithm registry.
//!
//! Maps each [`HashAlgorithm`] to its standard, unkeyed construction from the
//! RustCrypto `sha1`/`sha2`/`sha3` crates. Every call hands out a fresh
//! accumulator; nothing is shared between requests.

use saltyhash_types::algorithm::HashAlgorithm;
use saltyhash_types::error::HashError;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha512};
use sha3::{Sha3_256, Sha3_512};

/// Incremental hash state for one of the supported algorithms.
#[derive(Clone)]
pub enum Accumulator {
    Sha1(Sha1),
    Sha2_256(Sha256),
    Sha2_512(Sha512),
    Sha3_256(Sha3_256),
    Sha3_512(Sha3_512),
}

impl Accumulator {
    /// A zero-state accumulator for `algorithm`.
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sha1 => Accumulator::Sha1(Sha1::new()),
            HashAlgorithm::Sha2_256 => Accumulator::Sha2_256(Sha256::new()),
            HashAlgorithm::Sha2_512 => Accumulator::Sha2_512(Sha512::new()),
            HashAlgorithm::Sha3_256 => Accumulator::Sha3_256(Sha3_256::new()),
            HashAlgorithm::Sha3_512 => Accumulator::Sha3_512(Sha3_512::new()),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Accumulator::Sha1(_) => HashAlgorithm::Sha1,
            Accumulator::Sha2_256(_) => HashAlgorithm::Sha2_256,
            Accumulator::Sha2_512(_) => HashAlgorithm::Sha2_512,
            Accumulator::Sha3_256(_) => HashAlgorithm::Sha3_256,
            Accumulator::Sha3_512(_) => HashAlgorithm::Sha3_512,
        }
    }

    pub fn write(&mut self, data: &[u8]) {
        match self {
            Accumulator::Sha1(h) => Digest::update(h, data),
            Accumulator::Sha2_256(h) => Digest::update(h, data),
            Accumulator::Sha2_512(h) => Digest::update(h, data),
            Accumulator::Sha3_256(h) => Digest::update(h, data),
            Accumulator::Sha3_512(h) => Digest::update(h, data),
        }
    }

    /// Extract the digest and return the accumulator to its zero state.
    pub fn sum_reset(&mut self) -> Vec<u8> {
        match self {
            Accumulator::Sha1(h) => h.finalize_reset().to_vec(),
            Accumulator::Sha2_256(h) => h.finalize_reset().to_vec(),
            Accumulator::Sha2_512(h) => h.finalize_reset().to_vec(),
            Accumulator::Sha3_256(h) => h.finalize_reset().to_vec(),
            Accumulator::Sha3_512(h) => h.finalize_reset().to_vec(),
        }
    }

    /// Extract the digest, consuming the accumulator.
    pub fn sum(self) -> Vec<u8> {
        match self {
            Accumulator::Sha1(h) => h.finalize().to_vec(),
            Accumulator::Sha2_256(h) => h.finalize().to_vec(),
            Accumulator::Sha2_512(h) => h.finalize().to_vec(),
            Accumulator::Sha3_256(h) => h.finalize().to_vec(),
            Accumulator::Sha3_512(h) => h.finalize().to_vec(),
        }
    }
}

/// Resolve an algorithm identifier to a fresh accumulator.
pub fn resolve(identifier: &str) -> Result<Accumulator, HashError> {
    let algorithm: HashAlgorithm = identifier.parse()?;
    Ok(Accumulator::new(algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hex_digest(identifier: &str, data: &[u8]) -> String {
        let mut accumulator = resolve(identifier).unwrap();
        accumulator.write(data);
        hex::encode(accumulator.sum())
    }

    #[test]
    fn test_known_empty_digests() {
        assert_eq!(
            hex_digest("sha1", b""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            hex_digest("sha2-256", b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            hex_digest("sha3-256", b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
    }

    #[test]
    fn test_known_abc_digests() {
        assert_eq!(
            hex_digest("sha1", b"abc"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        assert_eq!(
            hex_digest("sha2-512", b"abc"),
            "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
             2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
        );
        assert_eq!(
            hex_digest("sha3-512", b"abc"),
            "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
             10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
        );
    }

    #[test]
    fn test_digest_lengths_match_algorithm() {
        for algorithm in HashAlgorithm::ALL {
            let mut accumulator = Accumulator::new(algorithm);
            accumulator.write(b"data");
            assert_eq!(accumulator.algorithm(), algorithm);
            assert_eq!(accumulator.sum().len(), algorithm.digest_len());
        }
    }

    #[test]
    fn test_resolve_unsupported() {
        for id in ["md5", "sha3-384", "SHA1"] {
            let err = resolve(id).err().unwrap();
            assert!(matches!(err, HashError::UnsupportedAlgorithm(ref got) if got == id));
        }
    }

    #[test]
    fn test_sum_reset_leaves_no_state() {
        for algorithm in HashAlgorithm::ALL {
            let mut reused = Accumulator::new(algorithm);
            reused.write(b"first item");
            let _ = reused.sum_reset();
            reused.write(b"second item");

            let mut fresh = Accumulator::new(algorithm);
            fresh.write(b"second item");

            assert_eq!(reused.sum_reset(), fresh.sum(), "{algorithm}");
        }
    }

    #[test]
    fn test_incremental_writes_match_single_write() {
        let mut split = Accumulator::new(HashAlgorithm::Sha2_256);
        split.write(b"test");
        split.write(b"Secret");

        let mut whole = Accumulator::new(HashAlgorithm::Sha2_256);
        whole.write(b"testSecret");

        assert_eq!(split.sum(), whole.sum());
    }
}

//! Blake2b hashing utilities for the ledger.

use crate::codec::{self, serde_hex};
use crate::error::Result;
use blake2::digest::consts::{U32, U5};
use blake2::{Blake2b, Blake2b512, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named alias for a 32-byte(u8) array, used to represent a 256-bit hash.
pub type H256 = [u8; 32];

/// Blake2b with a 256-bit output.
pub type Blake2b256 = Blake2b<U32>;

type Blake2b40 = Blake2b<U5>;

/// A 32-byte block hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockHash(#[serde(with = "serde_hex")] pub H256);

impl BlockHash {
    /// The zero hash, used as `previous` of an account's first state block.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Create a new hash from raw bytes.
    pub fn from_bytes(bytes: H256) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &H256 {
        &self.0
    }

    /// Convert to an uppercase hex string.
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        codec::from_hex_array(s).map(Self)
    }

    /// Whether every byte is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockHash({})", &self.to_hex()[..16])
    }
}

impl fmt::Display for BlockHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for BlockHash {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl From<H256> for BlockHash {
    fn from(bytes: H256) -> Self {
        Self(bytes)
    }
}

impl From<BlockHash> for H256 {
    fn from(hash: BlockHash) -> Self {
        hash.0
    }
}

impl AsRef<[u8]> for BlockHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Hash arbitrary data with Blake2b-256.
pub fn hash(data: &[u8]) -> BlockHash {
    BlockHash(Blake2b256::digest(data).into())
}

/// Hash multiple pieces of data by concatenating them.
pub fn hash_concat(parts: &[&[u8]]) -> BlockHash {
    let mut hasher = Blake2b256::new();
    for part in parts {
        hasher.update(part);
    }
    BlockHash(hasher.finalize().into())
}

/// Blake2b-512, the digest behind Ed25519-Blake2b key expansion and signing.
pub fn hash512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    out.copy_from_slice(&Blake2b512::digest(data));
    out
}

/// 5-byte Blake2b digest used for address checksums.
pub fn checksum40(data: &[u8]) -> [u8; 5] {
    let mut out = [0u8; 5];
    out.copy_from_slice(&Blake2b40::digest(data));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_deterministic() {
        let data = b"hello world";
        let h1 = hash(data);
        let h2 = hash(data);
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_hash_different_inputs() {
        let h1 = hash(b"hello");
        let h2 = hash(b"world");
        assert_ne!(h1, h2);
    }

    #[test]
    fn test_blake2b256_empty_vector() {
        assert_eq!(
            hash(b"").to_hex(),
            "0E5751C026E543B2E8AB2EB06099DAA1D1E5DF47778F7787FAAB45CDF12FE3A8"
        );
    }

    #[test]
    fn test_hash_hex_roundtrip() {
        let h = hash(b"test data");
        let hex_str = h.to_hex();
        let parsed = BlockHash::from_hex(&hex_str).unwrap();
        assert_eq!(h, parsed);
        assert_eq!(BlockHash::from_hex(&hex_str.to_lowercase()).unwrap(), h);
    }

    #[test]
    fn test_hash_display() {
        let h = hash(b"test");
        let display = format!("{}", h);
        assert_eq!(display.len(), 64);
        assert_eq!(display, display.to_uppercase());
    }

    #[test]
    fn test_hash_concat() {
        let h1 = hash_concat(&[b"hello", b"world"]);
        let h2 = hash(b"helloworld");
        assert_eq!(h1, h2);
    }

    #[test]
    fn test_short_hex_rejected() {
        assert!(BlockHash::from_hex("00").is_err());
    }

    #[test]
    fn test_zero_hash() {
        assert_eq!(BlockHash::ZERO.0, [0u8; 32]);
        assert!(BlockHash::ZERO.is_zero());
    }

    #[test]
    fn test_checksum_uses_its_own_output_size() {
        // Variable-length Blake2b parameterises the output size, so this is not
        // a truncation of the 256-bit digest.
        assert_ne!(&checksum40(b"abc")[..], &hash(b"abc").0[..5]);
    }
}

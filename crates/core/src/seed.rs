//! Wallet seeds and single-level deterministic key derivation.
//!
//! A seed is 32 random bytes. Account `i` of a seed has the private key
//! `Blake2b-256(seed || i as u32 big-endian)`; indices are independent of one
//! another, so knowing one derived key reveals nothing about its siblings.

use crate::codec;
use crate::crypto::{Keypair, PrivateKey};
use crate::error::{Error, Result};
use crate::hash::Blake2b256;
use blake2::Digest;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use std::str::FromStr;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Seed width in bytes.
pub const SEED_LENGTH: usize = 32;

/// A wallet seed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Seed([u8; SEED_LENGTH]);

impl Seed {
    /// Draw a fresh seed from the operating system's CSPRNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; SEED_LENGTH];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create a seed from raw bytes.
    pub fn from_bytes(bytes: [u8; SEED_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse 64 hex characters of either case.
    pub fn from_hex(s: &str) -> Result<Self> {
        codec::from_hex_array(s).map(Self)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; SEED_LENGTH] {
        &self.0
    }

    /// Export as 64 uppercase hex characters.
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    /// Derive the private key for account `index`.
    pub fn derive(&self, index: u32) -> PrivateKey {
        let mut hasher = Blake2b256::new();
        hasher.update(self.0);
        hasher.update(index.to_be_bytes());
        let mut bytes: [u8; 32] = hasher.finalize().into();
        let key = PrivateKey::from_bytes(bytes);
        bytes.zeroize();
        tracing::trace!(index, "derived private key from seed");
        key
    }

    /// Derive the full keypair for account `index`.
    pub fn keypair(&self, index: u32) -> Keypair {
        Keypair::from_private_key(self.derive(index))
    }
}

impl fmt::Debug for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Seed(..)")
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl PartialEq for Seed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Seed {}

/// Whether `text` is a well-formed seed: exactly 64 hex digits, either case.
///
/// Any such string is a usable seed; there is no checksum.
pub fn is_valid_seed(text: &str) -> bool {
    text.len() == SEED_LENGTH * 2 && text.bytes().all(|b| b.is_ascii_hexdigit())
}

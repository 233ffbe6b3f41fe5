//! Ed25519-Blake2b keys and signatures.
//!
//! This is Ed25519 with Blake2b-512 in place of SHA-512, both for expanding
//! the private key and inside the signing equation. The curve arithmetic comes
//! from `ed25519-dalek`'s hazmat layer, parameterised with the Blake2b digest.

use crate::account::AccountType;
use crate::address;
use crate::codec::{self, serde_hex};
use crate::error::{Error, Result};
use crate::hash::{hash512, BlockHash};
use blake2::Blake2b512;
use ed25519_dalek::hazmat::{raw_sign, raw_verify, ExpandedSecretKey};
use ed25519_dalek::{Signature as DalekSignature, VerifyingKey};
use serde::{Deserialize, Serialize};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Width of private and public keys.
pub const KEY_LENGTH: usize = 32;

/// Width of a signature.
pub const SIGNATURE_LENGTH: usize = 64;

fn key_bytes(bytes: &[u8]) -> Result<[u8; KEY_LENGTH]> {
    <[u8; KEY_LENGTH]>::try_from(bytes).map_err(|_| Error::InvalidKey {
        actual: bytes.len(),
    })
}

/// A private signing key.
///
/// Never printed: `Debug` is redacted and there is no `Display`. Use
/// [`PrivateKey::to_hex`] when the key really has to be exported.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; KEY_LENGTH]);

impl PrivateKey {
    /// Create a private key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Fails with [`Error::InvalidKey`] unless `bytes` is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        key_bytes(bytes).map(Self)
    }

    /// Parse from hex. Malformed hex is a format error; a well-formed buffer
    /// of the wrong width is an invalid key.
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut bytes = codec::from_hex(s)?;
        let key = Self::from_slice(&bytes);
        bytes.zeroize();
        key
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Export as an uppercase hex string.
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    fn expand(&self) -> ExpandedSecretKey {
        let mut digest = hash512(&self.0);
        let expanded = ExpandedSecretKey::from_bytes(&digest);
        digest.zeroize();
        expanded
    }

    /// Derive the matching public key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(VerifyingKey::from(&self.expand()).to_bytes())
    }

    /// Sign a message. Signing is deterministic: the same key and message
    /// always produce the same signature.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let expanded = self.expand();
        let verifying_key = VerifyingKey::from(&expanded);
        let signature = raw_sign::<Blake2b512>(&expanded, message, &verifying_key);
        Signature(signature.to_bytes())
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PrivateKey {}

/// A public key, safe to disclose.
///
/// Held as raw bytes: any 32 bytes decoded from an address are a valid value
/// of this type, whether or not they are a point on the curve. Curve validity
/// is only checked when verifying.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(#[serde(with = "serde_hex")] [u8; KEY_LENGTH]);

impl PublicKey {
    /// Create a public key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Fails with [`Error::InvalidKey`] unless `bytes` is exactly 32 bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        key_bytes(bytes).map(Self)
    }

    /// Parse from a 64-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        Self::from_slice(&codec::from_hex(s)?)
    }

    /// Get the raw bytes of the public key.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.0
    }

    /// Convert to an uppercase hex string.
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    /// Encode as an address of the given network.
    pub fn to_address(&self, account_type: AccountType) -> String {
        address::encode(account_type, self)
    }

    /// Decode an address of the given network.
    pub fn from_address(account_type: AccountType, address: &str) -> Result<Self> {
        address::decode(account_type, address)
    }

    /// Verify a signature against this public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        let key = VerifyingKey::from_bytes(&self.0).map_err(|_| Error::VerificationFailed)?;
        let sig = DalekSignature::from_bytes(&signature.0);
        raw_verify::<Blake2b512>(&key, message, &sig).map_err(|_| Error::VerificationFailed)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", codec::to_hex(&self.0[..8]))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// A cryptographic signature.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature(#[serde(with = "serde_hex")] pub [u8; SIGNATURE_LENGTH]);

impl Signature {
    /// Create a signature from raw bytes.
    pub fn from_bytes(bytes: [u8; SIGNATURE_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LENGTH] {
        &self.0
    }

    /// Convert to an uppercase hex string.
    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    /// Parse from a 128-character hex string.
    pub fn from_hex(s: &str) -> Result<Self> {
        codec::from_hex_array(s).map(Self)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({}...)", &self.to_hex()[..16])
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A private key together with its public key.
#[derive(Clone)]
pub struct Keypair {
    private_key: PrivateKey,
    pub public_key: PublicKey,
}

impl Keypair {
    /// Create a keypair from a private key.
    pub fn from_private_key(private_key: PrivateKey) -> Self {
        let public_key = private_key.public_key();
        Self {
            private_key,
            public_key,
        }
    }

    /// Get the private key.
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The address of this keypair on the given network.
    pub fn address(&self, account_type: AccountType) -> String {
        self.public_key.to_address(account_type)
    }

    /// Sign a message.
    pub fn sign(&self, message: &[u8]) -> Signature {
        self.private_key.sign(message)
    }

    /// Sign a block hash directly.
    pub fn sign_hash(&self, hash: &BlockHash) -> Signature {
        self.sign(hash.as_bytes())
    }

    /// Verify a signature against our public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<()> {
        self.public_key.verify(message, signature)
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn keypair(byte: u8) -> Keypair {
        Keypair::from_private_key(PrivateKey::from_bytes([byte; 32]))
    }

    #[test]
    fn test_public_key_deterministic() {
        let sk = PrivateKey::from_bytes([7u8; 32]);
        assert_eq!(sk.public_key(), sk.public_key());
        assert_ne!(sk.public_key(), PrivateKey::from_bytes([8u8; 32]).public_key());
    }

    #[test]
    fn test_sign_and_verify() {
        let kp = keypair(1);
        let message = b"hello world";
        let sig = kp.sign(message);
        assert!(kp.verify(message, &sig).is_ok());
    }

    #[test]
    fn test_signing_is_deterministic() {
        let kp = keypair(1);
        assert_eq!(kp.sign(b"abc"), kp.sign(b"abc"));
    }

    #[test]
    fn test_wrong_message_fails() {
        let kp = keypair(1);
        let sig = kp.sign(b"hello");
        assert_eq!(kp.verify(b"world", &sig), Err(Error::VerificationFailed));
    }

    #[test]
    fn test_wrong_key_fails() {
        let kp1 = keypair(1);
        let kp2 = keypair(2);
        let sig = kp1.sign(b"hello");
        assert!(kp2.verify(b"hello", &sig).is_err());
    }

    #[test]
    fn test_private_key_wrong_width() {
        let err = PrivateKey::from_slice(&[0u8; 31]).unwrap_err();
        assert_eq!(err, Error::InvalidKey { actual: 31 });
        assert_eq!(err.kind(), ErrorKind::InvalidKey);

        let err = PrivateKey::from_hex(&"00".repeat(33)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn test_private_key_bad_hex_is_format_error() {
        let err = PrivateKey::from_hex(&"zz".repeat(32)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_private_key_debug_is_redacted() {
        let sk = PrivateKey::from_bytes([0xAB; 32]);
        assert_eq!(format!("{:?}", sk), "PrivateKey(..)");
        assert!(!format!("{:?}", keypair(0xAB)).contains("ABABABABABABABABABAB"));
    }

    #[test]
    fn test_public_key_hex_roundtrip() {
        let pk = keypair(3).public_key;
        assert_eq!(PublicKey::from_hex(&pk.to_hex()).unwrap(), pk);
        assert_eq!(PublicKey::from_hex(&pk.to_hex().to_lowercase()).unwrap(), pk);
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let sig = keypair(4).sign(b"data");
        assert_eq!(sig.to_hex().len(), 128);
        assert_eq!(Signature::from_hex(&sig.to_hex()).unwrap(), sig);
    }

    #[test]
    fn test_sign_hash_matches_sign_bytes() {
        let kp = keypair(5);
        let hash = crate::hash::hash(b"block");
        assert_eq!(kp.sign_hash(&hash), kp.sign(hash.as_bytes()));
    }

    #[test]
    fn test_verify_rejects_non_point() {
        // y = 2 does not decompress to a curve point.
        let mut bytes = [0u8; 32];
        bytes[0] = 2;
        let pk = PublicKey::from_bytes(bytes);
        let sig = keypair(6).sign(b"x");
        assert!(pk.verify(b"x", &sig).is_err());
    }
}

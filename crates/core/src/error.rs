//! Error types shared by every module of the core.

use thiserror::Error;

/// Coarse classification of an [`Error`].
///
/// Callers that only need to know *what kind* of input was wrong (to pick a
/// user-facing message, say) can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed hex, a byte buffer of the wrong width, or bad amount text.
    Format,
    /// An address that does not decode for the requested account type.
    InvalidAddress,
    /// A key buffer that is not exactly 32 bytes.
    InvalidKey,
    /// A signature that does not verify against the given public key.
    Verification,
}

/// Why an address was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected an address starting with {expected:?}")]
    UnknownPrefix { expected: &'static str },

    #[error("address payload must be {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid address character {0:?}")]
    InvalidCharacter(char),

    #[error("address padding bits are not zero")]
    NonZeroPadding,

    #[error("address checksum mismatch")]
    ChecksumMismatch,
}

/// Errors returned by the core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid amount {0:?}: expected a decimal integer that fits in 128 bits")]
    InvalidAmount(String),

    #[error("unknown account type {0:?}")]
    UnknownAccountType(String),

    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    #[error("invalid key: expected 32 bytes, got {actual}")]
    InvalidKey { actual: usize },

    #[error("signature verification failed")]
    VerificationFailed,
}

impl Error {
    /// The error kind this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidHex(_)
            | Error::InvalidLength { .. }
            | Error::InvalidAmount(_)
            | Error::UnknownAccountType(_) => ErrorKind::Format,
            Error::InvalidAddress(_) => ErrorKind::InvalidAddress,
            Error::InvalidKey { .. } => ErrorKind::InvalidKey,
            Error::VerificationFailed => ErrorKind::Verification,
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Exact balances measured in raw, the ledger's smallest unit.

use crate::account::AccountType;
use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A balance in raw.
///
/// The ledger stores balances as a 128-bit big-endian field, so every valid
/// balance fits in a `u128` exactly. Text that does not fit is rejected rather
/// than truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Raw(u128);

impl Raw {
    /// No funds.
    pub const ZERO: Self = Self(0);
    /// The largest balance the 16-byte field can hold.
    pub const MAX: Self = Self(u128::MAX);

    /// Wrap an amount already expressed in raw.
    pub fn new(raw: u128) -> Self {
        Self(raw)
    }

    /// The amount in raw.
    pub fn as_u128(&self) -> u128 {
        self.0
    }

    /// `whole` coins of the given network, in raw.
    pub fn from_units(whole: u128, account_type: AccountType) -> Result<Self> {
        whole
            .checked_mul(account_type.raw_per_unit())
            .map(Self)
            .ok_or_else(|| Error::InvalidAmount(whole.to_string()))
    }

    /// The 16-byte big-endian encoding hashed into send and state blocks.
    pub fn to_be_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }

    /// Read the 16-byte big-endian encoding.
    pub fn from_be_bytes(bytes: [u8; 16]) -> Self {
        Self(u128::from_be_bytes(bytes))
    }

    /// Add, or `None` on overflow.
    pub fn checked_add(self, other: Raw) -> Option<Raw> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, or `None` if the result would be negative.
    pub fn checked_sub(self, other: Raw) -> Option<Raw> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl FromStr for Raw {
    type Err = Error;

    /// Parse plain decimal digits. Signs, separators, whitespace and
    /// fractional parts are all rejected.
    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidAmount(s.to_string()));
        }
        s.parse::<u128>()
            .map(Self)
            .map_err(|_| Error::InvalidAmount(s.to_string()))
    }
}

impl fmt::Display for Raw {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Raw {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl Serialize for Raw {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Raw {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

//! Hex/byte conversion used by every other module.
//!
//! The canonical rendering is uppercase, which is what the ledger itself uses
//! for keys, hashes and signatures. Decoding accepts either case.

use crate::error::{Error, Result};

/// Encode bytes as uppercase hex, two characters per byte.
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode_upper(bytes)
}

/// Decode hex text of any case.
///
/// Fails with [`Error::InvalidHex`] on odd length or a non-hex character.
pub fn from_hex(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text)?)
}

/// Decode hex text that must hold exactly `N` bytes.
pub fn from_hex_array<const N: usize>(text: &str) -> Result<[u8; N]> {
    let bytes = from_hex(text)?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| Error::InvalidLength {
        expected: N,
        actual: bytes.len(),
    })
}

/// Serde adapter that writes fixed-width byte arrays as canonical hex strings.
pub(crate) mod serde_hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S, const N: usize>(bytes: &[u8; N], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::to_hex(bytes))
    }

    pub fn deserialize<'de, D, const N: usize>(deserializer: D) -> Result<[u8; N], D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        super::from_hex_array(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_uppercase_and_padded() {
        assert_eq!(to_hex([0x00, 0x0a, 0xff]), "000AFF");
        assert_eq!(to_hex(Vec::<u8>::new()), "");
    }

    #[test]
    fn test_from_hex_any_case() {
        assert_eq!(from_hex("00aFfF").unwrap(), vec![0x00, 0xaf, 0xff]);
    }

    #[test]
    fn test_canonical_case_roundtrip() {
        let text = "deadBEEF01";
        assert_eq!(to_hex(from_hex(text).unwrap()), "DEADBEEF01");
    }

    #[test]
    fn test_odd_length_rejected() {
        let err = from_hex("abc").unwrap_err();
        assert_eq!(err, Error::InvalidHex(hex::FromHexError::OddLength));
    }

    #[test]
    fn test_non_hex_rejected() {
        let err = from_hex("zz").unwrap_err();
        assert!(matches!(err, Error::InvalidHex(_)));
    }

    #[test]
    fn test_array_length_checked() {
        let arr: [u8; 2] = from_hex_array("0102").unwrap();
        assert_eq!(arr, [1, 2]);

        let err = from_hex_array::<32>("0102").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                expected: 32,
                actual: 2
            }
        );
    }
}

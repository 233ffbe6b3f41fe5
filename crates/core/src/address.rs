//! Account addresses: `prefix + base32(public key) + base32(checksum)`.
//!
//! The alphabet has 32 symbols and leaves out `0`, `2`, `l` and `v`, which are
//! easily confused when an address is copied by hand. The 256-bit key is
//! left-padded with four zero bits to 52 symbols. The checksum is the 5-byte
//! Blake2b digest of the key, byte-reversed, as 8 symbols. It catches
//! transcription errors and offers no protection against deliberate tampering.

use crate::account::AccountType;
use crate::crypto::PublicKey;
use crate::error::{AddressError, Result};
use crate::hash::checksum40;

const ALPHABET: &[u8; 32] = b"13456789abcdefghijkmnopqrstuwxyz";

const KEY_SYMBOLS: usize = 52;
const CHECKSUM_SYMBOLS: usize = 8;

/// Characters after the prefix in every valid address.
pub const PAYLOAD_LENGTH: usize = KEY_SYMBOLS + CHECKSUM_SYMBOLS;

fn checksum(key: &[u8; 32]) -> [u8; 5] {
    let mut sum = checksum40(key);
    sum.reverse();
    sum
}

fn symbol_value(c: u8) -> Option<u8> {
    ALPHABET.iter().position(|&s| s == c).map(|p| p as u8)
}

/// Append `bytes` as `symbols` base-32 characters, zero-padding on the left.
fn push_base32(out: &mut String, bytes: &[u8], symbols: usize) {
    let pad = symbols * 5 - bytes.len() * 8;
    for i in 0..symbols {
        let mut value = 0u8;
        for bit in 0..5 {
            let pos = i * 5 + bit;
            value <<= 1;
            if pos >= pad {
                let p = pos - pad;
                value |= (bytes[p / 8] >> (7 - p % 8)) & 1;
            }
        }
        out.push(ALPHABET[value as usize] as char);
    }
}

/// Inverse of [`push_base32`]. The padding bits must be zero.
fn read_base32<const N: usize>(symbols: &[u8]) -> std::result::Result<[u8; N], AddressError> {
    let pad = symbols.len() * 5 - N * 8;
    let mut out = [0u8; N];
    for (i, &c) in symbols.iter().enumerate() {
        let value = symbol_value(c).ok_or(AddressError::InvalidCharacter(c as char))?;
        for bit in 0..5 {
            let pos = i * 5 + bit;
            let set = (value >> (4 - bit)) & 1;
            if pos < pad {
                if set == 1 {
                    return Err(AddressError::NonZeroPadding);
                }
                continue;
            }
            let p = pos - pad;
            out[p / 8] |= set << (7 - p % 8);
        }
    }
    Ok(out)
}

/// Encode a public key as an address of `account_type`.
pub fn encode(account_type: AccountType, key: &PublicKey) -> String {
    let prefix = account_type.prefix();
    let mut out = String::with_capacity(prefix.len() + PAYLOAD_LENGTH);
    out.push_str(prefix);
    push_base32(&mut out, key.as_bytes(), KEY_SYMBOLS);
    push_base32(&mut out, &checksum(key.as_bytes()), CHECKSUM_SYMBOLS);
    out
}

/// Decode an address of `account_type` back to its public key.
///
/// Rejects a prefix the network does not accept, a payload of the wrong
/// length, symbols outside the alphabet (including uppercase), non-zero
/// padding bits and checksum mismatches.
pub fn decode(account_type: AccountType, address: &str) -> Result<PublicKey> {
    let payload = account_type
        .strip_prefix(address)
        .ok_or(AddressError::UnknownPrefix {
            expected: account_type.prefix(),
        })?;

    if let Some(c) = payload.chars().find(|c| !c.is_ascii()) {
        return Err(AddressError::InvalidCharacter(c).into());
    }
    if payload.len() != PAYLOAD_LENGTH {
        return Err(AddressError::InvalidLength {
            expected: PAYLOAD_LENGTH,
            actual: payload.len(),
        }
        .into());
    }

    let (key_part, checksum_part) = payload.as_bytes().split_at(KEY_SYMBOLS);
    let key: [u8; 32] = read_base32(key_part)?;
    let sum: [u8; 5] = read_base32(checksum_part)?;
    if sum != checksum(&key) {
        return Err(AddressError::ChecksumMismatch.into());
    }
    Ok(PublicKey::from_bytes(key))
}

/// Whether `address` decodes for `account_type`.
pub fn is_valid(account_type: AccountType, address: &str) -> bool {
    decode(account_type, address).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};

    const KEY: &str = "C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B";
    const PAYLOAD: &str = "3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7";

    fn key() -> PublicKey {
        PublicKey::from_hex(KEY).unwrap()
    }

    #[test]
    fn test_encode_known_key() {
        assert_eq!(encode(AccountType::Nano, &key()), format!("nano_{PAYLOAD}"));
        assert_eq!(encode(AccountType::Banano, &key()), format!("ban_{PAYLOAD}"));
    }

    #[test]
    fn test_decode_known_address() {
        assert_eq!(
            decode(AccountType::Nano, &format!("nano_{PAYLOAD}")).unwrap(),
            key()
        );
        assert_eq!(
            decode(AccountType::Banano, &format!("ban_{PAYLOAD}")).unwrap(),
            key()
        );
    }

    #[test]
    fn test_legacy_prefix_accepted() {
        assert_eq!(
            decode(AccountType::Nano, &format!("xrb_{PAYLOAD}")).unwrap(),
            key()
        );
    }

    #[test]
    fn test_wrong_network_prefix_rejected() {
        let err = decode(AccountType::Banano, &format!("nano_{PAYLOAD}")).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAddress(AddressError::UnknownPrefix { expected: "ban_" })
        );
        assert_eq!(err.kind(), ErrorKind::InvalidAddress);
    }

    #[test]
    fn test_zero_key() {
        let zero = PublicKey::from_bytes([0u8; 32]);
        let address = encode(AccountType::Nano, &zero);
        assert!(address.starts_with(&format!("nano_{}", "1".repeat(52))));
        assert_eq!(decode(AccountType::Nano, &address).unwrap(), zero);
    }

    #[test]
    fn test_corrupted_checksum_rejected() {
        let mut address = format!("ban_{PAYLOAD}");
        // Last symbol '7' -> '8'
        address.pop();
        address.push('8');
        let err = decode(AccountType::Banano, &address).unwrap_err();
        assert_eq!(err, Error::InvalidAddress(AddressError::ChecksumMismatch));
    }

    #[test]
    fn test_corrupted_key_symbol_rejected() {
        let address = format!("ban_{PAYLOAD}").replacen("3i1", "3i3", 1);
        let err = decode(AccountType::Banano, &address).unwrap_err();
        assert_eq!(err, Error::InvalidAddress(AddressError::ChecksumMismatch));
    }

    #[test]
    fn test_invalid_symbol_rejected() {
        for bad in ['0', '2', 'l', 'v', 'A'] {
            let address = format!("ban_{}{}", bad, &PAYLOAD[1..]);
            let err = decode(AccountType::Banano, &address).unwrap_err();
            assert_eq!(
                err,
                Error::InvalidAddress(AddressError::InvalidCharacter(bad))
            );
        }
    }

    #[test]
    fn test_non_ascii_rejected() {
        let address = format!("ban_é{}", &PAYLOAD[2..]);
        let err = decode(AccountType::Banano, &address).unwrap_err();
        assert_eq!(err, Error::InvalidAddress(AddressError::InvalidCharacter('é')));
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = decode(AccountType::Banano, &format!("ban_{}", &PAYLOAD[1..])).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAddress(AddressError::InvalidLength {
                expected: 60,
                actual: 59
            })
        );
        assert!(decode(AccountType::Banano, "ban_").is_err());
        assert!(decode(AccountType::Banano, "").is_err());
    }

    #[test]
    fn test_non_zero_padding_rejected() {
        // First symbol carries the 4 padding bits and the top key bit, so only
        // '1' and '3' are valid there.
        let address = format!("ban_9{}", &PAYLOAD[1..]);
        let err = decode(AccountType::Banano, &address).unwrap_err();
        assert_eq!(err, Error::InvalidAddress(AddressError::NonZeroPadding));
    }

    #[test]
    fn test_is_valid() {
        assert!(is_valid(AccountType::Banano, &format!("ban_{PAYLOAD}")));
        assert!(!is_valid(AccountType::Nano, &format!("ban_{PAYLOAD}")));
    }
}

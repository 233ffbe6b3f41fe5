//! Text-in, text-out helpers for wallet front ends.
//!
//! Front ends hold seeds, keys and hashes as hex strings, balances as decimal
//! strings and accounts as addresses. These functions parse those strings,
//! call into the typed API and render the result the same way. Every malformed
//! input is returned as an error; nothing is corrected or defaulted.

use crate::account::AccountType;
use crate::amount::Raw;
use crate::block::{ChangeBlock, Link, OpenBlock, ReceiveBlock, SendBlock, StateBlock};
use crate::codec;
use crate::crypto::{PrivateKey, PublicKey};
use crate::error::Result;
use crate::hash::BlockHash;
use crate::seed::Seed;

pub use crate::seed::is_valid_seed;

/// A new random seed as 64 uppercase hex characters.
pub fn generate_seed() -> String {
    Seed::generate().to_hex()
}

/// Private key `index` of `seed`, as hex.
pub fn seed_to_private(seed: &str, index: u32) -> Result<String> {
    Ok(Seed::from_hex(seed)?.derive(index).to_hex())
}

/// Public key of a hex private key, as hex.
pub fn private_to_public(private_key: &str) -> Result<String> {
    Ok(PrivateKey::from_hex(private_key)?.public_key().to_hex())
}

/// Address of a hex public key.
pub fn public_to_address(account_type: AccountType, public_key: &str) -> Result<String> {
    Ok(PublicKey::from_hex(public_key)?.to_address(account_type))
}

/// Public key of an address, as hex.
pub fn address_to_public(account_type: AccountType, address: &str) -> Result<String> {
    Ok(PublicKey::from_address(account_type, address)?.to_hex())
}

/// Hash of an open block. `representative` and `account` are addresses.
pub fn compute_open_hash(
    account_type: AccountType,
    source: &str,
    representative: &str,
    account: &str,
) -> Result<String> {
    let block = OpenBlock {
        source: BlockHash::from_hex(source)?,
        representative: PublicKey::from_address(account_type, representative)?,
        account: PublicKey::from_address(account_type, account)?,
    };
    Ok(block.hash().to_hex())
}

/// Hash of a receive block.
pub fn compute_receive_hash(previous: &str, source: &str) -> Result<String> {
    let block = ReceiveBlock {
        previous: BlockHash::from_hex(previous)?,
        source: BlockHash::from_hex(source)?,
    };
    Ok(block.hash().to_hex())
}

/// Hash of a send block. `balance` is the raw balance left after the send.
pub fn compute_send_hash(
    account_type: AccountType,
    previous: &str,
    destination: &str,
    balance: &str,
) -> Result<String> {
    let block = SendBlock {
        previous: BlockHash::from_hex(previous)?,
        destination: PublicKey::from_address(account_type, destination)?,
        balance: balance.parse::<Raw>()?,
    };
    Ok(block.hash().to_hex())
}

/// Hash of a change block.
pub fn compute_change_hash(
    account_type: AccountType,
    previous: &str,
    representative: &str,
) -> Result<String> {
    let block = ChangeBlock {
        previous: BlockHash::from_hex(previous)?,
        representative: PublicKey::from_address(account_type, representative)?,
    };
    Ok(block.hash().to_hex())
}

/// Hash of a state block.
///
/// `previous` is 64 zero digits for the first block of an account. `link` is
/// either an address or 64 hex characters, see [`Link::parse`].
pub fn compute_state_hash(
    account_type: AccountType,
    account: &str,
    previous: &str,
    representative: &str,
    balance: &str,
    link: &str,
) -> Result<String> {
    let block = StateBlock {
        network: account_type,
        account: PublicKey::from_address(account_type, account)?,
        previous: BlockHash::from_hex(previous)?,
        representative: PublicKey::from_address(account_type, representative)?,
        balance: balance.parse::<Raw>()?,
        link: Link::parse(account_type, link)?,
    };
    Ok(block.hash().to_hex())
}

/// Sign hex `data` (normally a block hash) with a hex private key. Returns
/// the 64-byte signature as hex.
pub fn sign(private_key: &str, data: &str) -> Result<String> {
    let key = PrivateKey::from_hex(private_key)?;
    let message = codec::from_hex(data)?;
    Ok(key.sign(&message).to_hex())
}

//! Cryptographic core of a block-lattice wallet.
//!
//! This crate provides what a wallet needs to build and authorise blocks:
//! - Hex/byte conversion
//! - Seeds and deterministic per-index key derivation
//! - Ed25519-Blake2b keys and signatures
//! - Checksummed account addresses for each supported network
//! - Canonical hashes for open, receive, send, change and state blocks
//!
//! Everything here is a pure function of its inputs except seed generation,
//! which reads the operating system's CSPRNG.
//!
//! # Example
//!
//! ```rust
//! use lattice_core::{AccountType, Block, BlockHash, Link, Raw, Seed, StateBlock};
//!
//! let seed = Seed::from_hex(&"0".repeat(64)).unwrap();
//! let keypair = seed.keypair(0);
//! assert_eq!(
//!     keypair.address(AccountType::Nano),
//!     "nano_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7",
//! );
//!
//! let block = StateBlock {
//!     network: AccountType::Nano,
//!     account: keypair.public_key,
//!     previous: BlockHash::ZERO,
//!     representative: keypair.public_key,
//!     balance: Raw::new(1),
//!     link: Link::ZERO,
//! };
//! let signed = Block::from(block).sign(&keypair);
//! assert!(signed.verify(&keypair.public_key).is_ok());
//! ```

pub mod account;
pub mod address;
pub mod amount;
pub mod block;
pub mod codec;
pub mod crypto;
pub mod error;
pub mod hash;
pub mod seed;
pub mod wallet;

// Re-export commonly used types at the crate root
pub use account::{AccountType, NetworkParams};
pub use amount::Raw;
pub use block::{
    Block, BlockKind, ChangeBlock, Link, OpenBlock, ReceiveBlock, SendBlock, SignedBlock,
    StateBlock,
};
pub use crypto::{Keypair, PrivateKey, PublicKey, Signature};
pub use error::{AddressError, Error, ErrorKind, Result};
pub use hash::{hash, hash_concat, BlockHash, H256};
pub use seed::{is_valid_seed, Seed};

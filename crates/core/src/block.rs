//! Ledger blocks and their canonical hashes.
//!
//! Each variant hashes a fixed concatenation of its fields with Blake2b-256:
//!
//! | Variant | Hashed bytes |
//! |---------|--------------|
//! | open    | source ‖ representative ‖ account |
//! | receive | previous ‖ source |
//! | send    | previous ‖ destination ‖ balance (16 bytes, big-endian) |
//! | change  | previous ‖ representative |
//! | state   | preamble ‖ account ‖ previous ‖ representative ‖ balance ‖ link |
//!
//! Hashes are recomputed from the fields on every call and never cached, so a
//! block with edited fields is simply a different block with a different hash.

use crate::account::AccountType;
use crate::amount::Raw;
use crate::codec;
use crate::crypto::{Keypair, PublicKey, Signature};
use crate::error::Result;
use crate::hash::{hash_concat, BlockHash};
use serde_json::{json, Value};
use std::fmt;

/// The multipurpose 32-byte field of a state block.
///
/// It holds the source block hash when receiving, the destination public key
/// when sending, and zero for a representative change. Which one it is, is up
/// to the caller; hashing treats it as opaque bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Link([u8; 32]);

impl Link {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        codec::to_hex(self.0)
    }

    /// Parse either an address of `account_type` or 64 hex characters.
    ///
    /// Text starting with one of the network's address prefixes is decoded as
    /// an address (and fails as one); anything else must be hex.
    pub fn parse(account_type: AccountType, text: &str) -> Result<Self> {
        if account_type.strip_prefix(text).is_some() {
            return PublicKey::from_address(account_type, text).map(Self::from);
        }
        BlockHash::from_hex(text).map(Self::from)
    }

    /// The link read as a destination account.
    pub fn as_account(&self) -> PublicKey {
        PublicKey::from_bytes(self.0)
    }
}

impl From<PublicKey> for Link {
    fn from(key: PublicKey) -> Self {
        Self(*key.as_bytes())
    }
}

impl From<BlockHash> for Link {
    fn from(hash: BlockHash) -> Self {
        Self(hash.0)
    }
}

impl fmt::Debug for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Link({})", &self.to_hex()[..16])
    }
}

/// First block of an account (legacy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenBlock {
    /// Hash of the send block being received.
    pub source: BlockHash,
    pub representative: PublicKey,
    pub account: PublicKey,
}

impl OpenBlock {
    pub fn hash(&self) -> BlockHash {
        hash_concat(&[
            self.source.as_ref(),
            self.representative.as_ref(),
            self.account.as_ref(),
        ])
    }
}

/// Accepts a pending transfer (legacy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiveBlock {
    pub previous: BlockHash,
    /// Hash of the send block being received.
    pub source: BlockHash,
}

impl ReceiveBlock {
    pub fn hash(&self) -> BlockHash {
        hash_concat(&[self.previous.as_ref(), self.source.as_ref()])
    }
}

/// Sends funds (legacy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendBlock {
    pub previous: BlockHash,
    pub destination: PublicKey,
    /// Balance left on the account after the send, not the amount sent.
    pub balance: Raw,
}

impl SendBlock {
    pub fn hash(&self) -> BlockHash {
        hash_concat(&[
            self.previous.as_ref(),
            self.destination.as_ref(),
            &self.balance.to_be_bytes(),
        ])
    }
}

/// Changes the voting representative without moving funds (legacy).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeBlock {
    pub previous: BlockHash,
    pub representative: PublicKey,
}

impl ChangeBlock {
    pub fn hash(&self) -> BlockHash {
        hash_concat(&[self.previous.as_ref(), self.representative.as_ref()])
    }
}

/// The unified block format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateBlock {
    /// Network whose domain-separation preamble is hashed in.
    pub network: AccountType,
    pub account: PublicKey,
    /// Head of the account chain; [`BlockHash::ZERO`] for the first block.
    pub previous: BlockHash,
    pub representative: PublicKey,
    /// Balance after this block.
    pub balance: Raw,
    pub link: Link,
}

impl StateBlock {
    pub fn hash(&self) -> BlockHash {
        hash_concat(&[
            self.network.state_preamble(),
            self.account.as_ref(),
            self.previous.as_ref(),
            self.representative.as_ref(),
            &self.balance.to_be_bytes(),
            self.link.as_bytes(),
        ])
    }

    /// Whether this opens the account chain.
    pub fn is_first(&self) -> bool {
        self.previous.is_zero()
    }
}

/// Discriminant of a [`Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Open,
    Receive,
    Send,
    Change,
    State,
}

impl BlockKind {
    /// Name used in the ledger's JSON block representation.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Open => "open",
            BlockKind::Receive => "receive",
            BlockKind::Send => "send",
            BlockKind::Change => "change",
            BlockKind::State => "state",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any ledger block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Open(OpenBlock),
    Receive(ReceiveBlock),
    Send(SendBlock),
    Change(ChangeBlock),
    State(StateBlock),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Open(_) => BlockKind::Open,
            Block::Receive(_) => BlockKind::Receive,
            Block::Send(_) => BlockKind::Send,
            Block::Change(_) => BlockKind::Change,
            Block::State(_) => BlockKind::State,
        }
    }

    /// The canonical hash, the value that gets signed.
    pub fn hash(&self) -> BlockHash {
        let hash = match self {
            Block::Open(b) => b.hash(),
            Block::Receive(b) => b.hash(),
            Block::Send(b) => b.hash(),
            Block::Change(b) => b.hash(),
            Block::State(b) => b.hash(),
        };
        tracing::trace!(kind = %self.kind(), %hash, "computed block hash");
        hash
    }

    /// Sign the block hash with `keypair`.
    pub fn sign(self, keypair: &Keypair) -> SignedBlock {
        let signature = keypair.sign_hash(&self.hash());
        SignedBlock {
            block: self,
            signature,
        }
    }
}

macro_rules! impl_from_block {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Block {
                fn from(block: $ty) -> Self {
                    Block::$variant(block)
                }
            }
        )*
    };
}

impl_from_block!(
    Open(OpenBlock),
    Receive(ReceiveBlock),
    Send(SendBlock),
    Change(ChangeBlock),
    State(StateBlock),
);

/// A block with its authorisation signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedBlock {
    pub block: Block,
    pub signature: Signature,
}

impl SignedBlock {
    pub fn hash(&self) -> BlockHash {
        self.block.hash()
    }

    /// Check the signature against the account's public key.
    pub fn verify(&self, account: &PublicKey) -> Result<()> {
        account.verify(self.hash().as_bytes(), &self.signature)
    }

    /// The ledger's JSON representation, ready to hand to a node for
    /// broadcast. Proof-of-work is not included.
    pub fn to_json(&self, account_type: AccountType) -> Value {
        let address = |key: &PublicKey| key.to_address(account_type);
        let mut value = match &self.block {
            Block::Open(b) => json!({
                "source": b.source.to_hex(),
                "representative": address(&b.representative),
                "account": address(&b.account),
            }),
            Block::Receive(b) => json!({
                "previous": b.previous.to_hex(),
                "source": b.source.to_hex(),
            }),
            Block::Send(b) => json!({
                "previous": b.previous.to_hex(),
                "destination": address(&b.destination),
                // Legacy send blocks carry the balance as 16 bytes of hex.
                "balance": codec::to_hex(b.balance.to_be_bytes()),
            }),
            Block::Change(b) => json!({
                "previous": b.previous.to_hex(),
                "representative": address(&b.representative),
            }),
            Block::State(b) => json!({
                "account": address(&b.account),
                "previous": b.previous.to_hex(),
                "representative": address(&b.representative),
                "balance": b.balance.to_string(),
                "link": b.link.to_hex(),
                "link_as_account": address(&b.link.as_account()),
            }),
        };
        value["type"] = json!(self.block.kind().as_str());
        value["signature"] = json!(self.signature.to_hex());
        value
    }
}

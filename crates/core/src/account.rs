//! Account types: the sibling networks that share this key and block scheme.
//!
//! Every network-scoped operation takes an [`AccountType`] explicitly. All the
//! constants that differ between networks live in one [`NetworkParams`] record
//! per variant, so adding a network is a change to this file only.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Constants that distinguish one network from another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkParams {
    /// Lowercase network name.
    pub name: &'static str,
    /// Prefix written in front of every encoded address.
    pub prefix: &'static str,
    /// Older prefixes still accepted when decoding.
    pub legacy_prefixes: &'static [&'static str],
    /// Power of ten converting one whole coin into raw.
    pub unit_decimals: u32,
    /// Domain-separation preamble hashed in front of every state block.
    pub state_preamble: [u8; 32],
}

const STATE_BLOCK_TYPE: u8 = 6;

const fn state_preamble() -> [u8; 32] {
    let mut preamble = [0u8; 32];
    preamble[31] = STATE_BLOCK_TYPE;
    preamble
}

const NANO: NetworkParams = NetworkParams {
    name: "nano",
    prefix: "nano_",
    legacy_prefixes: &["xrb_"],
    unit_decimals: 30,
    state_preamble: state_preamble(),
};

const BANANO: NetworkParams = NetworkParams {
    name: "banano",
    prefix: "ban_",
    legacy_prefixes: &[],
    unit_decimals: 29,
    state_preamble: state_preamble(),
};

/// The network an address or state block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Nano,
    Banano,
}

impl AccountType {
    /// Every supported network.
    pub const ALL: [AccountType; 2] = [AccountType::Nano, AccountType::Banano];

    /// The constants record for this network.
    pub fn params(self) -> &'static NetworkParams {
        match self {
            AccountType::Nano => &NANO,
            AccountType::Banano => &BANANO,
        }
    }

    /// Prefix used when encoding addresses.
    pub fn prefix(self) -> &'static str {
        self.params().prefix
    }

    /// All prefixes accepted when decoding, canonical first.
    pub fn accepted_prefixes(self) -> impl Iterator<Item = &'static str> {
        let params = self.params();
        std::iter::once(params.prefix).chain(params.legacy_prefixes.iter().copied())
    }

    /// Strip any accepted prefix from `address`, returning the payload.
    pub fn strip_prefix(self, address: &str) -> Option<&str> {
        self.accepted_prefixes()
            .find_map(|prefix| address.strip_prefix(prefix))
    }

    /// Raw units in one whole coin.
    pub fn raw_per_unit(self) -> u128 {
        10u128.pow(self.params().unit_decimals)
    }

    pub fn state_preamble(self) -> &'static [u8; 32] {
        &self.params().state_preamble
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.params().name)
    }
}

impl FromStr for AccountType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        AccountType::ALL
            .into_iter()
            .find(|t| t.params().name == wanted || t.prefix().trim_end_matches('_') == wanted)
            .ok_or_else(|| Error::UnknownAccountType(s.to_string()))
    }
}

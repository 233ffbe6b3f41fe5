//! Block hashing and signing command.

use super::Context;
use anyhow::{bail, Context as _, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use lattice_core::{
    AccountType, Block, BlockHash, ChangeBlock, Keypair, Link, OpenBlock, PrivateKey, PublicKey,
    Raw, ReceiveBlock, SendBlock, StateBlock,
};

#[derive(Args)]
pub struct BlockArgs {
    #[command(subcommand)]
    command: BlockCommand,
}

#[derive(Subcommand)]
enum BlockCommand {
    /// Compute the hash of a block
    Hash {
        #[command(subcommand)]
        block: BlockKindArgs,
    },
    /// Sign a block and print it as JSON
    Sign {
        /// Private key of the account (hex)
        #[arg(long)]
        private_key: String,

        #[command(subcommand)]
        block: BlockKindArgs,
    },
    /// Sign an already computed block hash
    SignHash {
        /// Private key of the account (hex)
        #[arg(long)]
        private_key: String,

        /// Block hash (hex)
        hash: String,
    },
}

/// Block fields. Accounts accept an address or a 64-character hex public key.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum BlockKindArgs {
    /// Legacy open block
    Open {
        #[arg(long)]
        source: String,
        #[arg(long)]
        representative: String,
        #[arg(long)]
        account: String,
    },
    /// Legacy receive block
    Receive {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        source: String,
    },
    /// Legacy send block
    Send {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        destination: String,
        /// Balance remaining after the send, in raw
        #[arg(long)]
        balance: String,
    },
    /// Legacy change block
    Change {
        #[arg(long)]
        previous: String,
        #[arg(long)]
        representative: String,
    },
    /// State block
    State {
        #[arg(long)]
        account: String,
        /// Previous block hash, all zeros for the first block
        #[arg(long)]
        previous: String,
        #[arg(long)]
        representative: String,
        /// Balance after this block, in raw
        #[arg(long)]
        balance: String,
        /// Source hash, destination account, or zeros
        #[arg(long)]
        link: String,
    },
}

pub fn run(args: BlockArgs, ctx: &Context) -> Result<()> {
    match args.command {
        BlockCommand::Hash { block } => hash_block(ctx, block),
        BlockCommand::Sign { private_key, block } => sign_block(ctx, &private_key, block),
        BlockCommand::SignHash { private_key, hash } => sign_hash(&private_key, &hash),
    }
}

fn hash_block(ctx: &Context, args: BlockKindArgs) -> Result<()> {
    let block = build(ctx.network()?, args)?;
    println!("{}", block.hash());
    Ok(())
}

fn sign_block(ctx: &Context, private_key: &str, args: BlockKindArgs) -> Result<()> {
    let network = ctx.network()?;
    let keypair = load_keypair(private_key)?;
    let block = build(network, args)?;
    check_signer(&block, &keypair, network)?;

    let hash = block.hash();
    tracing::info!(kind = %block.kind(), %hash, "signing block");
    let signed = block.sign(&keypair);

    println!("{}", serde_json::to_string_pretty(&signed.to_json(network))?);
    eprintln!(
        "{}  Signed {} {}",
        "✓".green().bold(),
        signed.block.kind(),
        hash.to_hex().bright_yellow()
    );
    Ok(())
}

/// Open and state blocks name their account; only that account's key may sign
/// them. Legacy receive, send and change blocks carry no account to check.
fn check_signer(block: &Block, keypair: &Keypair, network: AccountType) -> Result<()> {
    let account = match block {
        Block::Open(b) => b.account,
        Block::State(b) => b.account,
        _ => return Ok(()),
    };
    if account != keypair.public_key {
        bail!(
            "Private key belongs to {}, not to the block's account {}",
            keypair.address(network),
            account.to_address(network)
        );
    }
    Ok(())
}

fn sign_hash(private_key: &str, hash: &str) -> Result<()> {
    let keypair = load_keypair(private_key)?;
    let hash = BlockHash::from_hex(hash).with_context(|| format!("Invalid block hash: {hash}"))?;
    println!("{}", keypair.sign_hash(&hash));
    Ok(())
}

fn load_keypair(private_key: &str) -> Result<Keypair> {
    let private_key = PrivateKey::from_hex(private_key).context("Invalid private key")?;
    Ok(Keypair::from_private_key(private_key))
}

fn parse_account(network: AccountType, field: &str, text: &str) -> Result<PublicKey> {
    let key = if network.strip_prefix(text).is_some() {
        PublicKey::from_address(network, text)
    } else {
        PublicKey::from_hex(text)
    };
    key.with_context(|| format!("Invalid {field}: {text}"))
}

fn parse_hash(field: &str, text: &str) -> Result<BlockHash> {
    BlockHash::from_hex(text).with_context(|| format!("Invalid {field}: {text}"))
}

fn parse_balance(text: &str) -> Result<Raw> {
    text.parse()
        .with_context(|| format!("Invalid balance: {text}"))
}

/// Turn command-line fields into a block for `network`.
fn build(network: AccountType, args: BlockKindArgs) -> Result<Block> {
    let block = match args {
        BlockKindArgs::Open {
            source,
            representative,
            account,
        } => OpenBlock {
            source: parse_hash("source", &source)?,
            representative: parse_account(network, "representative", &representative)?,
            account: parse_account(network, "account", &account)?,
        }
        .into(),
        BlockKindArgs::Receive { previous, source } => ReceiveBlock {
            previous: parse_hash("previous", &previous)?,
            source: parse_hash("source", &source)?,
        }
        .into(),
        BlockKindArgs::Send {
            previous,
            destination,
            balance,
        } => SendBlock {
            previous: parse_hash("previous", &previous)?,
            destination: parse_account(network, "destination", &destination)?,
            balance: parse_balance(&balance)?,
        }
        .into(),
        BlockKindArgs::Change {
            previous,
            representative,
        } => ChangeBlock {
            previous: parse_hash("previous", &previous)?,
            representative: parse_account(network, "representative", &representative)?,
        }
        .into(),
        BlockKindArgs::State {
            account,
            previous,
            representative,
            balance,
            link,
        } => StateBlock {
            network,
            account: parse_account(network, "account", &account)?,
            previous: parse_hash("previous", &previous)?,
            representative: parse_account(network, "representative", &representative)?,
            balance: parse_balance(&balance)?,
            link: Link::parse(network, &link).with_context(|| format!("Invalid link: {link}"))?,
        }
        .into(),
    };
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lattice_core::BlockKind;

    const PREVIOUS: &str = "991CF190094C00F0B68E2E5F75F6BEE95A2E0BD93CEAA4A6734DB9F19B728948";
    const ZERO_SEED_ACCOUNT: &str =
        "C008B814A7D269A1FA3C6528B19201A24D797912DB9996FF02A1FF356E45552B";

    fn state_args(account: &str) -> BlockKindArgs {
        BlockKindArgs::State {
            account: account.to_string(),
            previous: PREVIOUS.to_string(),
            representative: ZERO_SEED_ACCOUNT.to_string(),
            balance: "1000".to_string(),
            link: "0".repeat(64),
        }
    }

    #[test]
    fn test_build_state_from_hex_and_address() {
        let address = "ban_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7";
        let from_hex = build(AccountType::Banano, state_args(ZERO_SEED_ACCOUNT)).unwrap();
        let from_address = build(AccountType::Banano, state_args(address)).unwrap();

        assert_eq!(from_hex.kind(), BlockKind::State);
        assert_eq!(from_hex, from_address);
    }

    #[test]
    fn test_build_rejects_foreign_address() {
        // A nano_ address does not carry the banano prefix, so it is read as hex.
        let address = "nano_3i1aq1cchnmbn9x5rsbap8b15akfh7wj7pwskuzi7ahz8oq6cobd99d4r3b7";
        let err = build(AccountType::Banano, state_args(address)).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid account"));
    }

    #[test]
    fn test_build_rejects_bad_balance() {
        let args = BlockKindArgs::Send {
            previous: PREVIOUS.to_string(),
            destination: ZERO_SEED_ACCOUNT.to_string(),
            balance: "-1".to_string(),
        };
        assert!(build(AccountType::Nano, args).is_err());
    }

    #[test]
    fn test_build_legacy_blocks() {
        let receive = build(
            AccountType::Nano,
            BlockKindArgs::Receive {
                previous: PREVIOUS.to_string(),
                source: PREVIOUS.to_lowercase(),
            },
        )
        .unwrap();
        assert_eq!(receive.kind(), BlockKind::Receive);

        let change = build(
            AccountType::Nano,
            BlockKindArgs::Change {
                previous: PREVIOUS.to_string(),
                representative: ZERO_SEED_ACCOUNT.to_string(),
            },
        )
        .unwrap();
        assert_eq!(change.kind(), BlockKind::Change);
    }

    #[test]
    fn test_signer_must_own_account() {
        let owner = Keypair::from_private_key(PrivateKey::from_bytes([0u8; 32]));
        let other = Keypair::from_private_key(PrivateKey::from_bytes([7u8; 32]));
        let block = build(AccountType::Nano, state_args(&owner.public_key.to_hex())).unwrap();

        assert!(check_signer(&block, &owner, AccountType::Nano).is_ok());
        let err = check_signer(&block, &other, AccountType::Nano).unwrap_err();
        assert!(err.to_string().contains("not to the block's account"));

        let receive = build(
            AccountType::Nano,
            BlockKindArgs::Receive {
                previous: PREVIOUS.to_string(),
                source: PREVIOUS.to_string(),
            },
        )
        .unwrap();
        assert!(check_signer(&receive, &other, AccountType::Nano).is_ok());
    }

    #[test]
    fn test_sign_block_rejects_foreign_key() {
        let ctx = Context::new(Some(AccountType::Nano), crate::config::Config::default());
        let foreign = "07".repeat(32);
        assert!(sign_block(&ctx, &foreign, state_args(ZERO_SEED_ACCOUNT)).is_err());
    }

    #[test]
    fn test_sign_hash_rejects_short_hash() {
        assert!(sign_hash(&"11".repeat(32), "ABCD").is_err());
        assert!(sign_hash(&"11".repeat(32), PREVIOUS).is_ok());
    }
}

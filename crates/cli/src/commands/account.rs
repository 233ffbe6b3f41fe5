//! Account management command.

use super::Context;
use anyhow::{Context as _, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use lattice_core::{PrivateKey, PublicKey, Seed};

#[derive(Args)]
pub struct AccountArgs {
    #[command(subcommand)]
    command: AccountCommand,
}

#[derive(Subcommand)]
enum AccountCommand {
    /// Derive accounts from a seed
    Derive {
        /// Wallet seed (64 hex characters)
        #[arg(long)]
        seed: String,

        /// First account index
        #[arg(short, long, default_value = "0")]
        index: u32,

        /// Number of consecutive accounts
        #[arg(long, default_value = "1")]
        count: u32,

        /// Also print private keys
        #[arg(long)]
        show_private: bool,
    },
    /// Show the public key and address of a private key
    Public {
        /// Private key (hex)
        private_key: String,
    },
    /// Encode a public key as an address
    Encode {
        /// Public key (hex)
        public_key: String,
    },
    /// Decode an address to its public key
    Decode {
        /// Account address
        address: String,
    },
}

pub fn run(args: AccountArgs, ctx: &Context) -> Result<()> {
    match args.command {
        AccountCommand::Derive {
            seed,
            index,
            count,
            show_private,
        } => derive_accounts(ctx, &seed, index, count, show_private),
        AccountCommand::Public { private_key } => show_public(ctx, &private_key),
        AccountCommand::Encode { public_key } => encode_address(ctx, &public_key),
        AccountCommand::Decode { address } => decode_address(ctx, &address),
    }
}

fn derive_accounts(
    ctx: &Context,
    seed: &str,
    start: u32,
    count: u32,
    show_private: bool,
) -> Result<()> {
    let network = ctx.network()?;
    let seed = Seed::from_hex(seed).context("Invalid seed")?;

    println!("{}", format!("Accounts ({network}):").bold().cyan());
    println!();

    for offset in 0..count {
        let Some(index) = start.checked_add(offset) else {
            break;
        };
        let keypair = seed.keypair(index);

        println!(
            "  {} {}",
            format!("#{index}").bright_black(),
            keypair.address(network).bright_yellow()
        );
        println!("     Public Key:  {}", keypair.public_key.to_hex().bright_black());
        if show_private {
            println!(
                "     Private Key: {}",
                keypair.private_key().to_hex().bright_black()
            );
        }
    }

    println!();
    Ok(())
}

fn show_public(ctx: &Context, private_key: &str) -> Result<()> {
    let network = ctx.network()?;
    let public_key = PrivateKey::from_hex(private_key)
        .context("Invalid private key")?
        .public_key();

    println!();
    println!("  Public Key: {}", public_key.to_hex().bright_black());
    println!("  Address:    {}", public_key.to_address(network).bright_yellow());
    println!();
    Ok(())
}

fn encode_address(ctx: &Context, public_key: &str) -> Result<()> {
    let network = ctx.network()?;
    let public_key = PublicKey::from_hex(public_key)
        .with_context(|| format!("Invalid public key: {public_key}"))?;
    println!("{}", public_key.to_address(network));
    Ok(())
}

fn decode_address(ctx: &Context, address: &str) -> Result<()> {
    let network = ctx.network()?;
    let public_key = PublicKey::from_address(network, address)
        .with_context(|| format!("Invalid {network} address: {address}"))?;
    println!("{}", public_key.to_hex());
    Ok(())
}

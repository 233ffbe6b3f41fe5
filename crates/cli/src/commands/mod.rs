//! CLI commands module.

use crate::config::Config;
use anyhow::{Context as _, Result};
use clap::Subcommand;
use lattice_core::AccountType;

mod account;
mod block;
mod seed;
mod subscribe;

#[derive(Subcommand)]
pub enum Commands {
    /// Seed generation and validation
    Seed(seed::SeedArgs),
    /// Key derivation and address conversion
    Account(account::AccountArgs),
    /// Block hashing and signing
    Block(block::BlockArgs),
    /// Print a notification-service subscribe request
    Subscribe(subscribe::SubscribeArgs),
}

/// Settings shared by every command, resolved from flags and the config file.
pub struct Context {
    network: Option<AccountType>,
    pub config: Config,
}

impl Context {
    /// `network` from the command line overrides the config file.
    pub fn new(network: Option<AccountType>, config: Config) -> Self {
        Self {
            network: network.or(config.network),
            config,
        }
    }

    /// The selected network, if any.
    pub fn selected_network(&self) -> Option<AccountType> {
        self.network
    }

    /// The selected network; commands that encode or decode addresses fail
    /// without one rather than guessing.
    pub fn network(&self) -> Result<AccountType> {
        self.network.context(
            "No network selected. Pass --network <nano|banano> or set \"network\" in the config file",
        )
    }
}

pub fn run(cmd: Commands, ctx: &Context) -> Result<()> {
    match cmd {
        Commands::Seed(args) => seed::run(args, ctx),
        Commands::Account(args) => account::run(args, ctx),
        Commands::Block(args) => block::run(args, ctx),
        Commands::Subscribe(args) => subscribe::run(args, ctx),
    }
}

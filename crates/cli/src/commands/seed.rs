//! Seed command.

use super::Context;
use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use colored::Colorize;
use lattice_core::{is_valid_seed, Seed};

#[derive(Args)]
pub struct SeedArgs {
    #[command(subcommand)]
    command: SeedCommand,
}

#[derive(Subcommand)]
enum SeedCommand {
    /// Generate a new random seed
    New,
    /// Check that a seed is 64 hex characters
    Check {
        /// Seed (64 hex characters)
        seed: String,
    },
}

pub fn run(args: SeedArgs, ctx: &Context) -> Result<()> {
    match args.command {
        SeedCommand::New => new_seed(ctx),
        SeedCommand::Check { seed } => check_seed(&seed),
    }
}

fn new_seed(ctx: &Context) -> Result<()> {
    let seed = Seed::generate();

    println!("{}", "Generated new seed:".bold().cyan());
    println!();
    println!("  Seed:       {}", seed.to_hex().bright_yellow());
    if let Some(network) = ctx.selected_network() {
        println!(
            "  Account #0: {}",
            seed.keypair(0).address(network).bright_yellow()
        );
    }
    println!();
    println!(
        "{}",
        "Keep your seed safe! It controls every account derived from it."
            .yellow()
            .bold()
    );

    Ok(())
}

fn check_seed(seed: &str) -> Result<()> {
    if !is_valid_seed(seed) {
        bail!(
            "Not a valid seed: expected 64 hex characters, got {} characters",
            seed.chars().count()
        );
    }
    println!("{}  Valid seed", "✓".green().bold());
    Ok(())
}

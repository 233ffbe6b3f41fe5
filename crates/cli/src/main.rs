//! lattice CLI entry point.

use clap::Parser;
use lattice_core::AccountType;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "lattice")]
#[command(about = "Keys, addresses and block signing for block-lattice wallets", long_about = None)]
struct Cli {
    /// Network addresses belong to (nano, banano)
    #[arg(short, long, global = true)]
    network: Option<AccountType>,

    /// Configuration file [default: ./lattice.json when present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(cmd) => {
            let result = config::Config::load(cli.config.as_deref())
                .map(|config| commands::Context::new(cli.network, config))
                .and_then(|ctx| commands::run(cmd, &ctx));
            if let Err(e) = result {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("lattice - keys, addresses and block signing for block-lattice wallets");
            println!("Run 'lattice --help' for usage information.");
        }
    }
}

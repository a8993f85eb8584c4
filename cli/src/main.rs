//! Obscura CLI - vapor addresses for private deposits

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod backup;
mod commands;
mod config;
mod progress;
mod store;

#[cfg(test)]
mod integration_tests;

use store::JsonFileStore;

#[derive(Parser)]
#[command(name = "obscura")]
#[command(version = "0.1.0")]
#[command(about = "Obscura - unspendable vapor addresses for private deposits")]
#[command(long_about = r#"
Obscura derives "vapor addresses": valid ed25519 curve points with no
known private key. Tokens sent to a vapor address are unspendable until
the matching secret condenses them back into your wallet through the
settlement layer.

Quick Start:
  1. obscura vaporize --to <wallet>   Derive a deposit address
  2. (fund the address from any wallet)
  3. obscura deposit --address <va> --amount 1.5
  4. obscura condense --address <va>  Reclaim into your wallet
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the address book (default: ~/.obscura/addresses.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a new vapor address for a recipient wallet
    Vaporize {
        /// Recipient wallet address (base58, 32 bytes)
        #[arg(short, long)]
        to: String,
    },

    /// Check that an address decodes to a valid curve point
    Validate {
        /// Vapor address (base58)
        address: String,
    },

    /// List stored vapor addresses
    History {
        /// Only show addresses for this recipient wallet
        #[arg(short, long)]
        wallet: Option<String>,
    },

    /// Record an observed deposit into a vapor address
    Deposit {
        /// Vapor address that received the deposit
        #[arg(short, long)]
        address: String,

        /// Deposited amount in SOL
        #[arg(short = 'm', long)]
        amount: f64,

        /// Deposit transaction signature
        #[arg(long)]
        tx: Option<String>,
    },

    /// Condense a vapor address back into the recipient wallet
    Condense {
        /// Vapor address to condense
        #[arg(short, long)]
        address: String,

        /// Skip the settlement progress display
        #[arg(long)]
        no_progress: bool,
    },

    /// Export the address book for backup
    Export {
        /// Destination file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Encrypt the backup with a password
        #[arg(short, long)]
        encrypt: bool,
    },

    /// Import addresses from a backup file
    Import {
        /// Backup file (plain or encrypted)
        input: PathBuf,
    },

    /// Delete a vapor address record
    Forget {
        /// Vapor address to delete
        #[arg(short, long)]
        address: String,

        /// Delete even if the record is not condensed
        #[arg(long)]
        force: bool,
    },

    /// Show configuration and protocol info
    Info,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let store_path = cli.store.unwrap_or_else(config::store_file);
    log::debug!("address book: {}", store_path.display());
    let mut store = JsonFileStore::new(store_path);

    match cli.command {
        Commands::Vaporize { to } => {
            commands::vaporize::run(&mut store, &to)?;
        }
        Commands::Validate { address } => {
            commands::validate::run(&address)?;
        }
        Commands::History { wallet } => {
            commands::history::run(&store, wallet.as_deref())?;
        }
        Commands::Deposit {
            address,
            amount,
            tx,
        } => {
            commands::deposit::run(&mut store, &address, amount, tx)?;
        }
        Commands::Condense {
            address,
            no_progress,
        } => {
            commands::condense::run(&mut store, &address, no_progress)?;
        }
        Commands::Export { output, encrypt } => {
            commands::export::run(&store, output.as_deref(), encrypt)?;
        }
        Commands::Import { input } => {
            commands::import::run(&mut store, &input)?;
        }
        Commands::Forget { address, force } => {
            commands::forget::run(&mut store, &address, force)?;
        }
        Commands::Info => {
            commands::info::run(&store)?;
        }
    }

    Ok(())
}

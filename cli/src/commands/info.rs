//! Show configuration and protocol info

use anyhow::Result;
use colored::Colorize;
use obscura_core::constants::ROUND_CONSTANTS_VERSION;
use obscura_core::MAX_ATTEMPTS;

use crate::config::obscura_dir;
use crate::store::{AddressStore, JsonFileStore, VaporStatus};

pub fn run(store: &JsonFileStore) -> Result<()> {
    println!();
    println!("{}", "Obscura Configuration".yellow().bold());
    println!();

    println!("{}:", "State Directory".cyan());
    println!("  {}", obscura_dir().display());
    println!();

    println!("{}:", "Address Book".cyan());
    println!("  {}", store.path().display());
    let records = store.list(None)?;
    if records.is_empty() {
        println!("  {}", "empty - run 'obscura vaporize' to start".dimmed());
    } else {
        let count = |status: VaporStatus| records.iter().filter(|r| r.status == status).count();
        println!("  Records:   {}", records.len());
        println!("  Pending:   {}", count(VaporStatus::Pending));
        println!("  Deposited: {}", count(VaporStatus::Deposited));
        println!("  Condensed: {}", count(VaporStatus::Condensed));
    }
    println!();

    println!("{}:", "Protocol Parameters".cyan());
    println!("  Curve:           ed25519 (twisted Edwards)");
    println!("  Scalar field:    BN254 r");
    println!("  Sponge params:   v{}", ROUND_CONSTANTS_VERSION);
    println!("  Attempt budget:  {}", MAX_ATTEMPTS);
    println!();

    println!(
        "{}",
        "Vapor addresses have no private key; keep the secrets backed up.".dimmed()
    );

    Ok(())
}

//! Condense a vapor address back into the recipient wallet
//!
//! The settlement layer (Merkle accumulator + ZK proof) is an external
//! collaborator that is not wired up in this build; this command plays
//! the cosmetic progress sequence and flips the stored status.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::short_address;
use crate::progress;
use crate::store::{AddressStore, VaporStatus};

pub fn run(store: &mut impl AddressStore, address: &str, skip_progress: bool) -> Result<()> {
    let Some(record) = store.get(address)? else {
        bail!(
            "No stored vapor address {}. Run 'obscura history' to list yours.",
            short_address(address)
        );
    };

    if record.status == VaporStatus::Condensed {
        bail!("{} was already condensed", short_address(address));
    }

    println!("{}", "=== Obscura Condense ===".cyan().bold());
    println!();
    println!("Condensing {}...", short_address(address));
    println!();

    if !skip_progress {
        progress::play(progress::CONDENSE_STEPS);
        println!();
    }

    let updated = store.set_status(address, VaporStatus::Condensed, None, None)?;

    println!(
        "{} {} condensed back to {}",
        "✓".green().bold(),
        short_address(&updated.vapor_address),
        short_address(&updated.recipient)
    );
    if let Some(amount) = updated.amount {
        println!("  {} SOL reclaimed", amount);
    }

    Ok(())
}

//! Record an observed deposit into a vapor address
//!
//! Obscura never submits transactions; the user funds the address from
//! any wallet and records the deposit here for bookkeeping.

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::short_address;
use crate::store::{AddressStore, VaporStatus};

pub fn run(
    store: &mut impl AddressStore,
    address: &str,
    amount: f64,
    tx: Option<String>,
) -> Result<()> {
    if amount <= 0.0 {
        bail!("Deposit amount must be positive, got {}", amount);
    }

    let Some(record) = store.get(address)? else {
        bail!(
            "No stored vapor address {}. Run 'obscura history' to list yours.",
            short_address(address)
        );
    };

    if record.status == VaporStatus::Condensed {
        bail!("{} was already condensed", short_address(address));
    }

    let updated = store.set_status(address, VaporStatus::Deposited, Some(amount), tx)?;

    println!(
        "{} {} marked as deposited ({} SOL)",
        "✓".green(),
        short_address(&updated.vapor_address),
        amount
    );
    if let Some(ref tx) = updated.deposit_tx {
        println!("  deposit tx: {}", tx);
    }

    Ok(())
}

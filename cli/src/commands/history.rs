//! List stored vapor addresses

use anyhow::Result;
use colored::Colorize;

use crate::config::short_address;
use crate::store::{AddressStore, VaporStatus};

pub fn run(store: &impl AddressStore, wallet: Option<&str>) -> Result<()> {
    let records = store.list(wallet)?;

    if records.is_empty() {
        match wallet {
            Some(wallet) => println!("No vapor addresses stored for {}", short_address(wallet)),
            None => println!("No vapor addresses stored. Run 'obscura vaporize' to create one."),
        }
        return Ok(());
    }

    println!("{}", "=== Vapor Address History ===".cyan().bold());
    println!();

    for record in &records {
        let status = match record.status {
            VaporStatus::Pending => "pending".yellow(),
            VaporStatus::Deposited => "deposited".cyan(),
            VaporStatus::Condensed => "condensed".green(),
        };

        println!("{}  [{}]", record.vapor_address, status);
        println!("  recipient: {}", short_address(&record.recipient));
        println!("  created:   {}", record.created_at);
        if let Some(amount) = record.amount {
            println!("  amount:    {} SOL", amount);
        }
        if let Some(ref tx) = record.deposit_tx {
            println!("  deposit:   {}", short_address(tx));
        }
        println!();
    }

    let pending = records
        .iter()
        .filter(|r| r.status == VaporStatus::Pending)
        .count();
    let deposited = records
        .iter()
        .filter(|r| r.status == VaporStatus::Deposited)
        .count();
    let condensed = records
        .iter()
        .filter(|r| r.status == VaporStatus::Condensed)
        .count();

    println!(
        "{}",
        format!(
            "{} total: {} pending, {} deposited, {} condensed",
            records.len(),
            pending,
            deposited,
            condensed
        )
        .dimmed()
    );

    Ok(())
}

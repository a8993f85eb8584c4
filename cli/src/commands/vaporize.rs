//! Derive a new vapor address and record it as pending

use anyhow::Result;
use colored::Colorize;
use obscura_core::generate_vapor_address;

use crate::store::{AddressStore, VaporRecord, VaporStatus};

pub fn run(store: &mut impl AddressStore, recipient: &str) -> Result<()> {
    println!("{}", "=== Obscura Vaporize ===".cyan().bold());
    println!();
    println!("{}", "Deriving an unspendable deposit address...".cyan());

    let derived = generate_vapor_address(recipient)?;

    let record = VaporRecord {
        vapor_address: derived.address.clone(),
        recipient: derived.recipient.clone(),
        secret_hex: derived.secret_hex.clone(),
        created_at: chrono::Utc::now().to_rfc3339(),
        amount: None,
        deposit_tx: None,
        status: VaporStatus::Pending,
    };
    store.put(record)?;

    println!();
    println!("{}", "Vapor address derived!".green().bold());
    println!();
    println!("{}:", "Deposit target (share or fund this)".yellow());
    println!("  {}", derived.address);
    println!();
    println!("{}:", "Recipient wallet".yellow());
    println!("  {}", derived.recipient);
    println!();
    println!("{}:", "Secret key".yellow());
    println!("  {}", derived.secret_hex);
    println!();
    println!(
        "{}",
        "CRITICAL: Back up the secret key. No private key exists for the".red().bold()
    );
    println!(
        "{}",
        "address above - without the secret, deposited funds can never be".red().bold()
    );
    println!("{}", "materialized back to your wallet.".red().bold());
    println!();
    println!(
        "{}",
        "The address was saved to your local address book as 'pending'.".dimmed()
    );

    Ok(())
}

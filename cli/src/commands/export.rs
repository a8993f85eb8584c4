//! Export the address book for backup

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::backup::{prompt_new_password, EncryptedBackup};
use crate::store::AddressStore;

pub fn run(store: &impl AddressStore, output: Option<&Path>, encrypt: bool) -> Result<()> {
    let records = store.list(None)?;
    if records.is_empty() {
        bail!("Nothing to export: the address book is empty");
    }

    if encrypt {
        let Some(output) = output else {
            bail!("--encrypt requires --output <file>");
        };

        println!(
            "{}",
            "Choose a password for the encrypted backup.".cyan()
        );
        println!(
            "{}",
            "Requirements: 8+ chars, uppercase, lowercase, and numbers".dimmed()
        );
        let password = prompt_new_password("Enter password: ")?;

        let backup = EncryptedBackup::encrypt(&records, &password)?;
        let json = serde_json::to_string_pretty(&backup)?;
        fs::write(output, json).context("Failed to write backup file")?;

        println!(
            "{} {} record(s) exported (encrypted) to {:?}",
            "✓".green(),
            records.len(),
            output
        );
    } else {
        let json = serde_json::to_string_pretty(&records)?;
        match output {
            Some(output) => {
                fs::write(output, json).context("Failed to write backup file")?;
                println!(
                    "{} {} record(s) exported to {:?}",
                    "✓".green(),
                    records.len(),
                    output
                );
                println!(
                    "{}",
                    "Warning: the backup contains plaintext secrets. Consider --encrypt.".yellow()
                );
            }
            None => println!("{}", json),
        }
    }

    Ok(())
}

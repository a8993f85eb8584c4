//! Import addresses from a backup file
//!
//! Accepts both plain and encrypted backups, telling them apart by their
//! JSON shape. Records whose vapor address is already stored are skipped.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::backup::{prompt_password, EncryptedBackup};
use crate::store::{JsonFileStore, VaporRecord};

pub fn run(store: &mut JsonFileStore, input: &Path) -> Result<()> {
    let json = fs::read_to_string(input).context("Failed to read backup file")?;

    let records: Vec<VaporRecord> = if let Ok(encrypted) =
        serde_json::from_str::<EncryptedBackup>(&json)
    {
        let password = prompt_password("Backup password: ")?;
        encrypted.decrypt(&password)?
    } else {
        serde_json::from_str(&json).context("Failed to parse backup file")?
    };

    let total = records.len();
    let added = store.merge(records)?;

    println!(
        "{} imported {} new record(s) ({} duplicate(s) skipped)",
        "✓".green(),
        added,
        total - added
    );

    Ok(())
}

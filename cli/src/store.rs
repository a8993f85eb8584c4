//! Local persistence for vapor address records.
//!
//! Records move through a pending -> deposited -> condensed lifecycle
//! driven entirely by the CLI commands; the derivation engine never reads
//! or writes this state. The store is an explicit interface injected into
//! commands so tests can run against a throwaway file.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Lifecycle of a vapor address record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VaporStatus {
    /// Derived; nothing deposited yet.
    Pending,
    /// A deposit was observed on the address.
    Deposited,
    /// Funds were materialized back to the recipient wallet.
    Condensed,
}

impl std::fmt::Display for VaporStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VaporStatus::Pending => write!(f, "pending"),
            VaporStatus::Deposited => write!(f, "deposited"),
            VaporStatus::Condensed => write!(f, "condensed"),
        }
    }
}

/// One stored vapor address with its reclaim secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaporRecord {
    /// The unspendable deposit address (base58).
    pub vapor_address: String,
    /// The recipient wallet the funds eventually materialize to.
    pub recipient: String,
    /// The reclaim secret, "0x" + 64 hex digits. Lost secret, lost funds.
    pub secret_hex: String,
    /// RFC3339 creation timestamp.
    pub created_at: String,
    /// Deposited amount in SOL, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    /// Deposit transaction signature, once known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_tx: Option<String>,
    pub status: VaporStatus,
}

impl Drop for VaporRecord {
    fn drop(&mut self) {
        self.secret_hex.zeroize();
    }
}

/// Store interface: put/get/list by owner key plus lifecycle updates.
pub trait AddressStore {
    /// Insert a new record. Fails on a duplicate vapor address.
    fn put(&mut self, record: VaporRecord) -> Result<()>;

    /// Fetch one record by vapor address.
    fn get(&self, vapor_address: &str) -> Result<Option<VaporRecord>>;

    /// All records, or only those owned by `owner` (the recipient wallet).
    fn list(&self, owner: Option<&str>) -> Result<Vec<VaporRecord>>;

    /// Update a record's lifecycle state. `amount` and `deposit_tx`
    /// overwrite when Some and are left untouched when None. Returns the
    /// updated record; fails if the address is unknown.
    fn set_status(
        &mut self,
        vapor_address: &str,
        status: VaporStatus,
        amount: Option<f64>,
        deposit_tx: Option<String>,
    ) -> Result<VaporRecord>;

    /// Delete a record. Returns false if the address was not present.
    fn remove(&mut self, vapor_address: &str) -> Result<bool>;
}

/// JSON-file store: the whole record list in one pretty-printed file with
/// restrictive permissions.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn load(&self) -> Result<Vec<VaporRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).context("Failed to read address book")?;
        serde_json::from_str(&json).context("Failed to parse address book")
    }

    fn save(&self, records: &[VaporRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create storage directory")?;
        }

        let json = serde_json::to_string_pretty(records)?;

        // The file holds reclaim secrets; keep it owner-readable only.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::write(&self.path, &json)?;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        #[cfg(not(unix))]
        {
            fs::write(&self.path, &json)?;
        }

        Ok(())
    }

    /// Merge imported records, skipping vapor addresses already present.
    /// Returns how many new records were added.
    pub fn merge(&mut self, incoming: Vec<VaporRecord>) -> Result<usize> {
        let mut records = self.load()?;
        let existing: std::collections::HashSet<String> =
            records.iter().map(|r| r.vapor_address.clone()).collect();

        let fresh: Vec<VaporRecord> = incoming
            .into_iter()
            .filter(|r| !existing.contains(&r.vapor_address))
            .collect();
        let added = fresh.len();

        records.extend(fresh);
        self.save(&records)?;
        Ok(added)
    }
}

impl AddressStore for JsonFileStore {
    fn put(&mut self, record: VaporRecord) -> Result<()> {
        let mut records = self.load()?;
        if records
            .iter()
            .any(|r| r.vapor_address == record.vapor_address)
        {
            bail!("vapor address {} is already stored", record.vapor_address);
        }
        records.push(record);
        self.save(&records)
    }

    fn get(&self, vapor_address: &str) -> Result<Option<VaporRecord>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|r| r.vapor_address == vapor_address))
    }

    fn list(&self, owner: Option<&str>) -> Result<Vec<VaporRecord>> {
        let records = self.load()?;
        Ok(match owner {
            Some(owner) => records
                .into_iter()
                .filter(|r| r.recipient == owner)
                .collect(),
            None => records,
        })
    }

    fn set_status(
        &mut self,
        vapor_address: &str,
        status: VaporStatus,
        amount: Option<f64>,
        deposit_tx: Option<String>,
    ) -> Result<VaporRecord> {
        let mut records = self.load()?;
        let record = records
            .iter_mut()
            .find(|r| r.vapor_address == vapor_address)
            .with_context(|| format!("no stored vapor address {}", vapor_address))?;

        record.status = status;
        if amount.is_some() {
            record.amount = amount;
        }
        if deposit_tx.is_some() {
            record.deposit_tx = deposit_tx;
        }
        let updated = record.clone();

        self.save(&records)?;
        Ok(updated)
    }

    fn remove(&mut self, vapor_address: &str) -> Result<bool> {
        let mut records = self.load()?;
        let before = records.len();
        records.retain(|r| r.vapor_address != vapor_address);
        let removed = records.len() != before;
        if removed {
            self.save(&records)?;
        }
        Ok(removed)
    }
}

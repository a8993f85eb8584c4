//! Paths and display helpers for the Obscura CLI.

use std::path::PathBuf;

/// Default directory for Obscura state
const OBSCURA_DIR: &str = ".obscura";
const STORE_FILE: &str = "addresses.json";

/// Get the Obscura directory path
pub fn obscura_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Could not find home directory")
        .join(OBSCURA_DIR)
}

/// Get the address book path
pub fn store_file() -> PathBuf {
    obscura_dir().join(STORE_FILE)
}

/// Truncate a base58 address for table display
pub fn short_address(address: &str) -> String {
    // Base58 is ASCII; anything else is shown untouched.
    if address.len() <= 12 || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}…{}", &address[..6], &address[address.len() - 4..])
}

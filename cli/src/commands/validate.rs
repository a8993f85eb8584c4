//! Check that an address is a valid curve point

use anyhow::{bail, Result};
use colored::Colorize;
use obscura_core::validate_vapor_address;

use crate::config::short_address;

pub fn run(address: &str) -> Result<()> {
    if validate_vapor_address(address) {
        println!(
            "{} {} {}",
            "✓".green(),
            short_address(address),
            "decodes to a valid curve point".green()
        );
        Ok(())
    } else {
        bail!(
            "{} does not decode to a valid compressed curve point",
            short_address(address)
        );
    }
}

//! Delete a vapor address record

use anyhow::{bail, Result};
use colored::Colorize;

use crate::config::short_address;
use crate::store::{AddressStore, VaporStatus};

pub fn run(store: &mut impl AddressStore, address: &str, force: bool) -> Result<()> {
    let Some(record) = store.get(address)? else {
        bail!("No stored vapor address {}", short_address(address));
    };

    // Forgetting a funded, uncondensed address destroys the only path to
    // the deposited tokens.
    if record.status != VaporStatus::Condensed && !force {
        bail!(
            "{} is {} - deleting its record destroys the reclaim secret.\n\
             Export a backup first, or pass --force to delete anyway.",
            short_address(address),
            record.status
        );
    }

    store.remove(address)?;
    println!("{} {} forgotten", "✓".green(), short_address(address));

    Ok(())
}

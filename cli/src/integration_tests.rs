//! Integration tests for the Obscura CLI
//!
//! These tests verify complete end-to-end flows against a real file
//! store in a temp dir:
//! - Vaporize → Deposit → Condense lifecycle
//! - Export → Import round trips
//! - Error handling and edge cases
//!
//! Interactive flows (password prompts) are covered by the backup module
//! tests; everything else runs through the same `run` functions the
//! binary dispatches to.

#[cfg(test)]
mod e2e_tests {
    use tempfile::tempdir;

    use crate::commands;
    use crate::store::{AddressStore, JsonFileStore, VaporStatus};

    fn recipient() -> String {
        bs58::encode(&[7u8; 32]).into_string()
    }

    #[test]
    fn vaporize_deposit_condense_lifecycle() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        // Derive and persist.
        commands::vaporize::run(&mut store, &recipient()).unwrap();
        let records = store.list(Some(recipient().as_str())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, VaporStatus::Pending);

        let address = records[0].vapor_address.clone();
        assert!(obscura_core::validate_vapor_address(&address));

        // Record a deposit.
        commands::deposit::run(&mut store, &address, 1.25, Some("txsig".into())).unwrap();
        let record = store.get(&address).unwrap().unwrap();
        assert_eq!(record.status, VaporStatus::Deposited);
        assert_eq!(record.amount, Some(1.25));

        // Condense (progress display skipped).
        commands::condense::run(&mut store, &address, true).unwrap();
        let record = store.get(&address).unwrap().unwrap();
        assert_eq!(record.status, VaporStatus::Condensed);
        assert_eq!(record.amount, Some(1.25));

        // Condensing twice is refused.
        assert!(commands::condense::run(&mut store, &address, true).is_err());
    }

    #[test]
    fn deposit_requires_known_address_and_positive_amount() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        assert!(commands::deposit::run(&mut store, "unknown", 1.0, None).is_err());

        commands::vaporize::run(&mut store, &recipient()).unwrap();
        let address = store.list(None).unwrap()[0].vapor_address.clone();
        assert!(commands::deposit::run(&mut store, &address, 0.0, None).is_err());
        assert!(commands::deposit::run(&mut store, &address, -1.0, None).is_err());
    }

    #[test]
    fn vaporize_rejects_bad_recipient() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        assert!(commands::vaporize::run(&mut store, "not-a-wallet").is_err());
        assert!(store.list(None).unwrap().is_empty());
    }

    #[test]
    fn repeated_vaporize_yields_distinct_addresses() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        for _ in 0..5 {
            commands::vaporize::run(&mut store, &recipient()).unwrap();
        }

        let records = store.list(None).unwrap();
        assert_eq!(records.len(), 5);
        let mut addresses: Vec<_> = records.iter().map(|r| r.vapor_address.clone()).collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), 5, "every derivation must be unique");
    }

    #[test]
    fn export_import_round_trip() {
        let dir = tempdir().unwrap();
        let mut source = JsonFileStore::new(dir.path().join("source.json"));

        commands::vaporize::run(&mut source, &recipient()).unwrap();
        commands::vaporize::run(&mut source, &recipient()).unwrap();

        let backup_path = dir.path().join("backup.json");
        commands::export::run(&source, Some(backup_path.as_path()), false).unwrap();

        // Import into a fresh store; both records are new.
        let mut target = JsonFileStore::new(dir.path().join("target.json"));
        commands::import::run(&mut target, &backup_path).unwrap();
        assert_eq!(target.list(None).unwrap().len(), 2);

        // Importing again is a no-op.
        commands::import::run(&mut target, &backup_path).unwrap();
        assert_eq!(target.list(None).unwrap().len(), 2);

        // Secrets survive the round trip.
        for record in source.list(None).unwrap() {
            let imported = target.get(&record.vapor_address).unwrap().unwrap();
            assert_eq!(imported.secret_hex, record.secret_hex);
            assert_eq!(imported.recipient, record.recipient);
        }
    }

    #[test]
    fn forget_protects_uncondensed_records() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        commands::vaporize::run(&mut store, &recipient()).unwrap();
        let address = store.list(None).unwrap()[0].vapor_address.clone();

        // Pending record: refused without --force.
        assert!(commands::forget::run(&mut store, &address, false).is_err());
        assert!(store.get(&address).unwrap().is_some());

        // --force deletes.
        commands::forget::run(&mut store, &address, true).unwrap();
        assert!(store.get(&address).unwrap().is_none());
    }

    #[test]
    fn validate_command_matches_engine() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("addresses.json"));

        commands::vaporize::run(&mut store, &recipient()).unwrap();
        let address = store.list(None).unwrap()[0].vapor_address.clone();

        assert!(commands::validate::run(&address).is_ok());
        assert!(commands::validate::run("garbage").is_err());
    }
}

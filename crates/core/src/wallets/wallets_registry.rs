//! In-memory wallet registry.
//!
//! Storage lives for the process lifetime only. The write lock serializes
//! concurrent add/remove calls; identifiers are random uuids rather than
//! anything derived from the collection, so deletions and concurrent
//! writers cannot produce a collision.

use std::sync::RwLock;

use uuid::Uuid;

use super::wallets_model::{NewWallet, WalletRecord};
use super::wallets_traits::WalletRegistryTrait;
use crate::errors::{Error, Result};

/// In-memory implementation of [`WalletRegistryTrait`].
#[derive(Default)]
pub struct InMemoryWalletRegistry {
    records: RwLock<Vec<WalletRecord>>,
}

impl InMemoryWalletRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WalletRegistryTrait for InMemoryWalletRegistry {
    fn list(&self) -> Result<Vec<WalletRecord>> {
        let records = self
            .records
            .read()
            .map_err(|e| Error::Unexpected(format!("registry lock poisoned: {e}")))?;
        Ok(records.clone())
    }

    fn add(&self, new_wallet: NewWallet) -> Result<WalletRecord> {
        let record = WalletRecord {
            id: Uuid::new_v4().to_string(),
            name: new_wallet.name,
            asset_kind: new_wallet.asset_kind,
            address: new_wallet.address,
        };

        let mut records = self
            .records
            .write()
            .map_err(|e| Error::Unexpected(format!("registry lock poisoned: {e}")))?;
        records.push(record.clone());

        Ok(record)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut records = self
            .records
            .write()
            .map_err(|e| Error::Unexpected(format!("registry lock poisoned: {e}")))?;

        let before = records.len();
        records.retain(|record| record.id != id);

        Ok(records.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallets::AssetKind;

    fn new_wallet(name: &str, address: &str) -> NewWallet {
        NewWallet {
            name: name.to_string(),
            address: address.to_string(),
            asset_kind: AssetKind::Bitcoin,
        }
    }

    #[test]
    fn test_add_then_list_reflects_entry_once() {
        let registry = InMemoryWalletRegistry::new();
        let added = registry.add(new_wallet("Savings", "bc1qsave")).unwrap();

        let listed = registry.list().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0], added);
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let registry = InMemoryWalletRegistry::new();
        for i in 0..50 {
            registry
                .add(new_wallet(&format!("w{i}"), &format!("addr{i}")))
                .unwrap();
        }

        let listed = registry.list().unwrap();
        let mut ids: Vec<_> = listed.iter().map(|r| r.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 50);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let registry = InMemoryWalletRegistry::new();
        let a = registry.add(new_wallet("a", "addr-a")).unwrap();
        let b = registry.add(new_wallet("b", "addr-b")).unwrap();
        let c = registry.add(new_wallet("c", "addr-c")).unwrap();

        let listed = registry.list().unwrap();
        assert_eq!(
            listed.iter().map(|r| &r.id).collect::<Vec<_>>(),
            vec![&a.id, &b.id, &c.id]
        );
    }

    #[test]
    fn test_remove_existing_record() {
        let registry = InMemoryWalletRegistry::new();
        let added = registry.add(new_wallet("Savings", "bc1qsave")).unwrap();

        assert!(registry.remove(&added.id).unwrap());
        assert!(registry.list().unwrap().is_empty());
    }

    #[test]
    fn test_remove_nonexistent_leaves_count_unchanged() {
        let registry = InMemoryWalletRegistry::new();
        registry.add(new_wallet("Savings", "bc1qsave")).unwrap();

        assert!(!registry.remove("no-such-id").unwrap());
        assert_eq!(registry.list().unwrap().len(), 1);
    }

    #[test]
    fn test_ids_survive_interleaved_deletions() {
        // The length-derived id scheme this replaces would reuse ids here.
        let registry = InMemoryWalletRegistry::new();
        let first = registry.add(new_wallet("first", "addr1")).unwrap();
        registry.remove(&first.id).unwrap();
        let second = registry.add(new_wallet("second", "addr2")).unwrap();

        assert_ne!(first.id, second.id);
    }
}

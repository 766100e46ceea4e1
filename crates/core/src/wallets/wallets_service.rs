use log::debug;
use std::sync::Arc;

use super::wallets_model::{NewWallet, WalletRecord};
use super::wallets_traits::{WalletRegistryTrait, WalletServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing the tracked wallet list.
pub struct WalletService {
    registry: Arc<dyn WalletRegistryTrait>,
}

impl WalletService {
    /// Creates a new WalletService instance
    pub fn new(registry: Arc<dyn WalletRegistryTrait>) -> Self {
        Self { registry }
    }
}

impl WalletServiceTrait for WalletService {
    /// Registers a new wallet after validation
    fn add_wallet(&self, new_wallet: NewWallet) -> Result<WalletRecord> {
        new_wallet.validate()?;
        debug!(
            "Adding wallet '{}' for address {}",
            new_wallet.name, new_wallet.address
        );
        self.registry.add(new_wallet)
    }

    /// Removes a wallet by its ID
    fn remove_wallet(&self, id: &str) -> Result<()> {
        if self.registry.remove(id)? {
            Ok(())
        } else {
            Err(Error::NotFound(format!("Wallet with ID {id} not found.")))
        }
    }

    /// Lists all tracked wallets
    fn list_wallets(&self) -> Result<Vec<WalletRecord>> {
        self.registry.list()
    }
}

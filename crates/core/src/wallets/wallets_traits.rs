//! Wallet registry and service traits.
//!
//! These traits define the contract for wallet operations without any
//! storage-specific types, allowing for different storage implementations.

use super::wallets_model::{NewWallet, WalletRecord};
use crate::errors::Result;

/// Trait defining the contract for the wallet registry.
///
/// The registry holds the mutable collection of wallet records. Operations
/// are synchronous and in-process; implementations with shared mutable
/// storage must serialize concurrent writers so identifiers stay unique.
pub trait WalletRegistryTrait: Send + Sync {
    /// Lists all wallet records in insertion order.
    fn list(&self) -> Result<Vec<WalletRecord>>;

    /// Adds a new wallet and returns the stored record with its
    /// generated identifier.
    fn add(&self, new_wallet: NewWallet) -> Result<WalletRecord>;

    /// Removes a wallet by id. Returns whether a record was found.
    fn remove(&self, id: &str) -> Result<bool>;
}

/// Trait defining the contract for wallet service operations.
///
/// The service layer handles input validation on top of the registry.
pub trait WalletServiceTrait: Send + Sync {
    /// Registers a new wallet after validating its fields.
    fn add_wallet(&self, new_wallet: NewWallet) -> Result<WalletRecord>;

    /// Removes a wallet; unknown ids surface as [`crate::Error::NotFound`].
    fn remove_wallet(&self, id: &str) -> Result<()>;

    /// Lists all tracked wallets in insertion order.
    fn list_wallets(&self) -> Result<Vec<WalletRecord>>;
}

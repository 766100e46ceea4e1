//! Wallets module - domain models, registry, service, and traits.

mod wallets_model;
mod wallets_registry;
mod wallets_service;
mod wallets_traits;

// Re-export the public interface
pub use wallets_model::{AssetKind, NewWallet, WalletRecord};
pub use wallets_registry::InMemoryWalletRegistry;
pub use wallets_service::WalletService;
pub use wallets_traits::{WalletRegistryTrait, WalletServiceTrait};

//! Wallet domain models.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The kind of chain asset a wallet tracks.
///
/// Only `Bitcoin` participates in balance aggregation today; unrecognized
/// kinds round-trip untouched so records added by newer clients are not
/// rejected or mangled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum AssetKind {
    #[default]
    Bitcoin,
    Other(String),
}

impl From<String> for AssetKind {
    fn from(s: String) -> Self {
        match s.as_str() {
            "bitcoin" => AssetKind::Bitcoin,
            _ => AssetKind::Other(s),
        }
    }
}

impl From<AssetKind> for String {
    fn from(kind: AssetKind) -> Self {
        match kind {
            AssetKind::Bitcoin => "bitcoin".to_string(),
            AssetKind::Other(s) => s,
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::Bitcoin => write!(f, "bitcoin"),
            AssetKind::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Domain model representing a tracked wallet.
///
/// Immutable for the lifetime of a request; created by an add operation
/// and removed by a delete operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletRecord {
    /// Opaque identifier, unique within the registry.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The chain asset this wallet holds.
    pub asset_kind: AssetKind,
    /// Chain address string. Not format-validated; the ledger-index
    /// service is the authority on what resolves.
    pub address: String,
}

/// Input model for registering a new wallet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWallet {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub asset_kind: AssetKind,
}

impl NewWallet {
    /// Validates the new wallet data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(
                "Wallet name cannot be empty".to_string(),
            ));
        }
        if self.address.trim().is_empty() {
            return Err(Error::Validation(
                "Wallet address cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

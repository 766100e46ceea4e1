//! Wire models for the HTTP API.

use serde::{Deserialize, Serialize};

use coinfolio_core::wallets as core_wallets;
use coinfolio_core::EnrichedPortfolioEntry;

/// A tracked wallet as it appears on the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    pub id: String,
    pub name: String,
    pub asset_kind: String,
    pub address: String,
}

impl From<core_wallets::WalletRecord> for Wallet {
    fn from(w: core_wallets::WalletRecord) -> Self {
        Self {
            id: w.id,
            name: w.name,
            asset_kind: w.asset_kind.to_string(),
            address: w.address,
        }
    }
}

/// A wallet with its computed fiat balance, the payload of
/// `GET /api/portfolios`.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioEntry {
    pub id: String,
    pub name: String,
    pub asset_kind: String,
    pub address: String,
    /// Present only for wallets of a supported asset kind whose balance
    /// lookup succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_fiat: Option<String>,
}

impl From<EnrichedPortfolioEntry> for PortfolioEntry {
    fn from(e: EnrichedPortfolioEntry) -> Self {
        Self {
            id: e.wallet.id,
            name: e.wallet.name,
            asset_kind: e.wallet.asset_kind.to_string(),
            address: e.wallet.address,
            balance_fiat: e.balance_fiat,
        }
    }
}

/// Body of `POST /api/addWallet`.
///
/// `balance` is accepted for compatibility with older clients but ignored:
/// balances are always server-computed from the live chain state.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddWalletRequest {
    pub name: String,
    pub address: String,
    #[serde(default)]
    #[allow(dead_code)]
    pub balance: Option<serde_json::Value>,
}

/// Response of `POST /api/addWallet`: the full updated list plus a
/// confirmation message.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AddWalletResponse {
    pub portfolios: Vec<Wallet>,
    pub message: String,
}

/// Plain confirmation or error payload.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

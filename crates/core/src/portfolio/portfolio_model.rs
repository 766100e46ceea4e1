//! Portfolio output models.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use coinfolio_market_data::ChainBalanceSnapshot;

use crate::wallets::WalletRecord;

/// Satoshis per whole unit of the base asset.
const SATS_PER_COIN: Decimal = dec!(100_000_000);

/// A wallet record augmented with a computed fiat balance for presentation.
///
/// Recomputed on every request and never cached. Wallets of unsupported
/// asset kinds carry no `balance_fiat` field at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPortfolioEntry {
    #[serde(flatten)]
    pub wallet: WalletRecord,
    /// Fiat balance formatted to two decimal places with a currency prefix,
    /// e.g. `"$50000.00"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance_fiat: Option<String>,
}

impl EnrichedPortfolioEntry {
    /// Entry for a wallet whose balance lookup succeeded.
    pub fn enriched(wallet: WalletRecord, snapshot: &ChainBalanceSnapshot, price: Decimal) -> Self {
        Self {
            wallet,
            balance_fiat: Some(format_fiat(snapshot, price)),
        }
    }

    /// Entry passed through untouched: unsupported asset kind, or a
    /// failed lookup reported separately via the warnings channel.
    pub fn passthrough(wallet: WalletRecord) -> Self {
        Self {
            wallet,
            balance_fiat: None,
        }
    }
}

/// Per-entry enrichment failure, surfaced alongside the entries rather
/// than aborting the batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichmentWarning {
    /// Identifier of the wallet whose lookup failed.
    pub id: String,
    /// Human-readable cause.
    pub message: String,
}

/// Result of one aggregation call: the order-preserving entries plus any
/// per-entry warnings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPortfolio {
    pub entries: Vec<EnrichedPortfolioEntry>,
    pub warnings: Vec<EnrichmentWarning>,
}

/// Converts a satoshi-denominated total to fiat at the given price and
/// formats it to exactly two decimal digits with a `$` prefix.
fn format_fiat(snapshot: &ChainBalanceSnapshot, price: Decimal) -> String {
    let whole_units = Decimal::from(snapshot.total_sats()) / SATS_PER_COIN;
    let mut fiat = (whole_units * price)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    fiat.rescale(2);
    format!("${fiat}")
}

//! Wire-facing domain models shared by the upstream clients.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single fiat price quote for one unit of the base asset.
///
/// Consumed once per aggregation call and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Fiat units per one unit of the base asset. Always positive.
    pub value: Decimal,
    /// When the quote was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl PriceQuote {
    pub fn new(value: Decimal) -> Self {
        Self {
            value,
            fetched_at: Utc::now(),
        }
    }
}

/// Funded-minus-spent totals for a chain address, in satoshis.
///
/// Derived entirely from the upstream response and never stored. Either
/// bucket may be momentarily negative when a provider's index reflects an
/// in-flight reorganization; callers must tolerate this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainBalanceSnapshot {
    /// Confirmed balance: on-chain funded minus spent.
    pub confirmed_sats: i64,
    /// Unconfirmed balance: mempool funded minus spent.
    pub unconfirmed_sats: i64,
}

impl ChainBalanceSnapshot {
    /// Total balance across confirmed and unconfirmed buckets.
    pub fn total_sats(&self) -> i64 {
        self.confirmed_sats + self.unconfirmed_sats
    }
}

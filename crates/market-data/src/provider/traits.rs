//! Provider trait definitions.
//!
//! These traits are the seam between the aggregation pipeline and the
//! concrete upstream clients, so the pipeline can be tested against mocks.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{ChainBalanceSnapshot, PriceQuote};

/// Trait for price oracle clients.
///
/// Implementations make a single outbound call per invocation and must not
/// block longer than their configured request timeout.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "COINGECKO".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch the latest fiat price for one unit of `base_asset`.
    ///
    /// A failed call (timeout, non-2xx, malformed body) surfaces as
    /// [`MarketDataError::PriceUnavailable`]. No retries are performed.
    async fn latest_price(&self, base_asset: &str) -> Result<PriceQuote, MarketDataError>;
}

/// Trait for ledger-index balance clients.
///
/// Calls for different addresses are independent and may run concurrently.
#[async_trait]
pub trait BalanceProvider: Send + Sync {
    /// Unique identifier for this provider, e.g. "MEMPOOL".
    fn id(&self) -> &'static str;

    /// Fetch the confirmed/unconfirmed balance totals for `address`.
    ///
    /// No address-format validation is performed; malformed addresses are
    /// forwarded upstream and any error comes back as
    /// [`MarketDataError::BalanceLookupFailed`].
    async fn address_balance(&self, address: &str)
        -> Result<ChainBalanceSnapshot, MarketDataError>;
}

//! The balance aggregation pipeline.
//!
//! Given a snapshot of wallet records, fetch the reference price once and
//! every supported wallet's chain balance concurrently, then merge the
//! results into one order-preserving payload.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future::join_all;
use futures::join;
use log::{debug, warn};

use coinfolio_market_data::{BalanceProvider, PriceProvider};

use super::portfolio_model::{EnrichedPortfolio, EnrichedPortfolioEntry, EnrichmentWarning};
use crate::errors::{Error, Result};
use crate::wallets::{AssetKind, WalletRecord};

#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Enriches a wallet snapshot with live fiat balances.
    ///
    /// Fails as a whole only when the reference price is unavailable.
    /// Per-wallet lookup failures surface in the warnings list and leave
    /// the affected entry without a balance; output order always equals
    /// input order.
    async fn enrich(&self, wallets: Vec<WalletRecord>) -> Result<EnrichedPortfolio>;
}

pub struct PortfolioService {
    price_provider: Arc<dyn PriceProvider>,
    balance_provider: Arc<dyn BalanceProvider>,
    base_asset: String,
}

impl PortfolioService {
    pub fn new(
        price_provider: Arc<dyn PriceProvider>,
        balance_provider: Arc<dyn BalanceProvider>,
        base_asset: impl Into<String>,
    ) -> Self {
        Self {
            price_provider,
            balance_provider,
            base_asset: base_asset.into(),
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn enrich(&self, wallets: Vec<WalletRecord>) -> Result<EnrichedPortfolio> {
        debug!("Starting portfolio enrichment for {} wallets", wallets.len());

        // The price call and the balance batch are independent; run them
        // concurrently and join per wallet afterwards. `join_all` yields
        // results in input order no matter which lookup finishes first.
        let price_fut = self.price_provider.latest_price(&self.base_asset);
        let lookup_futs = join_all(wallets.iter().map(|wallet| {
            let balance_provider = &self.balance_provider;
            async move {
                match wallet.asset_kind {
                    AssetKind::Bitcoin => {
                        Some(balance_provider.address_balance(&wallet.address).await)
                    }
                    AssetKind::Other(_) => None,
                }
            }
        }));

        let (price_result, lookups) = join!(price_fut, lookup_futs);

        // A missing price makes every fiat balance incomputable; no
        // partial results.
        let quote = price_result.map_err(|e| Error::Aggregation(e.to_string()))?;

        let mut entries = Vec::with_capacity(wallets.len());
        let mut warnings = Vec::new();

        for (wallet, lookup) in wallets.into_iter().zip(lookups) {
            match lookup {
                None => entries.push(EnrichedPortfolioEntry::passthrough(wallet)),
                Some(Ok(snapshot)) => {
                    entries.push(EnrichedPortfolioEntry::enriched(
                        wallet,
                        &snapshot,
                        quote.value,
                    ));
                }
                Some(Err(e)) => {
                    warn!("Balance lookup failed for wallet {}: {}", wallet.id, e);
                    warnings.push(EnrichmentWarning {
                        id: wallet.id.clone(),
                        message: e.to_string(),
                    });
                    entries.push(EnrichedPortfolioEntry::passthrough(wallet));
                }
            }
        }

        debug!(
            "Finished portfolio enrichment: {} entries, {} warnings",
            entries.len(),
            warnings.len()
        );

        Ok(EnrichedPortfolio { entries, warnings })
    }
}

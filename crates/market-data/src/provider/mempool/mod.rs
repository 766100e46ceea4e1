//! mempool.space ledger-index balance client.
//!
//! Fetches aggregated funded/spent totals for an address from the Esplora
//! address endpoint:
//!
//! `GET {base}/api/address/{address}`
//!
//! The response shape is
//! `{ chain_stats: { funded_txo_sum, spent_txo_sum }, mempool_stats: {...} }`
//! and balances are computed as `funded - spent` per bucket, exactly as
//! reported upstream.
//!
//! Transient upstream failures (timeout, 429, 5xx) are retried once with a
//! short backoff; the call is an idempotent GET.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::Deserialize;

use crate::errors::{MarketDataError, RetryClass};
use crate::models::ChainBalanceSnapshot;
use crate::provider::BalanceProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "MEMPOOL";

/// Default HTTP request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Delay before the single retry of a transient failure
const RETRY_BACKOFF: Duration = Duration::from_millis(250);

/// Funded/spent totals for one bucket of the address stats response.
#[derive(Debug, Deserialize)]
struct TxoStats {
    funded_txo_sum: i64,
    spent_txo_sum: i64,
}

/// Address stats response from the Esplora API.
#[derive(Debug, Deserialize)]
struct AddressStatsResponse {
    chain_stats: TxoStats,
    mempool_stats: TxoStats,
}

impl From<AddressStatsResponse> for ChainBalanceSnapshot {
    fn from(stats: AddressStatsResponse) -> Self {
        Self {
            confirmed_sats: stats.chain_stats.funded_txo_sum - stats.chain_stats.spent_txo_sum,
            unconfirmed_sats: stats.mempool_stats.funded_txo_sum
                - stats.mempool_stats.spent_txo_sum,
        }
    }
}

/// mempool.space address balance client.
pub struct MempoolProvider {
    client: Client,
    base_url: String,
}

impl MempoolProvider {
    /// Create a new client against `base_url` (e.g. `https://mempool.space`)
    /// with the given request timeout.
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Self {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// One request/decode attempt, with errors classified for the retry loop.
    async fn fetch_once(&self, address: &str) -> Result<ChainBalanceSnapshot, MarketDataError> {
        let url = format!("{}/api/address/{}", self.base_url, address);

        let response = self.client.get(&url).send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(MarketDataError::RateLimited {
                provider: PROVIDER_ID.to_string(),
            });
        }
        if !status.is_success() {
            return Err(MarketDataError::UpstreamStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let stats: AddressStatsResponse =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::BalanceLookupFailed {
                    address: address.to_string(),
                    message: format!("malformed response body: {e}"),
                })?;

        Ok(stats.into())
    }
}

#[async_trait]
impl BalanceProvider for MempoolProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn address_balance(
        &self,
        address: &str,
    ) -> Result<ChainBalanceSnapshot, MarketDataError> {
        let result = match self.fetch_once(address).await {
            Ok(snapshot) => Ok(snapshot),
            Err(e) if e.retry_class() == RetryClass::WithBackoff => {
                debug!("retrying balance lookup for {address} after transient error: {e}");
                tokio::time::sleep(RETRY_BACKOFF).await;
                self.fetch_once(address).await
            }
            Err(e) => Err(e),
        };

        // Whatever went wrong, the caller sees one per-address error shape.
        result.map_err(|e| match e {
            MarketDataError::BalanceLookupFailed { .. } => e,
            other => MarketDataError::BalanceLookupFailed {
                address: address.to_string(),
                message: other.to_string(),
            },
        })
    }
}

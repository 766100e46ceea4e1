//! CoinGecko price oracle client.
//!
//! Fetches the USD reference price of a base asset from the CoinGecko
//! simple-price endpoint:
//!
//! `GET {base}/simple/price?ids=<asset>&vs_currencies=usd`
//!
//! The response shape is `{ "<asset>": { "usd": <float> } }`.
//!
//! This client is deliberately single-shot: a failed price call is terminal
//! for the whole aggregation, so there is nothing useful to retry into.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::MarketDataError;
use crate::models::PriceQuote;
use crate::provider::PriceProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Default HTTP request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Quote currencies for a single asset in the simple-price response.
#[derive(Debug, Deserialize)]
struct VsCurrencies {
    usd: Option<f64>,
}

/// CoinGecko simple-price client.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGeckoProvider {
    /// Create a new client against `base_url` (e.g.
    /// `https://api.coingecko.com/api/v3`) with the given request timeout.
    /// The public endpoint works without an API key; passing one raises
    /// the upstream rate limit.
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
        }
    }

    /// Extract the USD price for `asset` from a decoded simple-price body.
    fn price_from_response(
        body: &HashMap<String, VsCurrencies>,
        asset: &str,
    ) -> Result<Decimal, MarketDataError> {
        let usd = body
            .get(asset)
            .and_then(|vs| vs.usd)
            .ok_or_else(|| MarketDataError::PriceUnavailable {
                message: format!("no usd price for '{asset}' in response"),
            })?;

        let price = Decimal::try_from(usd).map_err(|e| MarketDataError::PriceUnavailable {
            message: format!("unrepresentable price {usd}: {e}"),
        })?;

        if price <= Decimal::ZERO {
            return Err(MarketDataError::PriceUnavailable {
                message: format!("non-positive price {price} for '{asset}'"),
            });
        }

        Ok(price)
    }
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn latest_price(&self, base_asset: &str) -> Result<PriceQuote, MarketDataError> {
        if base_asset.trim().is_empty() {
            return Err(MarketDataError::PriceUnavailable {
                message: "empty base asset identifier".to_string(),
            });
        }

        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd",
            self.base_url, base_asset
        );

        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header("x-cg-demo-api-key", key);
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                MarketDataError::Timeout {
                    provider: PROVIDER_ID.to_string(),
                }
            } else {
                MarketDataError::Network(e)
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::PriceUnavailable {
                message: format!("upstream status {}", status.as_u16()),
            });
        }

        let body: HashMap<String, VsCurrencies> =
            response
                .json()
                .await
                .map_err(|e| MarketDataError::PriceUnavailable {
                    message: format!("malformed response body: {e}"),
                })?;

        let price = Self::price_from_response(&body, base_asset)?;

        Ok(PriceQuote::new(price))
    }
}

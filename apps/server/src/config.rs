//! Server configuration, read once from the environment at startup.
//!
//! Replaces the implicit globals of a typical quick-start deployment with
//! an explicit structure enumerating every recognized option.

use std::time::Duration;

/// Runtime configuration for the coinfolio server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to. `CF_LISTEN_ADDR`.
    pub listen_addr: String,
    /// Base URL of the price-quote service. `CF_PRICE_API_URL`.
    pub price_api_url: String,
    /// Optional API key for the price-quote service. `CF_PRICE_API_KEY`.
    pub price_api_key: Option<String>,
    /// Base URL of the ledger-index service. `CF_LEDGER_API_URL`.
    pub ledger_api_url: String,
    /// Per-call timeout for outbound requests. `CF_REQUEST_TIMEOUT_SECS`.
    pub request_timeout: Duration,
    /// Asset whose fiat price anchors the aggregation. `CF_BASE_ASSET`.
    pub base_asset: String,
}

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3";
const DEFAULT_LEDGER_API_URL: &str = "https://mempool.space";
const DEFAULT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_BASE_ASSET: &str = "bitcoin";

impl Config {
    /// Builds the configuration from environment variables, falling back
    /// to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let timeout_secs = std::env::var("CF_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            listen_addr: env_or("CF_LISTEN_ADDR", DEFAULT_LISTEN_ADDR),
            price_api_url: env_or("CF_PRICE_API_URL", DEFAULT_PRICE_API_URL),
            price_api_key: std::env::var("CF_PRICE_API_KEY")
                .ok()
                .filter(|v| !v.trim().is_empty()),
            ledger_api_url: env_or("CF_LEDGER_API_URL", DEFAULT_LEDGER_API_URL),
            request_timeout: Duration::from_secs(timeout_secs),
            base_asset: env_or("CF_BASE_ASSET", DEFAULT_BASE_ASSET),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

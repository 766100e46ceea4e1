use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use coinfolio_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use coinfolio_core::wallets::{InMemoryWalletRegistry, WalletService, WalletServiceTrait};
use coinfolio_market_data::{CoinGeckoProvider, MempoolProvider};

use crate::config::Config;

/// Shared state handed to every handler.
pub struct AppState {
    pub wallet_service: Arc<dyn WalletServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("CF_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wires the providers and services from the configuration.
pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let timeout = Some(config.request_timeout);
    let price_provider = Arc::new(CoinGeckoProvider::new(
        config.price_api_url.clone(),
        config.price_api_key.clone(),
        timeout,
    ));
    let balance_provider = Arc::new(MempoolProvider::new(
        config.ledger_api_url.clone(),
        timeout,
    ));

    let registry = Arc::new(InMemoryWalletRegistry::new());
    let wallet_service: Arc<dyn WalletServiceTrait> = Arc::new(WalletService::new(registry));

    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        price_provider,
        balance_provider,
        config.base_asset.clone(),
    ));

    Ok(Arc::new(AppState {
        wallet_service,
        portfolio_service,
    }))
}

//! Coinfolio Market Data Crate
//!
//! This crate provides the upstream clients used by the portfolio
//! aggregation pipeline:
//!
//! - A price oracle client that fetches the fiat reference price of a
//!   base asset (CoinGecko simple-price endpoint).
//! - A balance lookup client that fetches confirmed/unconfirmed funding
//!   totals for a chain address from a ledger-index service
//!   (mempool.space / Esplora address endpoint).
//!
//! Both clients sit behind small async traits so the aggregator in the
//! core crate can be exercised against mocks.
//!
//! # Core Types
//!
//! - [`PriceQuote`] - Fiat units per one unit of the base asset
//! - [`ChainBalanceSnapshot`] - Funded-minus-spent totals per bucket
//! - [`MarketDataError`] - Error taxonomy with retry classification

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::{MarketDataError, RetryClass};
pub use models::{ChainBalanceSnapshot, PriceQuote};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::mempool::MempoolProvider;
pub use provider::{BalanceProvider, PriceProvider};

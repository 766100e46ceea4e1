//! Upstream provider clients and their trait definitions.

pub mod coingecko;
pub mod mempool;
mod traits;

pub use traits::{BalanceProvider, PriceProvider};

//! Core error types for the coinfolio service.
//!
//! Upstream provider errors are wrapped from the market-data crate;
//! everything else is defined here.

use thiserror::Error;

use coinfolio_market_data::MarketDataError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the coinfolio service.
#[derive(Error, Debug)]
pub enum Error {
    /// An upstream market data lookup failed.
    #[error("Market data operation failed: {0}")]
    MarketData(#[from] MarketDataError),

    /// The aggregation call failed as a whole. Raised when the reference
    /// price is unavailable - without it every fiat balance is incomputable,
    /// so no partial results are returned.
    #[error("Aggregation failed: {0}")]
    Aggregation(String),

    /// The requested record was not found in the registry.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Input validation failed.
    #[error("Input validation failed: {0}")]
    Validation(String),

    /// Unexpected internal error.
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}

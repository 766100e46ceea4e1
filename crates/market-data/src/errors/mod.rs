//! Error types and retry classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all upstream lookups
//! - [`RetryClass`]: Classification for determining retry behavior

mod retry;

pub use retry::RetryClass;

use thiserror::Error;

/// Errors that can occur while talking to upstream data providers.
///
/// Each variant is classified into a [`RetryClass`] via the
/// [`retry_class`](Self::retry_class) method, which determines whether a
/// client may retry the call with backoff.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The reference price could not be fetched.
    /// Terminal for a whole aggregation call - a missing price makes
    /// every fiat balance incomputable.
    #[error("Price unavailable: {message}")]
    PriceUnavailable {
        /// Description of the upstream failure
        message: String,
    },

    /// The balance lookup for a single address failed.
    /// Recoverable per entry - other addresses in the batch are unaffected.
    #[error("Balance lookup failed for {address}: {message}")]
    BalanceLookupFailed {
        /// The chain address whose lookup failed
        address: String,
        /// The error reported by the upstream service
        message: String,
    },

    /// The provider rate limited the request (HTTP 429).
    #[error("Rate limited: {provider}")]
    RateLimited {
        /// The provider that rate limited the request
        provider: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with an unexpected HTTP status.
    #[error("Upstream status {status} from {provider}")]
    UpstreamStatus {
        /// The provider that returned the status
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Returns the retry classification for this error.
    ///
    /// Only transient upstream conditions (timeout, rate limiting, 5xx)
    /// are worth a retry. Everything else is terminal for the call.
    pub fn retry_class(&self) -> RetryClass {
        match self {
            Self::RateLimited { .. } | Self::Timeout { .. } => RetryClass::WithBackoff,
            Self::UpstreamStatus { status, .. } if *status >= 500 => RetryClass::WithBackoff,
            _ => RetryClass::Never,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_unavailable_never_retries() {
        let error = MarketDataError::PriceUnavailable {
            message: "connection refused".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_balance_lookup_failed_never_retries() {
        let error = MarketDataError::BalanceLookupFailed {
            address: "bc1qxyz".to_string(),
            message: "invalid address".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_rate_limited_retries_with_backoff() {
        let error = MarketDataError::RateLimited {
            provider: "MEMPOOL".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_timeout_retries_with_backoff() {
        let error = MarketDataError::Timeout {
            provider: "COINGECKO".to_string(),
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_server_error_retries_with_backoff() {
        let error = MarketDataError::UpstreamStatus {
            provider: "MEMPOOL".to_string(),
            status: 502,
        };
        assert_eq!(error.retry_class(), RetryClass::WithBackoff);
    }

    #[test]
    fn test_client_error_never_retries() {
        let error = MarketDataError::UpstreamStatus {
            provider: "MEMPOOL".to_string(),
            status: 404,
        };
        assert_eq!(error.retry_class(), RetryClass::Never);
    }

    #[test]
    fn test_error_display() {
        let error = MarketDataError::PriceUnavailable {
            message: "empty body".to_string(),
        };
        assert_eq!(format!("{}", error), "Price unavailable: empty body");

        let error = MarketDataError::BalanceLookupFailed {
            address: "bc1qxyz".to_string(),
            message: "status 400".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Balance lookup failed for bc1qxyz: status 400"
        );
    }
}

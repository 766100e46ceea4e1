//! Portfolio module - the balance aggregation pipeline.

mod portfolio_model;
mod portfolio_service;
#[cfg(test)]
mod portfolio_service_tests;

// Re-export the public interface
pub use portfolio_model::{EnrichedPortfolio, EnrichedPortfolioEntry, EnrichmentWarning};
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};

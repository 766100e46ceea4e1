//! Coinfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the business logic for the coinfolio service:
//! the wallet registry and the portfolio-balance aggregation pipeline.
//! It is storage-agnostic - the registry is a trait with an in-memory
//! implementation, so a durable store can be swapped in without touching
//! the aggregator.

pub mod errors;
pub mod portfolio;
pub mod wallets;

// Re-export common types
pub use portfolio::*;
pub use wallets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;

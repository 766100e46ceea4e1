//! Coinfolio HTTP server.
//!
//! Exposes the portfolio aggregation pipeline and the wallet registry
//! over a small JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;
pub mod models;

pub use main_lib::{build_state, init_tracing, AppState};

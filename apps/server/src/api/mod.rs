//! Router assembly.

pub mod portfolios;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::main_lib::AppState;

/// Outer bound on a whole request, comfortably above the per-call
/// upstream timeouts so slow aggregations still finish.
const REQUEST_DEADLINE: Duration = Duration::from_secs(30);

/// Builds the application router with all API routes and middleware.
pub fn app_router(state: Arc<AppState>) -> Router {
    Router::new()
        .nest("/api", portfolios::router())
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(REQUEST_DEADLINE))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

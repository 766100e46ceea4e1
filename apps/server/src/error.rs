//! API error mapping.
//!
//! Converts core errors into HTTP responses with a `{message}` JSON body,
//! matching what the frontend expects on every non-2xx outcome.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use coinfolio_core::Error as CoreError;

/// Result alias used by all API handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Wrapper turning a [`CoreError`] into an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::Validation(_) => StatusCode::BAD_REQUEST,
            CoreError::Aggregation(_)
            | CoreError::MarketData(_)
            | CoreError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        }

        // The not-found text already names the missing record; the variant
        // prefix would only duplicate it on the wire.
        let message = match self.0 {
            CoreError::NotFound(message) => message,
            other => other.to_string(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

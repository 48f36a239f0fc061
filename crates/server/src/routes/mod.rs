//! API route handlers
//!
//! Routes are organized by functionality:
//!
//! - `health`: Liveness and readiness probes
//! - `strings`: Analysis, storage, retrieval, deletion, and structured
//!   filtering of strings
//! - `search`: Natural-language filtering

pub mod health;
pub mod search;
pub mod strings;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /).
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Textvault Server",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": [
            "/strings",
            "/strings/{value}",
            "/strings/filter-by-natural-language",
            "/health",
            "/ready"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::RouteNotFound
}

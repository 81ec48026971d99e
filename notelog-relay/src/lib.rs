/// Notelog CORS Relay
///
/// A stateless HTTP service that sits in front of a single fixed upstream
/// (a Google-Sheet-backed Apps Script endpoint) and makes it callable from
/// browsers, attaching the permissive CORS headers the upstream omits. The
/// relay never reinterprets the upstream's semantics: method, body, query
/// parameters, and status codes pass through untouched.

pub mod config;
pub mod cors;
pub mod health;
pub mod relay;

// Re-export key types
pub use config::RelayConfig;
pub use relay::AppState;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, get};
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Build the relay router: the method-agnostic proxy endpoint, a health
/// probe, and a catch-all that lists the available endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/proxy", any(relay::proxy))
        .route("/health", get(health::health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> Response {
    let body = json!({
        "error": "Endpoint not found",
        "available_endpoints": [
            "GET /health - Health check",
            "GET /api/proxy - Fetch all logs",
            "POST /api/proxy - Create a new log",
            "POST /api/proxy?id=<id>&action=update - Update a log",
            "POST /api/proxy?id=<id>&action=delete - Delete a log",
        ],
    });
    (StatusCode::NOT_FOUND, cors::cors_headers(), Json(body)).into_response()
}

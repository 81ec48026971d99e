/// Health probe
///
/// Reports whether the process is up and whether the upstream is configured,
/// without contacting the upstream.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::json;

use crate::cors::cors_headers;
use crate::relay::AppState;

pub async fn health(State(state): State<AppState>) -> Response {
    let body = json!({
        "status": "ok",
        "proxy": "running",
        "upstream_configured": state.upstream_url.is_some(),
        "timestamp": Utc::now().to_rfc3339(),
    });
    (StatusCode::OK, cors_headers(), Json(body)).into_response()
}

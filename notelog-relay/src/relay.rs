/// The forwarding handler
///
/// Each request is an independent pass-through: build the target URL from the
/// fixed upstream base plus the inbound query string, forward the method and
/// body verbatim, buffer the full upstream response, and relay it back with
/// CORS headers attached. No retries, no streaming, no shared state between
/// calls.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::{json, Value};
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::cors::cors_headers;

/// Shared handler state: the resolved upstream base and one reqwest client.
///
/// The client is reused across requests for connection pooling only; it
/// carries no per-request state.
#[derive(Clone)]
pub struct AppState {
    pub upstream_url: Option<String>,
    client: reqwest::Client,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.upstream_timeout)
            .build()?;
        Ok(Self {
            upstream_url: config.upstream_url.clone(),
            client,
        })
    }
}

/// Method-agnostic proxy endpoint
pub async fn proxy(
    State(state): State<AppState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    // Preflight is answered locally, never forwarded.
    if method == Method::OPTIONS {
        return (StatusCode::OK, cors_headers(), "").into_response();
    }

    let upstream = match &state.upstream_url {
        Some(url) => url.clone(),
        None => {
            warn!("upstream URL not configured, refusing to forward");
            return respond(
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "GOOGLE_SHEET_DB_URL not configured",
                    "message": "Please set the GOOGLE_SHEET_DB_URL environment variable",
                }),
            );
        }
    };

    let target = target_url(&upstream, query.as_deref());
    info!(method = %method, target = %target, "forwarding request");

    let result = state
        .client
        .request(method, &target)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await;

    let upstream_response = match result {
        Ok(r) => r,
        Err(e) => return proxy_error(e),
    };

    // Status passes through untouched; an out-of-range code falls back to 200.
    let status =
        StatusCode::from_u16(upstream_response.status().as_u16()).unwrap_or(StatusCode::OK);

    let text = match upstream_response.text().await {
        Ok(t) => t,
        Err(e) => return proxy_error(e),
    };

    respond(status, normalize_body(&text))
}

/// Upstream base plus the inbound query string, forwarded verbatim
fn target_url(upstream: &str, query: Option<&str>) -> String {
    match query {
        Some(q) if !q.is_empty() => format!("{}?{}", upstream, q),
        _ => upstream.to_string(),
    }
}

/// Parse an upstream body as JSON; non-JSON bodies are wrapped rather than
/// failing the call.
fn normalize_body(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| json!({ "raw": text }))
}

fn respond(status: StatusCode, body: Value) -> Response {
    (status, cors_headers(), Json(body)).into_response()
}

fn proxy_error(err: reqwest::Error) -> Response {
    warn!(error = %err, "upstream request failed");
    respond(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({
            "error": "Proxy error",
            "message": err.to_string(),
            "details": format!("{:?}", err),
        }),
    )
}

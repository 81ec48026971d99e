/// Test utilities for the Notelog workspace
///
/// Provides an in-memory stand-in for the Apps Script spreadsheet upstream
/// plus helpers to spawn relay and upstream servers on ephemeral ports.

use axum::body::Bytes;
use axum::extract::{RawQuery, State};
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use notelog_core::ResearchLog;
use notelog_relay::{AppState, RelayConfig};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// One inbound request as seen by the mock upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub query: String,
}

#[derive(Clone)]
struct SheetState {
    logs: Arc<Mutex<Vec<ResearchLog>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// In-memory double for the spreadsheet upstream.
///
/// Implements the Apps Script contract: GET lists all rows as `{data: [...]}`,
/// POST appends a row, `POST ?id=<id>&action=update` merges non-null fields
/// into the matching row, `POST ?id=<id>&action=delete` removes it. A missing
/// id answers 404 `{"error": "Log not found"}`.
pub struct MockSheet {
    pub url: String,
    logs: Arc<Mutex<Vec<ResearchLog>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockSheet {
    pub async fn spawn() -> Self {
        let logs = Arc::new(Mutex::new(Vec::new()));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = SheetState {
            logs: logs.clone(),
            requests: requests.clone(),
        };

        let app = Router::new().fallback(sheet_handler).with_state(state);
        let url = serve_ephemeral(app).await;

        Self { url, logs, requests }
    }

    /// Rows currently stored
    pub fn logs(&self) -> Vec<ResearchLog> {
        self.logs.lock().expect("sheet lock").clone()
    }

    /// Insert a row directly, bypassing HTTP
    pub fn seed(&self, log: ResearchLog) {
        self.logs.lock().expect("sheet lock").push(log);
    }

    /// Every request the mock has received, in order
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("request lock").clone()
    }
}

async fn sheet_handler(
    State(state): State<SheetState>,
    method: Method,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Response {
    let query = query.unwrap_or_default();
    state
        .requests
        .lock()
        .expect("request lock")
        .push(RecordedRequest {
            method: method.to_string(),
            query: query.clone(),
        });

    if method == Method::GET {
        let logs = state.logs.lock().expect("sheet lock").clone();
        return Json(json!({ "data": logs })).into_response();
    }

    let params = query_params(&query);
    match params.get("action").map(String::as_str) {
        Some("update") => update_row(&state, params.get("id"), &body),
        Some("delete") => delete_row(&state, params.get("id")),
        _ => append_row(&state, &body),
    }
}

fn append_row(state: &SheetState, body: &[u8]) -> Response {
    match serde_json::from_slice::<ResearchLog>(body) {
        Ok(log) => {
            state.logs.lock().expect("sheet lock").push(log.clone());
            Json(json!({ "success": true, "data": log })).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("Invalid row: {}", e) })),
        )
            .into_response(),
    }
}

fn update_row(state: &SheetState, id: Option<&String>, body: &[u8]) -> Response {
    let update: Value = serde_json::from_slice(body).unwrap_or_else(|_| json!({}));
    let mut logs = state.logs.lock().expect("sheet lock");

    let pos = id.and_then(|id| logs.iter().position(|l| &l.id == id));
    let pos = match pos {
        Some(p) => p,
        None => return not_found(),
    };

    let mut current = serde_json::to_value(&logs[pos]).expect("row serializes");
    if let (Some(row), Some(fields)) = (current.as_object_mut(), update.as_object()) {
        for (key, value) in fields {
            if !value.is_null() {
                row.insert(key.clone(), value.clone());
            }
        }
    }

    match serde_json::from_value::<ResearchLog>(current) {
        Ok(merged) => {
            logs[pos] = merged.clone();
            Json(json!({ "success": true, "data": merged })).into_response()
        }
        Err(e) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": format!("Invalid update: {}", e) })),
        )
            .into_response(),
    }
}

fn delete_row(state: &SheetState, id: Option<&String>) -> Response {
    let mut logs = state.logs.lock().expect("sheet lock");
    let pos = id.and_then(|id| logs.iter().position(|l| &l.id == id));
    match pos {
        Some(p) => {
            logs.remove(p);
            Json(json!({ "success": true })).into_response()
        }
        None => not_found(),
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Log not found" }))).into_response()
}

fn query_params(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

/// Spawn an upstream that answers every request with a fixed status and raw
/// body, for exercising non-JSON and error pass-through.
pub async fn spawn_static_upstream(status: u16, body: &'static str) -> String {
    let app = Router::new().fallback(move || async move {
        (
            StatusCode::from_u16(status).expect("valid status"),
            body.to_string(),
        )
    });
    serve_ephemeral(app).await
}

/// Spawn a relay wired to `upstream_url` (None = degraded mode), returning
/// its base URL.
pub async fn spawn_relay(upstream_url: Option<String>) -> String {
    let mut config = RelayConfig::new();
    if let Some(url) = upstream_url {
        config = config.with_upstream_url(url);
    }
    let state = AppState::new(&config).expect("relay state");
    serve_ephemeral(notelog_relay::router(state)).await
}

async fn serve_ephemeral(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("test server error: {}", e);
        }
    });
    format!("http://{}", addr)
}

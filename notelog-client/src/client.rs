/// Research-log REST client implementation
use chrono::Utc;
use notelog_core::{CreateResearchLogInput, ResearchLog, UpdateResearchLogInput};
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::parse::extract_logs;

/// Client for the research-log endpoint.
///
/// All writes go through POST: the Apps Script upstream does not accept PUT
/// or DELETE, so updates and deletes are expressed as
/// `POST ?id=<id>&action=update|delete`.
pub struct ResearchLogClient {
    base_url: String,
    client: reqwest::Client,
}

impl ResearchLogClient {
    /// Create a client against a resolved base URL (relay or upstream).
    ///
    /// An empty base URL is allowed; every call then fails with
    /// [`ClientError::Unconfigured`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn base(&self) -> Result<&str> {
        if self.base_url.trim().is_empty() {
            return Err(ClientError::Unconfigured);
        }
        Ok(&self.base_url)
    }

    /// Fetch all research logs
    pub async fn list(&self) -> Result<Vec<ResearchLog>> {
        let base = self.base()?;
        debug!(url = base, "fetching research logs");

        let response = self.client.get(base).send().await?;
        let response = ensure_success(response).await?;
        let value: Value = response.json().await?;
        extract_logs(value)
    }

    /// Create a new research log.
    ///
    /// Builds the full row locally (fresh id, timestamps) and appends it;
    /// returns the server's echo of the row when present, the local row
    /// otherwise.
    pub async fn create(
        &self,
        created_by: impl Into<String>,
        input: CreateResearchLogInput,
    ) -> Result<ResearchLog> {
        let base = self.base()?;
        let log = ResearchLog::create(created_by, input);
        debug!(url = base, id = %log.id, "creating research log");

        let response = self.client.post(base).json(&log).send().await?;
        let response = ensure_success(response).await?;

        let echoed = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|v| v.get("data").cloned())
            .and_then(|data| serde_json::from_value::<ResearchLog>(data).ok());
        Ok(echoed.unwrap_or(log))
    }

    /// Merge the provided fields into the row matching `input.id`.
    ///
    /// `updated_at` is refreshed to now; absent fields are left untouched by
    /// the upstream.
    pub async fn update(&self, mut input: UpdateResearchLogInput) -> Result<()> {
        let base = self.base()?;
        input.updated_at = Some(Utc::now().to_rfc3339());
        let url = format!("{}?id={}&action=update", base, input.id);
        debug!(url = %url, "updating research log");

        let response = self.client.post(&url).json(&input).send().await?;
        ensure_success(response).await?;
        Ok(())
    }

    /// Delete the row matching `id`
    pub async fn delete(&self, id: &str) -> Result<()> {
        let base = self.base()?;
        let url = format!("{}?id={}&action=delete", base, id);
        debug!(url = %url, "deleting research log");

        let response = self.client.post(&url).json(&json!({})).send().await?;
        ensure_success(response).await?;
        Ok(())
    }
}

/// Any non-2xx answer is a hard failure; 404 gets its own variant so callers
/// can tell a missing row apart from a broken relay.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    if status == reqwest::StatusCode::NOT_FOUND {
        Err(ClientError::NotFound(body))
    } else {
        Err(ClientError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        })
    }
}

use std::time::Duration;

/// Name of the environment variable holding the upstream base URL
pub const UPSTREAM_URL_ENV: &str = "GOOGLE_SHEET_DB_URL";

/// Relay configuration
///
/// The upstream URL is injected here rather than read from the environment
/// at call time, so the unconfigured branch is testable without touching the
/// process environment. A missing upstream is a degraded mode (every
/// non-preflight call answers 500), never a startup failure.
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Base URL of the fixed upstream endpoint (None = unconfigured)
    pub upstream_url: Option<String>,

    /// Bound on each outbound upstream call. Exceeding it surfaces as the
    /// same proxy-error 500 as any other transport failure.
    pub upstream_timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            upstream_timeout: Duration::from_secs(30),
        }
    }
}

impl RelayConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the upstream base URL
    pub fn with_upstream_url(mut self, url: impl Into<String>) -> Self {
        self.upstream_url = Some(url.into());
        self
    }

    /// Set the outbound call timeout
    pub fn with_upstream_timeout(mut self, timeout: Duration) -> Self {
        self.upstream_timeout = timeout;
        self
    }

    /// Read the upstream URL from `GOOGLE_SHEET_DB_URL`.
    ///
    /// An unset or empty variable leaves the relay in degraded mode.
    pub fn from_env() -> Self {
        let upstream_url = std::env::var(UPSTREAM_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty());
        Self {
            upstream_url,
            ..Self::default()
        }
    }
}

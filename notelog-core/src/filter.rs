/// Date-range filtering and ordering over research logs

use crate::dates::parse_date;
use crate::types::ResearchLog;
use serde::{Deserialize, Serialize};

/// Optional inclusive date-range bounds on a log's `date` field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
}

impl FilterOptions {
    /// No bounds; matches every log
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_date_from(mut self, date: impl Into<String>) -> Self {
        self.date_from = Some(date.into());
        self
    }

    pub fn with_date_to(mut self, date: impl Into<String>) -> Self {
        self.date_to = Some(date.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    /// Whether `log` falls within the configured bounds (inclusive).
    ///
    /// With bounds set, a log whose date does not parse is excluded. Bounds
    /// that themselves do not parse are ignored.
    pub fn matches(&self, log: &ResearchLog) -> bool {
        if self.is_empty() {
            return true;
        }

        let log_date = match parse_date(&log.date) {
            Some(d) => d,
            None => return false,
        };

        if let Some(from) = self.date_from.as_deref().and_then(parse_date) {
            if log_date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to.as_deref().and_then(parse_date) {
            if log_date > to {
                return false;
            }
        }
        true
    }

    /// Retain only the matching logs, preserving order
    pub fn apply(&self, logs: &[ResearchLog]) -> Vec<ResearchLog> {
        logs.iter().filter(|log| self.matches(log)).cloned().collect()
    }
}

/// Sort logs newest-first by their `date` field.
///
/// Unparseable dates sort last; ties keep their relative order.
pub fn sort_newest_first(logs: &mut [ResearchLog]) {
    logs.sort_by(|a, b| {
        let da = parse_date(&a.date);
        let db = parse_date(&b.date);
        db.cmp(&da)
    });
}

/// Research-log row model
///
/// One row per day in the backing sheet. All fields are strings to match the
/// sheet's header schema exactly; dates are `YYYY-MM-DD`, timestamps RFC 3339.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Column order of the backing sheet's header row
pub const SHEET_HEADERS: [&str; 13] = [
    "id",
    "created_by",
    "date",
    "plan_to_read",
    "plan_to_do",
    "did_read",
    "learned_today",
    "new_thoughts",
    "coded_today",
    "wrote_or_taught",
    "try_tomorrow",
    "created_at",
    "updated_at",
];

/// A full research-log row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ResearchLog {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub plan_to_read: String,
    #[serde(default)]
    pub plan_to_do: String,
    #[serde(default)]
    pub did_read: String,
    #[serde(default)]
    pub learned_today: String,
    #[serde(default)]
    pub new_thoughts: String,
    #[serde(default)]
    pub coded_today: String,
    #[serde(default)]
    pub wrote_or_taught: String,
    #[serde(default)]
    pub try_tomorrow: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Content fields for a new log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CreateResearchLogInput {
    pub date: String,
    #[serde(default)]
    pub plan_to_read: String,
    #[serde(default)]
    pub plan_to_do: String,
    #[serde(default)]
    pub did_read: String,
    #[serde(default)]
    pub learned_today: String,
    #[serde(default)]
    pub new_thoughts: String,
    #[serde(default)]
    pub coded_today: String,
    #[serde(default)]
    pub wrote_or_taught: String,
    #[serde(default)]
    pub try_tomorrow: String,
}

/// Partial update for an existing log entry.
///
/// `None` fields are omitted from the serialized body so the upstream merges
/// only the provided values into the matching row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdateResearchLogInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_to_read: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_to_do: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_read: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learned_today: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_thoughts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coded_today: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrote_or_taught: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub try_tomorrow: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl ResearchLog {
    /// Build a full row from creation input: fresh v4 id, `created_at` and
    /// `updated_at` set to the same current UTC instant.
    pub fn create(created_by: impl Into<String>, input: CreateResearchLogInput) -> Self {
        let now = Utc::now().to_rfc3339();
        Self {
            id: Uuid::new_v4().to_string(),
            created_by: created_by.into(),
            date: input.date,
            plan_to_read: input.plan_to_read,
            plan_to_do: input.plan_to_do,
            did_read: input.did_read,
            learned_today: input.learned_today,
            new_thoughts: input.new_thoughts,
            coded_today: input.coded_today,
            wrote_or_taught: input.wrote_or_taught,
            try_tomorrow: input.try_tomorrow,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    /// Zip a raw sheet row with the header row into a log.
    ///
    /// Unknown headers are ignored, missing cells become empty strings.
    pub fn from_sheet_row(headers: &[String], cells: &[String]) -> Self {
        let mut log = ResearchLog::default();
        for (i, header) in headers.iter().enumerate() {
            let value = cells.get(i).cloned().unwrap_or_default();
            match header.as_str() {
                "id" => log.id = value,
                "created_by" => log.created_by = value,
                "date" => log.date = value,
                "plan_to_read" => log.plan_to_read = value,
                "plan_to_do" => log.plan_to_do = value,
                "did_read" => log.did_read = value,
                "learned_today" => log.learned_today = value,
                "new_thoughts" => log.new_thoughts = value,
                "coded_today" => log.coded_today = value,
                "wrote_or_taught" => log.wrote_or_taught = value,
                "try_tomorrow" => log.try_tomorrow = value,
                "created_at" => log.created_at = value,
                "updated_at" => log.updated_at = value,
                _ => {}
            }
        }
        log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let input = CreateResearchLogInput {
            date: "2025-03-01".to_string(),
            plan_to_read: "attention is all you need".to_string(),
            ..Default::default()
        };
        let log = ResearchLog::create("basil", input);

        assert!(!log.id.is_empty());
        assert_eq!(log.created_by, "basil");
        assert_eq!(log.date, "2025-03-01");
        assert_eq!(log.created_at, log.updated_at);
        assert!(!log.created_at.is_empty());
    }

    #[test]
    fn test_create_ids_are_unique() {
        let a = ResearchLog::create("basil", CreateResearchLogInput::default());
        let b = ResearchLog::create("basil", CreateResearchLogInput::default());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_input_skips_absent_fields() {
        let update = UpdateResearchLogInput {
            id: "42".to_string(),
            learned_today: Some("rust".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 2);
        assert_eq!(obj["id"], "42");
        assert_eq!(obj["learned_today"], "rust");
    }

    #[test]
    fn test_from_sheet_row_zips_headers() {
        let headers: Vec<String> = SHEET_HEADERS.iter().map(|h| h.to_string()).collect();
        let mut cells = vec![String::new(); SHEET_HEADERS.len()];
        cells[0] = "abc".to_string();
        cells[2] = "2025-03-01".to_string();
        cells[6] = "lifetimes".to_string();

        let log = ResearchLog::from_sheet_row(&headers, &cells);
        assert_eq!(log.id, "abc");
        assert_eq!(log.date, "2025-03-01");
        assert_eq!(log.learned_today, "lifetimes");
        assert_eq!(log.plan_to_do, "");
    }

    #[test]
    fn test_from_sheet_row_tolerates_short_rows() {
        let headers: Vec<String> = SHEET_HEADERS.iter().map(|h| h.to_string()).collect();
        let cells = vec!["only-id".to_string()];
        let log = ResearchLog::from_sheet_row(&headers, &cells);
        assert_eq!(log.id, "only-id");
        assert_eq!(log.updated_at, "");
    }

    #[test]
    fn test_row_deserializes_with_missing_fields() {
        let log: ResearchLog =
            serde_json::from_str(r#"{"id":"1","date":"2025-01-01"}"#).unwrap();
        assert_eq!(log.id, "1");
        assert_eq!(log.coded_today, "");
    }
}

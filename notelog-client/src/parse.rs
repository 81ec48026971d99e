/// Tolerant parsing of upstream list responses
///
/// The upstream answers in one of three shapes depending on how the sheet is
/// exposed: a bare array of row objects, `{"data": [...]}`, or the raw sheet
/// grid `{"values": [[header row], [cells...], ...]}`.

use notelog_core::ResearchLog;
use serde_json::Value;

use crate::error::{ClientError, Result};

/// Extract research logs from any of the known response shapes.
///
/// Unknown object shapes yield an empty list rather than an error; the
/// upstream is outside this codebase's control and an empty sheet can answer
/// oddly. A body that is not an object or array at all (a bare string,
/// number, ...) is malformed and rejected.
pub fn extract_logs(value: Value) -> Result<Vec<ResearchLog>> {
    if value.is_array() {
        return Ok(serde_json::from_value(value).unwrap_or_default());
    }

    if !value.is_object() {
        return Err(ClientError::UnexpectedResponse(format!(
            "expected a list or object body, got: {}",
            value
        )));
    }

    if let Some(data) = value.get("data") {
        if data.is_array() {
            return Ok(serde_json::from_value(data.clone()).unwrap_or_default());
        }
    }

    if let Some(values) = value.get("values").and_then(Value::as_array) {
        return Ok(parse_sheet_rows(values));
    }

    Ok(Vec::new())
}

/// Zip raw sheet rows with their header row
fn parse_sheet_rows(rows: &[Value]) -> Vec<ResearchLog> {
    let mut iter = rows.iter().map(row_strings);
    let headers = match iter.next() {
        Some(h) => h,
        None => return Vec::new(),
    };
    iter.map(|cells| ResearchLog::from_sheet_row(&headers, &cells))
        .collect()
}

fn row_strings(row: &Value) -> Vec<String> {
    row.as_array()
        .map(|cells| {
            cells
                .iter()
                .map(|cell| match cell {
                    Value::String(s) => s.clone(),
                    Value::Null => String::new(),
                    other => other.to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
}

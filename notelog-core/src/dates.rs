/// Date formatting helpers for log display and input fields

use chrono::{Local, NaiveDate};

/// Format a `YYYY-MM-DD` date for display, e.g. `March 01, 2025`.
///
/// Unparseable input is returned unchanged rather than erroring; stored rows
/// can hold anything the sheet holds.
pub fn format_display_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%B %d, %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

/// Format a date for input fields (`YYYY-MM-DD`)
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Today's local date in `YYYY-MM-DD` form
pub fn today() -> String {
    format_input_date(Local::now().date_naive())
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

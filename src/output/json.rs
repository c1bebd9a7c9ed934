//! JSON output formatting for tomata.

use chrono::NaiveDate;
use serde_json::json;

use crate::error::TomataError;
use crate::session::SessionLogEntry;

/// Format session log entries as JSON
///
/// # Errors
///
/// Returns `TomataError::Parse` if JSON serialization fails.
pub fn format_entries_json(
    entries: &[&SessionLogEntry],
    date: NaiveDate,
) -> Result<String, TomataError> {
    let output = json!({
        "date": date.format("%Y-%m-%d").to_string(),
        "count": entries.len(),
        "sessions": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

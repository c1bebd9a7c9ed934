//! Log command implementation.
//!
//! Reads back recorded sessions from the per-day log files.

use chrono::{Local, NaiveDate};

use crate::cli::args::{LogArgs, OutputFormat};
use crate::config::Config;
use crate::error::TomataError;
use crate::output::{format_entries_json, format_entries_pretty};
use crate::session::SessionLog;

/// Execute the log command.
///
/// # Errors
///
/// Returns an error if the date is malformed, the log file cannot be read,
/// or JSON serialization fails.
pub fn log(config: &Config, args: &LogArgs, format: OutputFormat) -> Result<String, TomataError> {
    let date = match &args.date {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|e| TomataError::Parse(format!("Invalid date '{s}' (want YYYY-MM-DD): {e}")))?,
        None => Local::now().date_naive(),
    };

    let store = SessionLog::new(config.session_log_dir()?);
    let entries = store.read_day(date)?;

    // Most recent first, capped at the limit.
    let mut shown: Vec<_> = entries.iter().rev().take(args.limit).collect();
    shown.reverse();

    match format {
        OutputFormat::Json => format_entries_json(&shown, date),
        OutputFormat::Pretty => Ok(format_entries_pretty(&shown, date)),
    }
}

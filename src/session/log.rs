//! Per-day session log.
//!
//! Every finished session is appended to a UTF-8 text file named after the
//! calendar day it ended on (`pomodoro_log_2024-06-01.txt`). The file is
//! created on first use and only ever appended to; a failed append never
//! corrupts earlier entries.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::TomataError;

/// Placeholder recorded when the completed-note input is left blank.
pub const NOTE_PLACEHOLDER: &str = "(not filled in)";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?m)^=== Pomodoro Session Ended: (\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}) ===\r?\nPlanned Task: (.*)\r?\nCompleted: (.*)$",
    )
    .unwrap_or_else(|e| panic!("Invalid session log regex: {e}"))
});

/// One recorded session.
///
/// Built at expiry, appended, and not retained in memory afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// When the session ended (local time).
    pub ended_at: NaiveDateTime,
    /// The task captured at session start.
    pub planned_task: String,
    /// What the user reports actually doing, or [`NOTE_PLACEHOLDER`].
    pub completed_note: String,
}

impl SessionLogEntry {
    /// Build an entry ending now. A blank completed note becomes the
    /// placeholder.
    #[must_use]
    pub fn now(planned_task: impl Into<String>, completed_note: &str) -> Self {
        Self::at(Local::now().naive_local(), planned_task, completed_note)
    }

    /// Build an entry with an explicit end timestamp.
    ///
    /// Both text fields are flattened to a single line so they cannot break
    /// the on-disk block format.
    #[must_use]
    pub fn at(
        ended_at: NaiveDateTime,
        planned_task: impl Into<String>,
        completed_note: &str,
    ) -> Self {
        let note = flatten(completed_note);
        Self {
            ended_at,
            planned_task: flatten(&planned_task.into()),
            completed_note: if note.is_empty() {
                NOTE_PLACEHOLDER.to_string()
            } else {
                note
            },
        }
    }

    /// Render the on-disk block for this entry.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "=== Pomodoro Session Ended: {} ===\nPlanned Task: {}\nCompleted: {}\n\n",
            self.ended_at.format(TIMESTAMP_FORMAT),
            self.planned_task,
            self.completed_note,
        )
    }
}

/// Append-only store of per-day session log files.
pub struct SessionLog {
    dir: PathBuf,
}

impl SessionLog {
    /// Create a log rooted at `dir`. The directory is created lazily on the
    /// first append.
    #[must_use]
    pub const fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the log file for `date`.
    #[must_use]
    pub fn file_for(&self, date: NaiveDate) -> PathBuf {
        self.dir
            .join(format!("pomodoro_log_{}.txt", date.format("%Y-%m-%d")))
    }

    /// Append one entry to the file for the day it ended on.
    ///
    /// Creates the directory and file if missing, appends otherwise.
    ///
    /// # Errors
    ///
    /// Returns `TomataError::LogWrite` on any I/O failure. Earlier entries
    /// are untouched either way.
    pub fn append(&self, entry: &SessionLogEntry) -> Result<(), TomataError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            TomataError::LogWrite(format!(
                "Failed to create log directory {}: {e}",
                self.dir.display()
            ))
        })?;

        let path = self.file_for(entry.ended_at.date());
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                TomataError::LogWrite(format!("Failed to open {}: {e}", path.display()))
            })?;

        file.write_all(entry.render().as_bytes())
            .map_err(|e| TomataError::LogWrite(format!("Failed to write {}: {e}", path.display())))
    }

    /// Read back all entries recorded for `date`.
    ///
    /// A missing file means no sessions were recorded that day.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read_day(&self, date: NaiveDate) -> Result<Vec<SessionLogEntry>, TomataError> {
        let path = self.file_for(date);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| {
            TomataError::LogWrite(format!("Failed to read {}: {e}", path.display()))
        })?;

        parse_entries(&contents, &path)
    }
}

/// Collapse a possibly multi-line value into one trimmed line.
fn flatten(text: &str) -> String {
    text.split(['\r', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse log file contents into entries.
fn parse_entries(contents: &str, path: &Path) -> Result<Vec<SessionLogEntry>, TomataError> {
    let mut entries = Vec::new();

    for caps in ENTRY_PATTERN.captures_iter(contents) {
        let (_, [timestamp, planned, completed]) = caps.extract();
        let ended_at = NaiveDateTime::parse_from_str(timestamp, TIMESTAMP_FORMAT).map_err(|e| {
            TomataError::Parse(format!(
                "Bad timestamp '{timestamp}' in {}: {e}",
                path.display()
            ))
        })?;

        entries.push(SessionLogEntry {
            ended_at,
            planned_task: planned.to_string(),
            completed_note: completed.to_string(),
        });
    }

    Ok(entries)
}

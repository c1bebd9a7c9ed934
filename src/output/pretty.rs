//! Pretty (human-readable) output formatting for tomata.

use chrono::NaiveDate;
use colored::Colorize;

use crate::session::SessionLogEntry;

/// Format session log entries for terminal display.
#[must_use]
pub fn format_entries_pretty(entries: &[&SessionLogEntry], date: NaiveDate) -> String {
    if entries.is_empty() {
        return format!(
            "No sessions recorded for {date}.\n\nStart one with: tomata"
        );
    }

    let mut output = Vec::new();
    output.push(
        format!("🍅 Sessions for {date} ({})", entries.len())
            .bold()
            .to_string(),
    );
    output.push("═".repeat(50));

    for entry in entries {
        output.push(String::new());
        output.push(
            format!("Ended {}", entry.ended_at.format("%H:%M:%S"))
                .green()
                .to_string(),
        );
        output.push(format!("  Planned:   {}", entry.planned_task));
        output.push(format!("  Completed: {}", entry.completed_note.dimmed()));
    }

    output.join("\n")
}

//! Output formatting for tomata.
//!
//! This module provides formatters for displaying recorded sessions in
//! various formats.

mod json;
mod pretty;

pub use json::format_entries_json;
pub use pretty::format_entries_pretty;

//! Error types for tomata.

use thiserror::Error;

/// Errors that can occur in tomata.
#[derive(Debug, Error)]
pub enum TomataError {
    /// Configuration error (loading, saving, or resolving paths).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to parse data (dates, JSON output, log files).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failed to append a session record to the per-day log.
    #[error("Failed to write session log: {0}")]
    LogWrite(String),

    /// A requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Terminal setup or rendering failure.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl From<serde_json::Error> for TomataError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(format!("JSON serialization failed: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TomataError::LogWrite("disk full".to_string());
        assert_eq!(err.to_string(), "Failed to write session log: disk full");

        let err = TomataError::NotFound("log for 2024-01-01".to_string());
        assert_eq!(err.to_string(), "Not found: log for 2024-01-01");
    }
}

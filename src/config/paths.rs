//! Path resolution for tomata configuration and data files.
//!
//! All tomata data is stored in `~/.tomata/`:
//! - `config.yaml` - Main configuration file
//! - `sessions/` - Per-day session log files

use std::path::PathBuf;

use crate::error::TomataError;

/// Paths to tomata configuration and data directories.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomata/`
    pub root: PathBuf,
    /// Config file: `~/.tomata/config.yaml`
    pub config_file: PathBuf,
    /// Sessions directory: `~/.tomata/sessions/`
    pub sessions: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomataError> {
        let home = std::env::var("HOME")
            .map_err(|_| TomataError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tomata")))
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            sessions: root.join("sessions"),
            root,
        }
    }

    /// Ensure all directories exist, creating them if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomataError> {
        for dir in [&self.root, &self.sessions] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TomataError::Config(format!("Failed to create directory {dir:?}: {e}"))
                })?;
            }
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tomata"))
        })
    }
}

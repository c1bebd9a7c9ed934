//! Configuration settings for tomata.
//!
//! Settings are loaded from `~/.tomata/config.yaml`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::TomataError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerConfig,
    /// Post-expiry flash effect settings.
    pub flash: FlashConfig,
    /// Session log settings.
    pub log: LogConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format for CLI commands.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerConfig {
    /// Duration prefilled in the minutes input.
    #[serde(default = "default_minutes")]
    pub default_minutes: u32,
}

/// Post-expiry flash effect settings.
///
/// The effect is decorative and disabled unless explicitly enabled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlashConfig {
    /// Whether to flash the timer pane after a session expires.
    #[serde(default)]
    pub enabled: bool,
    /// Number of lit/unlit cycles.
    #[serde(default = "default_flash_cycles")]
    pub cycles: u32,
    /// Delay between toggles in milliseconds.
    #[serde(default = "default_flash_interval_ms")]
    pub interval_ms: u64,
}

/// Session log settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LogConfig {
    /// Directory for per-day log files. Defaults to `~/.tomata/sessions/`.
    #[serde(default)]
    pub directory: Option<PathBuf>,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_minutes() -> u32 {
    25
}

const fn default_flash_cycles() -> u32 {
    4
}

const fn default_flash_interval_ms() -> u64 {
    500
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            default_minutes: default_minutes(),
        }
    }
}

impl Default for FlashConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            cycles: default_flash_cycles(),
            interval_ms: default_flash_interval_ms(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, TomataError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, TomataError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TomataError::Config(format!("Failed to read config file {}: {e}", path.display()))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            TomataError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), TomataError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), TomataError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TomataError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TomataError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Resolve the directory session logs are written to.
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is configured and the home directory
    /// cannot be determined.
    pub fn session_log_dir(&self) -> Result<PathBuf, TomataError> {
        if let Some(dir) = &self.log.directory {
            return Ok(dir.clone());
        }
        Ok(Paths::new()?.sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.general.default_output, OutputFormat::Pretty);
        assert_eq!(config.timer.default_minutes, 25);
        assert!(!config.flash.enabled);
        assert_eq!(config.flash.cycles, 4);
        assert_eq!(config.flash.interval_ms, 500);
        assert!(config.log.directory.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert_eq!(config.timer.default_minutes, 25);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.timer.default_minutes = 50;
        config.flash.enabled = true;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert_eq!(loaded.timer.default_minutes, 50);
        assert!(loaded.flash.enabled);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r"
timer:
  default_minutes: 45
";
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert_eq!(config.timer.default_minutes, 45);
        // Defaults should be used for missing fields
        assert!(!config.flash.enabled);
        assert_eq!(config.general.default_output, OutputFormat::Pretty);
    }

    #[test]
    fn test_session_log_dir_override() {
        let mut config = Config::default();
        config.log.directory = Some(PathBuf::from("/tmp/pomodoro-logs"));

        assert_eq!(
            config.session_log_dir().unwrap(),
            PathBuf::from("/tmp/pomodoro-logs")
        );
    }
}

//! Configuration management for tomata.
//!
//! This module handles loading and saving configuration from `~/.tomata/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, FlashConfig, GeneralConfig, LogConfig, TimerConfig};

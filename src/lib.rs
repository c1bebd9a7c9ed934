//! tomata - a Pomodoro countdown timer for the terminal
//!
//! This crate provides a full-screen terminal Pomodoro timer plus a small CLI
//! for reading back the per-day session logs it writes.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod session;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TomataError;
pub use session::timer::SessionTimer;

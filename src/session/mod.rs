//! Pomodoro session machinery.
//!
//! Provides the countdown state machine, the per-day session log, and the
//! optional post-expiry flash effect:
//! - Start/tick/reset countdown sessions
//! - Append-only per-day session logs
//! - Bounded visual alert cycles

pub mod flash;
pub mod log;
pub mod timer;

pub use flash::{FlashEffect, FlashStep};
pub use log::{SessionLog, SessionLogEntry};
pub use timer::{SessionTimer, StartOutcome, TickOutcome, TimerEvent};

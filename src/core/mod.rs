//! Core abstractions for tomata.
//!
//! This module provides the cooperative scheduling primitive shared by the
//! timer state machine and the presentation layer.

mod sched;

pub use sched::{ScheduleToken, Scheduler};

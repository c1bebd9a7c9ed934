//! The countdown state machine for a Pomodoro session.
//!
//! A `SessionTimer` is either idle or running. Starting it captures the
//! planned task and the requested duration, and schedules a tick one second
//! out. Each tick decrements the remaining time and reschedules itself; the
//! tick that arrives with zero seconds left performs the expiry transition
//! and hands the captured task back to the caller.

use std::time::Duration;

use crate::core::{ScheduleToken, Scheduler};

/// Minutes substituted when the duration input is not a positive integer.
pub const FALLBACK_MINUTES: u32 = 25;

/// Placeholder recorded when the plan input is left blank.
pub const PLAN_PLACEHOLDER: &str = "(no task entered)";

const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Events the timer asks the scheduler to deliver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// One-second countdown step.
    Tick,
    /// Next step of the post-expiry flash cycle.
    Flash,
}

/// Result of attempting to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new session began with this many seconds on the clock.
    Started {
        /// Initial countdown value (`minutes * 60`).
        remaining_seconds: u32,
    },
    /// A session is already running; nothing changed.
    AlreadyRunning,
}

/// Result of a countdown tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown stepped down by one second.
    Running {
        /// Seconds left after the decrement.
        remaining_seconds: u32,
    },
    /// The countdown reached zero and the session ended.
    Expired {
        /// The task captured when the session started.
        planned_task: String,
    },
    /// Tick arrived while idle (stale callback); ignored.
    Stale,
}

/// A single Pomodoro countdown.
#[derive(Debug)]
pub struct SessionTimer {
    remaining_seconds: u32,
    running: bool,
    planned_task: String,
    tick_token: Option<ScheduleToken>,
}

impl SessionTimer {
    /// Create an idle timer showing 00:00.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            remaining_seconds: 0,
            running: false,
            planned_task: String::new(),
            tick_token: None,
        }
    }

    /// Start a session from raw user input.
    ///
    /// Invalid or non-positive minute input silently falls back to
    /// [`FALLBACK_MINUTES`]; a blank plan becomes [`PLAN_PLACEHOLDER`].
    /// Rejected with `AlreadyRunning` while a session is in progress.
    pub fn start(
        &mut self,
        minutes_input: &str,
        plan_input: &str,
        sched: &mut Scheduler<TimerEvent>,
    ) -> StartOutcome {
        if self.running {
            return StartOutcome::AlreadyRunning;
        }

        let plan = plan_input.trim();
        self.planned_task = if plan.is_empty() {
            PLAN_PLACEHOLDER.to_string()
        } else {
            plan.to_string()
        };

        if let Some(token) = self.tick_token.take() {
            sched.cancel(token);
        }

        self.running = true;
        self.remaining_seconds = parse_minutes(minutes_input).saturating_mul(60);
        self.tick_token = Some(sched.schedule_after(TICK_INTERVAL, TimerEvent::Tick));

        StartOutcome::Started {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Perform one countdown step.
    ///
    /// A tick that arrives with zero seconds left ends the session: the timer
    /// returns to idle (remaining stays at zero so the display reads 00:00)
    /// and the planned task is handed back for logging and display. At most
    /// one expiry occurs per session.
    pub fn tick(&mut self, sched: &mut Scheduler<TimerEvent>) -> TickOutcome {
        if !self.running {
            return TickOutcome::Stale;
        }

        if self.remaining_seconds == 0 {
            self.running = false;
            self.tick_token = None;
            return TickOutcome::Expired {
                planned_task: self.planned_task.clone(),
            };
        }

        self.remaining_seconds -= 1;
        self.tick_token = Some(sched.schedule_after(TICK_INTERVAL, TimerEvent::Tick));
        TickOutcome::Running {
            remaining_seconds: self.remaining_seconds,
        }
    }

    /// Cancel the running session.
    ///
    /// The pending tick is cancelled before any state changes, so no stale
    /// callback can mutate the timer afterwards. No-op while idle; calling
    /// it twice is the same as calling it once.
    pub fn reset(&mut self, sched: &mut Scheduler<TimerEvent>) {
        if !self.running {
            return;
        }

        if let Some(token) = self.tick_token.take() {
            sched.cancel(token);
        }
        self.running = false;
        self.remaining_seconds = 0;
    }

    /// Whether a session is in progress.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds left on the clock.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The task captured at session start.
    #[must_use]
    pub fn planned_task(&self) -> &str {
        &self.planned_task
    }

    /// Format the remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        let minutes = self.remaining_seconds / 60;
        let seconds = self.remaining_seconds % 60;
        format!("{minutes:02}:{seconds:02}")
    }
}

impl Default for SessionTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the minutes input, falling back to [`FALLBACK_MINUTES`] on anything
/// that is not a positive integer.
fn parse_minutes(input: &str) -> u32 {
    match input.trim().parse::<u32>() {
        Ok(m) if m > 0 => m,
        _ => FALLBACK_MINUTES,
    }
}

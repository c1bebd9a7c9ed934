//! Application state for the TUI.

use std::time::{Duration, Instant};

use crate::config::{Config, FlashConfig};
use crate::core::{ScheduleToken, Scheduler};
use crate::error::TomataError;
use crate::session::flash::{FlashEffect, FlashStep};
use crate::session::timer::{SessionTimer, StartOutcome, TickOutcome, TimerEvent};
use crate::session::{SessionLog, SessionLogEntry};

/// Which input field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    /// Timer duration in minutes.
    Minutes,
    /// What was actually completed (editable during the session).
    Done,
    /// The task planned for the next session.
    Plan,
}

/// Application state.
pub struct App {
    /// The countdown state machine.
    pub timer: SessionTimer,
    /// Minutes input, prefilled from config.
    pub minutes_input: String,
    /// Planned-task input.
    pub plan_input: String,
    /// Completed-note input.
    pub done_input: String,
    /// Planned task of the last finished session.
    pub previous_task: String,
    /// Currently focused input field.
    pub focus: InputField,
    /// Modal alert message, shown until dismissed.
    pub alert: Option<String>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the flash effect currently lights the timer pane.
    pub flash_lit: bool,
    sched: Scheduler<TimerEvent>,
    log: SessionLog,
    flash_config: FlashConfig,
    flash: Option<FlashEffect>,
    flash_token: Option<ScheduleToken>,
}

impl App {
    /// Create a new app instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the session log directory cannot be resolved.
    pub fn new(config: &Config) -> Result<Self, TomataError> {
        Ok(Self {
            timer: SessionTimer::new(),
            minutes_input: config.timer.default_minutes.to_string(),
            plan_input: String::new(),
            done_input: String::new(),
            previous_task: "(none)".to_string(),
            focus: InputField::Plan,
            alert: None,
            status: Some("Press Enter to start".to_string()),
            flash_lit: false,
            sched: Scheduler::new(),
            log: SessionLog::new(config.session_log_dir()?),
            flash_config: config.flash.clone(),
            flash: None,
            flash_token: None,
        })
    }

    /// Start a session from the current inputs.
    ///
    /// Any residual flash cycle from a previous expiry is cancelled first so
    /// it cannot bleed into the new session, and the completed-note input is
    /// cleared for fresh capture.
    pub fn start_timer(&mut self) {
        self.cancel_flash();

        match self
            .timer
            .start(&self.minutes_input, &self.plan_input, &mut self.sched)
        {
            StartOutcome::Started { .. } => {
                self.done_input.clear();
                self.alert = None;
                self.focus = InputField::Done;
                self.status = Some(format!(
                    "Session started: {} ({})",
                    self.timer.planned_task(),
                    self.timer.format_remaining()
                ));
            }
            StartOutcome::AlreadyRunning => {
                self.status = Some("A session is already running".to_string());
            }
        }
    }

    /// Reset the running session back to 00:00.
    pub fn reset_timer(&mut self) {
        self.timer.reset(&mut self.sched);
        self.cancel_flash();
        self.status = Some("Timer reset".to_string());
    }

    /// Deliver all scheduler events that have come due.
    pub fn drain_due(&mut self) {
        while let Some(event) = self.sched.pop_due(Instant::now()) {
            self.on_scheduled(event);
        }
    }

    /// Handle one scheduled event.
    pub fn on_scheduled(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::Tick => match self.timer.tick(&mut self.sched) {
                TickOutcome::Running { .. } | TickOutcome::Stale => {}
                TickOutcome::Expired { planned_task } => self.finish_session(planned_task),
            },
            TimerEvent::Flash => self.advance_flash(),
        }
    }

    /// Expiry transition: record the session, update the previous-task
    /// display, raise the alert, and kick off the optional flash effect.
    fn finish_session(&mut self, planned_task: String) {
        let entry = SessionLogEntry::now(planned_task.clone(), &self.done_input);
        match self.log.append(&entry) {
            Ok(()) => {
                self.status = Some(format!(
                    "Session logged to {}",
                    self.log.file_for(entry.ended_at.date()).display()
                ));
            }
            // Non-fatal: report and carry on with the expiry transition.
            Err(e) => self.status = Some(e.to_string()),
        }

        self.previous_task = planned_task;
        self.alert = Some(
            "Time's up! Take a break or start the next session.".to_string(),
        );

        if self.flash_config.enabled {
            let flash = FlashEffect::new(
                self.flash_config.cycles,
                Duration::from_millis(self.flash_config.interval_ms),
            );
            self.flash_token = Some(self.sched.schedule_after(flash.interval(), TimerEvent::Flash));
            self.flash = Some(flash);
        }
    }

    /// Step the flash effect and reschedule or finish it.
    fn advance_flash(&mut self) {
        let Some(flash) = self.flash.as_mut() else {
            self.flash_lit = false;
            return;
        };

        let step = flash.advance();
        let interval = flash.interval();
        match step {
            FlashStep::Toggle(lit) => {
                self.flash_lit = lit;
                self.flash_token = Some(self.sched.schedule_after(interval, TimerEvent::Flash));
            }
            FlashStep::Done => self.cancel_flash(),
        }
    }

    /// Cancel any in-flight flash cycle, leaving the pane unlit.
    fn cancel_flash(&mut self) {
        if let Some(token) = self.flash_token.take() {
            self.sched.cancel(token);
        }
        self.flash = None;
        self.flash_lit = false;
    }

    /// Dismiss the expiry alert.
    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    /// Move focus to the next input field.
    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            InputField::Minutes => InputField::Done,
            InputField::Done => InputField::Plan,
            InputField::Plan => InputField::Minutes,
        };
    }

    /// Move focus to the previous input field.
    pub fn prev_field(&mut self) {
        self.focus = match self.focus {
            InputField::Minutes => InputField::Plan,
            InputField::Done => InputField::Minutes,
            InputField::Plan => InputField::Done,
        };
    }

    /// Whether `field` accepts edits right now. The minutes and plan inputs
    /// are frozen while a session runs; the completed note stays editable.
    #[must_use]
    pub fn field_editable(&self, field: InputField) -> bool {
        match field {
            InputField::Done => true,
            InputField::Minutes | InputField::Plan => !self.timer.is_running(),
        }
    }

    /// Type a character into the focused field.
    pub fn insert_char(&mut self, c: char) {
        if !self.field_editable(self.focus) {
            return;
        }
        self.focused_input_mut().push(c);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        if !self.field_editable(self.focus) {
            return;
        }
        self.focused_input_mut().pop();
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focus {
            InputField::Minutes => &mut self.minutes_input,
            InputField::Done => &mut self.done_input,
            InputField::Plan => &mut self.plan_input,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;
    use tempfile::TempDir;

    fn test_app(temp: &TempDir) -> App {
        let mut config = Config::default();
        config.log.directory = Some(temp.path().to_path_buf());
        App::new(&config).unwrap()
    }

    /// Pop the next pending event as if its deadline had passed and deliver
    /// it, mirroring what `drain_due` does in the live event loop.
    fn fire_next(app: &mut App) {
        let far = Instant::now() + Duration::from_secs(3600);
        if let Some(event) = app.sched.pop_due(far) {
            app.on_scheduled(event);
        }
    }

    fn run_to_expiry(app: &mut App) {
        let seconds = app.timer.remaining_seconds();
        for _ in 0..=seconds {
            fire_next(app);
        }
    }

    #[test]
    fn test_start_from_inputs() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.minutes_input = "2".to_string();
        app.plan_input = "Write report".to_string();
        app.done_input = "stale note".to_string();

        app.start_timer();

        assert!(app.timer.is_running());
        assert_eq!(app.timer.remaining_seconds(), 120);
        assert!(app.done_input.is_empty());
    }

    #[test]
    fn test_expiry_logs_and_updates_previous_task() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.minutes_input = "1".to_string();
        app.plan_input = "Write report".to_string();
        app.start_timer();
        app.done_input = "Drafted intro".to_string();

        run_to_expiry(&mut app);

        assert!(!app.timer.is_running());
        assert_eq!(app.previous_task, "Write report");
        assert!(app.alert.is_some());

        let today = Local::now().date_naive();
        let path = temp
            .path()
            .join(format!("pomodoro_log_{}.txt", today.format("%Y-%m-%d")));
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("Planned Task: Write report"));
        assert!(contents.contains("Completed: Drafted intro"));
    }

    #[test]
    fn test_reset_before_tick_writes_no_log() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.minutes_input = "1".to_string();
        app.plan_input = "Write report".to_string();
        app.start_timer();

        app.reset_timer();

        assert!(!app.timer.is_running());
        assert_eq!(app.timer.remaining_seconds(), 0);

        let today = Local::now().date_naive();
        let path = temp
            .path()
            .join(format!("pomodoro_log_{}.txt", today.format("%Y-%m-%d")));
        assert!(!path.exists());
    }

    #[test]
    fn test_start_cancels_residual_flash() {
        let temp = TempDir::new().unwrap();
        let mut config = Config::default();
        config.log.directory = Some(temp.path().to_path_buf());
        config.flash.enabled = true;
        let mut app = App::new(&config).unwrap();

        app.minutes_input = "1".to_string();
        app.start_timer();
        run_to_expiry(&mut app);

        // Flash cycle pending after expiry.
        assert!(app.flash_token.is_some());
        fire_next(&mut app);
        assert!(app.flash_lit);

        app.start_timer();

        assert!(!app.flash_lit);
        assert!(app.flash.is_none());
        assert!(app.flash_token.is_none());
        // Only the fresh countdown tick remains scheduled.
        assert_eq!(app.sched.pending(), 1);
    }

    #[test]
    fn test_flash_disabled_by_default() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.minutes_input = "1".to_string();
        app.start_timer();

        run_to_expiry(&mut app);

        assert!(app.flash.is_none());
        assert!(app.flash_token.is_none());
    }

    #[test]
    fn test_log_failure_reported_on_status_line() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        std::fs::write(&blocker, "occupied").unwrap();

        let mut config = Config::default();
        config.log.directory = Some(blocker);
        let mut app = App::new(&config).unwrap();

        app.minutes_input = "1".to_string();
        app.plan_input = "Write report".to_string();
        app.start_timer();
        run_to_expiry(&mut app);

        // Expiry still completes even though the append failed.
        assert!(!app.timer.is_running());
        assert_eq!(app.previous_task, "Write report");
        assert!(app.alert.is_some());
        assert!(app.status.as_deref().is_some_and(|s| s.contains("Failed")));
    }

    #[test]
    fn test_inputs_frozen_while_running() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.plan_input = "task".to_string();
        app.start_timer();

        app.focus = InputField::Plan;
        app.insert_char('x');
        assert_eq!(app.plan_input, "task");

        app.focus = InputField::Minutes;
        app.backspace();
        assert_eq!(app.minutes_input, "25");

        app.focus = InputField::Done;
        app.insert_char('y');
        assert_eq!(app.done_input, "y");
    }

    #[test]
    fn test_field_cycling_wraps() {
        let temp = TempDir::new().unwrap();
        let mut app = test_app(&temp);
        app.focus = InputField::Minutes;

        app.next_field();
        assert_eq!(app.focus, InputField::Done);
        app.next_field();
        assert_eq!(app.focus, InputField::Plan);
        app.next_field();
        assert_eq!(app.focus, InputField::Minutes);

        app.prev_field();
        assert_eq!(app.focus, InputField::Plan);
    }
}

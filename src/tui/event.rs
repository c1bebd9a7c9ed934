//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::TomataError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start a session from the current inputs.
    Start,
    /// Reset the running session.
    Reset,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, TomataError> {
    // Poll with a small timeout so scheduled ticks stay responsive
    if event::poll(Duration::from_millis(100))
        .map_err(|e| TomataError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| TomataError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl shortcuts before text input
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') => return Ok(Some(Action::Quit)),
                    KeyCode::Char('s') => return Ok(Some(Action::Start)),
                    KeyCode::Char('r') => return Ok(Some(Action::Reset)),
                    _ => return Ok(None),
                }
            }

            // The expiry alert is modal: it swallows keys until dismissed
            if app.alert.is_some() {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                    app.dismiss_alert();
                }
                return Ok(None);
            }

            match key.code {
                // Quit
                KeyCode::Esc => return Ok(Some(Action::Quit)),

                // Start the countdown
                KeyCode::Enter => return Ok(Some(Action::Start)),

                // Field navigation
                KeyCode::Tab => app.next_field(),
                KeyCode::BackTab => app.prev_field(),

                // Text editing in the focused field
                KeyCode::Backspace => app.backspace(),
                KeyCode::Char(c) => app.insert_char(c),

                _ => {}
            }
        }
    }

    Ok(None)
}

//! Post-expiry flash effect.
//!
//! A bounded visual toggle the presentation layer can run after a session
//! ends: the timer pane alternates between lit and unlit for a fixed number
//! of cycles. The effect is purely decorative, disabled by default, and
//! cancel-safe: dropping the effect and cancelling its scheduled step leaves
//! no residual visual state.

use std::time::Duration;

/// Default number of lit/unlit cycles.
pub const DEFAULT_FLASH_CYCLES: u32 = 4;

/// Default delay between toggles.
pub const DEFAULT_FLASH_INTERVAL: Duration = Duration::from_millis(500);

/// Outcome of advancing the flash effect by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashStep {
    /// Set the visual state to lit (true) or unlit (false) and schedule the
    /// next step after [`FlashEffect::interval`].
    Toggle(bool),
    /// All cycles finished; the visual state is unlit and no further steps
    /// should be scheduled.
    Done,
}

/// A bounded lit/unlit alternation.
#[derive(Debug)]
pub struct FlashEffect {
    cycles: u32,
    interval: Duration,
    completed: u32,
    lit: bool,
}

impl FlashEffect {
    /// Create an effect that runs for `cycles` full lit/unlit alternations
    /// with `interval` between toggles.
    #[must_use]
    pub const fn new(cycles: u32, interval: Duration) -> Self {
        Self {
            cycles,
            interval,
            completed: 0,
            lit: false,
        }
    }

    /// Advance to the next step.
    ///
    /// One cycle is a lit toggle followed by an unlit toggle, so an effect
    /// with `cycles = 4` produces eight toggles before reporting `Done`.
    pub fn advance(&mut self) -> FlashStep {
        if self.completed >= self.cycles {
            self.lit = false;
            return FlashStep::Done;
        }

        self.lit = !self.lit;
        if !self.lit {
            self.completed += 1;
        }
        FlashStep::Toggle(self.lit)
    }

    /// Delay between steps.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Current visual state.
    #[must_use]
    pub const fn is_lit(&self) -> bool {
        self.lit
    }
}

//! Single-threaded deadline scheduler.
//!
//! The timer core never spawns threads or sleeps on its own. Instead it asks
//! the scheduler to deliver an event after a delay, and the presentation
//! event loop drains due events each iteration. Every pending event is
//! identified by a token, and cancelling a token synchronously guarantees the
//! event will never be delivered.

use std::time::{Duration, Instant};

/// Handle for a pending scheduled event.
///
/// Tokens are unique within a scheduler and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduleToken(u64);

/// A pending entry in the scheduler.
struct Entry<E> {
    token: ScheduleToken,
    deadline: Instant,
    event: E,
}

/// Deadline queue delivering events to a cooperative event loop.
pub struct Scheduler<E> {
    next_id: u64,
    entries: Vec<Entry<E>>,
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    /// Schedule `event` to fire once `delay` has elapsed from now.
    pub fn schedule_after(&mut self, delay: Duration, event: E) -> ScheduleToken {
        let token = ScheduleToken(self.next_id);
        self.next_id += 1;
        self.entries.push(Entry {
            token,
            deadline: Instant::now() + delay,
            event,
        });
        token
    }

    /// Cancel a pending event.
    ///
    /// After this returns, the event associated with `token` can never be
    /// delivered. Returns false if the token was unknown or already fired.
    pub fn cancel(&mut self, token: ScheduleToken) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.token != token);
        self.entries.len() != before
    }

    /// Remove and return the earliest event whose deadline is at or before
    /// `now`, if any.
    ///
    /// Called repeatedly by the event loop until it returns `None`.
    pub fn pop_due(&mut self, now: Instant) -> Option<E> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline <= now)
            .min_by_key(|(_, e)| e.deadline)
            .map(|(i, _)| i)?;
        Some(self.entries.swap_remove(idx).event)
    }

    /// The earliest pending deadline, used to size event-loop poll timeouts.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|e| e.deadline).min()
    }

    /// Number of pending entries.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.entries.len()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

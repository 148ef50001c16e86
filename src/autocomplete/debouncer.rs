//! Single-slot deferred filter run
//!
//! Scheduling a new run replaces the pending deadline, so at most one filter
//! computation is ever outstanding and a burst of keystrokes produces a single
//! run against the most recent text.

use std::time::{Duration, Instant};

/// Quiet period before filtering kicks in
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Schedule a run `delay` after `now`, superseding any pending run
    pub fn schedule(&mut self, now: Instant) {
        if self.deadline.is_some() {
            log::trace!("superseding pending filter run");
        }
        self.deadline = Some(now + self.delay);
    }

    /// Returns true once when the pending run is due, clearing the slot
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left before the pending run is due (zero if overdue)
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;

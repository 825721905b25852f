//! Deadline-based timers polled by the UI event loop.
//!
//! Nothing here spawns threads: the loop asks each timer how long until it
//! is due, sleeps at most that long waiting for input, then polls.

use std::time::{Duration, Instant};

/// One-shot timer. Re-arming replaces the pending deadline.
#[derive(Debug, Clone, Default)]
pub struct ResetTimer {
    deadline: Option<Instant>,
}

impl ResetTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A deadline past what `Instant` can represent leaves the timer disarmed.
    pub fn arm(&mut self, now: Instant, after: Duration) {
        self.deadline = now.checked_add(after);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns true exactly once, on the first poll at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Fixed-period timer. Missed periods are skipped, not replayed.
///
/// A period too long to schedule means the ticker never fires.
#[derive(Debug, Clone)]
pub struct Ticker {
    period: Duration,
    next: Option<Instant>,
}

impl Ticker {
    pub fn new(period: Duration, now: Instant) -> Self {
        Self {
            period,
            next: now.checked_add(period),
        }
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.next
            .map_or(self.period, |next| next.saturating_duration_since(now))
    }

    pub fn tick(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now >= next => {
                self.next = now.checked_add(self.period);
                true
            }
            _ => false,
        }
    }
}

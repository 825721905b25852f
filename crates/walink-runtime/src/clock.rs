use chrono::{DateTime, FixedOffset, Utc};
use std::time::{Duration, Instant};

use crate::timer::Ticker;

pub const CLOCK_FORMAT: &str = "%H:%M";

/// Wall-clock time as shown on the mock phone, in a fixed UTC offset.
pub fn format_clock(now: DateTime<Utc>, offset: FixedOffset) -> String {
    now.with_timezone(&offset).format(CLOCK_FORMAT).to_string()
}

/// Clock label for the preview, refreshed on a fixed period.
#[derive(Debug, Clone)]
pub struct PreviewClock {
    offset: FixedOffset,
    ticker: Ticker,
    label: String,
}

impl PreviewClock {
    pub fn new(offset: FixedOffset, period: Duration, now: Instant, wall: DateTime<Utc>) -> Self {
        Self {
            offset,
            ticker: Ticker::new(period, now),
            label: format_clock(wall, offset),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    /// Refresh the label when the period has elapsed. Returns true when the
    /// visible text changed.
    pub fn poll(&mut self, now: Instant, wall: DateTime<Utc>) -> bool {
        if !self.ticker.tick(now) {
            return false;
        }

        let label = format_clock(wall, self.offset);
        if label == self.label {
            return false;
        }
        self.label = label;
        true
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.ticker.remaining(now)
    }
}

//! Time sources for shot timestamps.

use chrono::Utc;

/// Source of wall-clock milliseconds.
pub trait Clock {
    fn now_millis(&self) -> i64;
}

/// Clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Session start time, lazily initialized by the first shot after a reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionClock {
    start: Option<i64>,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start time in milliseconds, if a shot has been recorded since the last reset.
    pub fn start(&self) -> Option<i64> {
        self.start
    }

    /// Milliseconds elapsed since the session start, starting it at `now` if unset.
    pub fn elapsed(&mut self, now: i64) -> i64 {
        let start = *self.start.get_or_insert(now);
        now - start
    }

    pub fn reset(&mut self) {
        self.start = None;
    }
}

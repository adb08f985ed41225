//! Speed boost window.
//!
//! A gold apple doubles the snake's speed for a fixed window. The core
//! never reads a clock: callers hand in a monotonic `now` reading (the
//! driver derives it from an `Instant` origin, tests pass literal
//! durations), and the window check is recomputed on every query.

use std::time::Duration;

use tui_snake_types::SPEED_BOOST_DURATION;

/// Timed speed multiplier effect.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpeedBoost {
    started_at: Option<Duration>,
}

impl SpeedBoost {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start the boost window at `now`.
    pub fn activate(&mut self, now: Duration) {
        self.started_at = Some(now);
    }

    /// Whether the window is still open at `now`.
    ///
    /// False if never activated, otherwise true while the elapsed time is
    /// strictly less than `SPEED_BOOST_DURATION`.
    pub fn is_active(&self, now: Duration) -> bool {
        match self.started_at {
            Some(start) => now.saturating_sub(start) < SPEED_BOOST_DURATION,
            None => false,
        }
    }

    /// Clear the stored activation once the window has elapsed, keeping
    /// later queries a plain `None` check.
    pub fn expire(&mut self, now: Duration) {
        if !self.is_active(now) {
            self.started_at = None;
        }
    }
}

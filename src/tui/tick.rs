//! Wall-clock ticks for the event loop.

use std::time::{Duration, Instant};

/// Tracks when the last tick fired so ticks keep a steady pace while
/// input events are arriving.
#[derive(Debug)]
pub struct Ticker {
    /// Time between ticks.
    tick_rate: Duration,
    /// When the last tick fired.
    last_tick: Instant,
}

impl Ticker {
    /// Creates a ticker whose first tick is one `tick_rate` after `now`.
    pub fn new(tick_rate: Duration, now: Instant) -> Self {
        Self {
            tick_rate,
            last_tick: now,
        }
    }

    /// How long to wait for input before the next tick is due.
    pub fn timeout(&self, now: Instant) -> Duration {
        self.tick_rate
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// Reports whether a tick is due at `now`, and if so starts the next
    /// interval.
    pub fn due(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.tick_rate {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

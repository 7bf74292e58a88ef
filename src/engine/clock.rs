use std::time::Duration;

use crate::utils::AppInstant;

const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Fixed-interval tick scheduler, polled once per frame.
///
/// Overdue ticks are not replayed: if several intervals went by (window
/// hidden, alert open) one tick fires and the clock re-anchors to `now`.
#[derive(Debug, Clone, Copy)]
pub struct TickClock {
    interval: Duration,
    last_tick: AppInstant,
}

impl TickClock {
    pub fn new(interval: Duration, now: AppInstant) -> Self {
        Self {
            // Zero would fire every frame
            interval: interval.max(Duration::from_millis(1)),
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True when a tick is due at `now`. Advances the clock when it fires.
    pub fn poll(&mut self, now: AppInstant) -> bool {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed < self.interval {
            return false;
        }
        if elapsed >= self.interval * 2 {
            self.last_tick = now;
        } else {
            self.last_tick += self.interval;
        }
        true
    }

    /// Time until the next tick, for `request_repaint_after`.
    pub fn remaining(&self, now: AppInstant) -> Duration {
        self.interval
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }

    /// When the next frame is needed: at the tick, or sooner so the countdown
    /// label steps once per second.
    pub fn repaint_after(&self, now: AppInstant) -> Duration {
        self.remaining(now).min(COUNTDOWN_STEP)
    }

    /// Start a fresh interval from `now` (used after the alert is dismissed).
    pub fn reset(&mut self, now: AppInstant) {
        self.last_tick = now;
    }
}

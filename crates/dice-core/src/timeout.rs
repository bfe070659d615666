//! Inactivity timeout — blanks the display a fixed number of slow ticks
//! after the roll counter last moved.

/// Idle slow ticks before the display blanks.
///
/// 1024 ticks at the nominal 128 Hz slow tick (32 768 Hz clock divided by
/// [`TICK_DIVIDER`](crate::TICK_DIVIDER)) is 8 seconds, inside the 5–11 s
/// envelope the hardware exhibits. Calibration constant, not derived.
pub const BLANK_TIMEOUT_TICKS: u16 = 1024;

/// Counts slow ticks since the roll counter last moved.
///
/// Cleared on every rolling tick; once the idle count reaches
/// [`BLANK_TIMEOUT_TICKS`] the timer reports expired until the next press
/// produces a rolling tick again.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InactivityTimer {
    idle_ticks: u16,
}

impl InactivityTimer {
    /// Reset state: no idle time accumulated.
    #[must_use]
    pub const fn new() -> Self {
        Self { idle_ticks: 0 }
    }

    /// Advance one slow tick. `rolling` is true when the counter moved.
    pub fn step(&mut self, rolling: bool) {
        if rolling {
            self.idle_ticks = 0;
        } else {
            self.idle_ticks = self.idle_ticks.saturating_add(1);
        }
    }

    /// True once the idle duration has reached the blank threshold.
    #[must_use]
    pub const fn expired(&self) -> bool {
        self.idle_ticks >= BLANK_TIMEOUT_TICKS
    }
}

#[cfg(test)]
mod tests {
    use super::{InactivityTimer, BLANK_TIMEOUT_TICKS};

    #[test]
    fn test_fresh_timer_not_expired() {
        assert!(!InactivityTimer::new().expired());
    }

    #[test]
    fn test_expires_exactly_at_threshold() {
        let mut t = InactivityTimer::new();
        for _ in 0..BLANK_TIMEOUT_TICKS - 1 {
            t.step(false);
            assert!(!t.expired());
        }
        t.step(false);
        assert!(t.expired());
    }

    #[test]
    fn test_rolling_tick_clears_idle_time() {
        let mut t = InactivityTimer::new();
        for _ in 0..100 {
            t.step(false);
        }
        t.step(true);
        for _ in 0..BLANK_TIMEOUT_TICKS - 1 {
            t.step(false);
        }
        assert!(!t.expired());
        t.step(false);
        assert!(t.expired());
    }

    #[test]
    fn test_expired_holds_until_next_roll() {
        let mut t = InactivityTimer::new();
        for _ in 0..BLANK_TIMEOUT_TICKS {
            t.step(false);
        }
        assert!(t.expired());
        // Stays expired through further idle time, saturating.
        for _ in 0..100_000u32 {
            t.step(false);
        }
        assert!(t.expired());
        t.step(true);
        assert!(!t.expired());
    }
}

//! Timing module - fall speed by level
//!
//! The fall interval follows a logarithmic curve:
//! `1000 - 1000 * log_50(level)` milliseconds, i.e. 1000ms at level 1 and
//! about 57ms at level 40, floored at [`MIN_TICK_MS`].

use crate::types::{BASE_TICK_MS, LEVEL_CURVE_BASE, MIN_TICK_MS};

/// Fall interval in milliseconds for `level` (levels below 1 count as 1)
pub fn tick_interval_ms(level: u32) -> u32 {
    let level = f64::from(level.max(1));
    let base = f64::from(BASE_TICK_MS);
    let interval = (base - base * level.log(LEVEL_CURVE_BASE)).round();
    if interval <= f64::from(MIN_TICK_MS) {
        MIN_TICK_MS
    } else {
        interval as u32
    }
}

/// Accumulates elapsed time and hands out fall ticks as they come due
///
/// The interval is looked up each time a tick is taken, so a level change
/// takes effect on the very next tick. Time beyond one interval is dropped
/// when a tick is taken: after a stall the piece falls one row, not a burst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FallClock {
    pending_ms: u32,
}

impl FallClock {
    pub fn new() -> Self {
        Self { pending_ms: 0 }
    }

    /// Add elapsed wall time.
    pub fn accumulate(&mut self, elapsed_ms: u32) {
        self.pending_ms = self.pending_ms.saturating_add(elapsed_ms);
    }

    /// Consume one interval at `level` if enough time has accumulated.
    ///
    /// The remainder is kept below one interval, so a second call without
    /// new time never fires.
    pub fn take_tick(&mut self, level: u32) -> bool {
        let interval = tick_interval_ms(level);
        if self.pending_ms < interval {
            return false;
        }
        self.pending_ms = (self.pending_ms - interval).min(interval - 1);
        true
    }

    pub fn pending_ms(&self) -> u32 {
        self.pending_ms
    }

    pub fn reset(&mut self) {
        self.pending_ms = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_curve() {
        assert_eq!(tick_interval_ms(1), 1000);
        assert_eq!(tick_interval_ms(2), 823);
        assert_eq!(tick_interval_ms(40), 57);
    }

    #[test]
    fn test_interval_is_clamped() {
        assert_eq!(tick_interval_ms(0), 1000);
        assert_eq!(tick_interval_ms(49), MIN_TICK_MS);
        assert_eq!(tick_interval_ms(50), MIN_TICK_MS);
        assert_eq!(tick_interval_ms(10_000), MIN_TICK_MS);
    }

    #[test]
    fn test_interval_decreases_with_level() {
        let mut prev = tick_interval_ms(1);
        for level in 2..60 {
            let next = tick_interval_ms(level);
            assert!(next <= prev, "level {}", level);
            prev = next;
        }
    }

    #[test]
    fn test_clock_hands_out_due_ticks() {
        let mut clock = FallClock::new();
        clock.accumulate(999);
        assert!(!clock.take_tick(1));
        clock.accumulate(1);
        assert!(clock.take_tick(1));
        assert!(!clock.take_tick(1));
        assert_eq!(clock.pending_ms(), 0);

        clock.accumulate(1_250);
        assert!(clock.take_tick(1));
        assert_eq!(clock.pending_ms(), 250);
    }

    #[test]
    fn test_clock_drops_backlog_after_stall() {
        let mut clock = FallClock::new();
        clock.accumulate(60_000);
        assert!(clock.take_tick(1));
        assert!(!clock.take_tick(1));
        assert_eq!(clock.pending_ms(), 999);

        clock.accumulate(1);
        assert!(clock.take_tick(1));
    }

    #[test]
    fn test_clock_uses_current_level() {
        let mut clock = FallClock::new();
        clock.accumulate(900);
        assert!(!clock.take_tick(1));
        assert!(clock.take_tick(2));
        assert_eq!(clock.pending_ms(), 900 - 823);
    }
}

//! Fixed-period tick clock.

use std::time::{Duration, Instant};

/// After a stall (suspended process, slow terminal) at most this many ticks
/// are replayed; the rest are dropped and the clock resynchronises.
pub const MAX_CATCH_UP_TICKS: u32 = 4;

const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Reports gravity ticks at a fixed interval.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    next_due: Instant,
    stopped: bool,
}

impl TickClock {
    /// Start a clock whose first tick is due one `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        let interval = interval.max(MIN_INTERVAL);
        Self {
            interval,
            next_due: now + interval,
            stopped: false,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Number of ticks that became due up to `now`, consuming them.
    pub fn due_ticks(&mut self, now: Instant) -> u32 {
        if self.stopped {
            return 0;
        }

        let mut due = 0;
        while now >= self.next_due {
            due += 1;
            self.next_due += self.interval;
            if due == MAX_CATCH_UP_TICKS {
                if now >= self.next_due {
                    self.next_due = now + self.interval;
                }
                break;
            }
        }
        due
    }

    /// Time left until the next tick, or `None` once stopped.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        if self.stopped {
            return None;
        }
        Some(self.next_due.saturating_duration_since(now))
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Run again with the first tick one interval after `now`.
    pub fn restart(&mut self, now: Instant) {
        self.stopped = false;
        self.next_due = now + self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_500: Duration = Duration::from_millis(500);

    #[test]
    fn test_no_tick_before_interval() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(MS_500, t0);
        assert_eq!(clock.due_ticks(t0), 0);
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(499)), 0);
        assert_eq!(clock.due_ticks(t0 + MS_500), 1);
        assert_eq!(clock.due_ticks(t0 + MS_500), 0);
    }

    #[test]
    fn test_keeps_phase() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(MS_500, t0);
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(700)), 1);
        assert_eq!(clock.due_ticks(t0 + Duration::from_millis(1000)), 1);
        assert_eq!(
            clock.time_until_next(t0 + Duration::from_millis(1200)),
            Some(Duration::from_millis(300))
        );
    }

    #[test]
    fn test_catch_up_is_bounded() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(MS_500, t0);
        let late = t0 + Duration::from_secs(60);
        assert_eq!(clock.due_ticks(late), MAX_CATCH_UP_TICKS);
        assert_eq!(clock.due_ticks(late), 0);
        assert_eq!(clock.time_until_next(late), Some(MS_500));
    }

    #[test]
    fn test_stop_and_restart() {
        let t0 = Instant::now();
        let mut clock = TickClock::new(MS_500, t0);
        clock.stop();
        assert!(clock.is_stopped());
        assert_eq!(clock.due_ticks(t0 + Duration::from_secs(5)), 0);
        assert_eq!(clock.time_until_next(t0), None);

        let t1 = t0 + Duration::from_secs(5);
        clock.restart(t1);
        assert_eq!(clock.due_ticks(t1), 0);
        assert_eq!(clock.due_ticks(t1 + MS_500), 1);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let t0 = Instant::now();
        let clock = TickClock::new(Duration::ZERO, t0);
        assert_eq!(clock.interval(), MIN_INTERVAL);
    }
}

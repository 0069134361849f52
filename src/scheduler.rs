use std::time::{Duration, Instant};

/// Tick gate for the cooperative event loop.
///
/// The caller passes the current effective interval on every poll, so a
/// speed-up or a ghost-mode toggle re-arms the timer on the next iteration
/// without any explicit re-subscription.
#[derive(Debug, Clone, Copy)]
pub struct TickScheduler {
    last_tick: Instant,
}

impl TickScheduler {
    /// Creates a scheduler whose first tick falls one interval after `now`.
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Returns true when `interval` has elapsed since the last granted tick,
    /// and re-arms for the next one.
    pub fn tick_due(&mut self, interval: Duration, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= interval {
            self.last_tick = now;
            return true;
        }
        false
    }

    /// Restarts the interval from `now`; used when a new session begins.
    pub fn rearm(&mut self, now: Instant) {
        self.last_tick = now;
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::TickScheduler;

    #[test]
    fn tick_fires_only_after_the_interval() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        let interval = Duration::from_millis(140);

        assert!(!scheduler.tick_due(interval, t0 + Duration::from_millis(100)));
        assert!(scheduler.tick_due(interval, t0 + Duration::from_millis(140)));
        // Re-armed from the granted tick.
        assert!(!scheduler.tick_due(interval, t0 + Duration::from_millis(200)));
        assert!(scheduler.tick_due(interval, t0 + Duration::from_millis(280)));
    }

    #[test]
    fn shorter_interval_takes_effect_on_the_next_poll() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);

        assert!(!scheduler.tick_due(Duration::from_millis(140), t0 + Duration::from_millis(120)));
        // Ghost mode kicked in: 112 ms already elapsed under the new interval.
        assert!(scheduler.tick_due(Duration::from_millis(112), t0 + Duration::from_millis(120)));
    }

    #[test]
    fn rearm_delays_the_next_tick() {
        let t0 = Instant::now();
        let mut scheduler = TickScheduler::new(t0);
        let interval = Duration::from_millis(140);

        scheduler.rearm(t0 + Duration::from_millis(130));
        assert!(!scheduler.tick_due(interval, t0 + Duration::from_millis(140)));
        assert!(scheduler.tick_due(interval, t0 + Duration::from_millis(270)));
    }
}

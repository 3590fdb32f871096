use std::time::{Duration, Instant};

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Paces the event loop: key events are polled until the next tick is due,
/// then periodic work (toast expiry) runs.
pub struct Ticker {
    rate: Duration,
    last_tick: Instant,
}

impl Ticker {
    pub fn new(rate: Duration) -> Self {
        Self {
            rate,
            last_tick: Instant::now(),
        }
    }

    /// How long to wait for input before the next tick
    pub fn timeout(&self, now: Instant) -> Duration {
        self.rate.saturating_sub(now.duration_since(self.last_tick))
    }

    /// True (and restarts the interval) when a tick is due
    pub fn is_due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last_tick) >= self.rate {
            self.last_tick = now;
            true
        } else {
            false
        }
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_TICK_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_shrinks_until_due() {
        let mut ticker = Ticker::new(Duration::from_millis(250));
        let start = ticker.last_tick;

        assert_eq!(ticker.timeout(start), Duration::from_millis(250));
        assert_eq!(
            ticker.timeout(start + Duration::from_millis(100)),
            Duration::from_millis(150)
        );
        assert!(!ticker.is_due(start + Duration::from_millis(100)));

        let later = start + Duration::from_millis(300);
        assert_eq!(ticker.timeout(later), Duration::ZERO);
        assert!(ticker.is_due(later));
        assert_eq!(ticker.timeout(later), Duration::from_millis(250));
    }
}

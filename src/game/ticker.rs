use std::time::{Duration, Instant};

/// Fixed-interval timer driving the game while it's running.
///
/// A `Ticker` is only ever stored inside the running status of a game, so
/// starting the game acquires one and any way of leaving the running state
/// drops it.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    /// Start a ticker whose first tick is due right away
    pub(crate) fn start(period: Duration, now: Instant) -> Ticker {
        log::trace!("Starting {period:?} ticker");
        Ticker { period, next: now }
    }

    /// The instant at which the next tick is due
    pub(crate) fn deadline(&self) -> Instant {
        self.next
    }

    /// If a tick is due at `now`, consume it, schedule the next one a full
    /// period after `now`, and return `true`.
    pub(crate) fn fire(&mut self, now: Instant) -> bool {
        if now < self.next {
            return false;
        }
        self.next = now + self.period;
        true
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        log::trace!("Stopping ticker");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_immediate() {
        let now = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(45), now);
        assert_eq!(ticker.deadline(), now);
        assert!(ticker.fire(now));
        assert_eq!(ticker.deadline(), now + Duration::from_millis(45));
    }

    #[test]
    fn only_fires_when_due() {
        let start = Instant::now();
        let mut ticker = Ticker::start(Duration::from_millis(45), start);
        assert!(ticker.fire(start));
        assert!(!ticker.fire(start + Duration::from_millis(44)));
        assert!(ticker.fire(start + Duration::from_millis(50)));
        assert_eq!(ticker.deadline(), start + Duration::from_millis(95));
        assert!(!ticker.fire(start + Duration::from_millis(94)));
    }
}

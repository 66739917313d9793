// SPDX-License-Identifier: MPL-2.0
//! Rate limiting for high-frequency events.

use std::time::{Duration, Instant};

/// Admits at most one event per interval.
///
/// The first event always passes; later events pass only once the
/// interval has elapsed since the last admitted one.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    interval: Duration,
    last: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns whether an event at `now` is admitted, recording it if so.
    pub fn ready(&mut self, now: Instant) -> bool {
        let admitted = match self.last {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.interval,
        };
        if admitted {
            self.last = Some(now);
        }
        admitted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_event_is_admitted() {
        let mut throttle = Throttle::new(Duration::from_millis(100));
        assert!(throttle.ready(Instant::now()));
    }

    #[test]
    fn events_inside_the_interval_are_dropped() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        assert!(throttle.ready(start));
        assert!(!throttle.ready(start + Duration::from_millis(50)));
        assert!(!throttle.ready(start + Duration::from_millis(99)));
        assert!(throttle.ready(start + Duration::from_millis(100)));
    }

    #[test]
    fn dropped_events_do_not_extend_the_interval() {
        let start = Instant::now();
        let mut throttle = Throttle::new(Duration::from_millis(100));

        assert!(throttle.ready(start));
        assert!(!throttle.ready(start + Duration::from_millis(90)));
        assert!(throttle.ready(start + Duration::from_millis(110)));
    }
}

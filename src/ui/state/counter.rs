// SPDX-License-Identifier: MPL-2.0
//! One-shot animated statistics counters.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Running { started: Instant },
    Done,
}

/// A counter that climbs from zero to a target once triggered.
///
/// Triggering is one-shot: once the animation has started, later
/// triggers are ignored and the counter never restarts.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    target: u64,
    duration: Duration,
    state: State,
}

impl Counter {
    pub fn new(target: u64, duration: Duration) -> Self {
        Self {
            target,
            duration,
            state: State::Idle,
        }
    }

    /// Starts the climb at `now`. No-op once started.
    pub fn trigger(&mut self, now: Instant) {
        if self.state == State::Idle {
            self.state = State::Running { started: now };
        }
    }

    /// Marks the counter finished once its duration has elapsed.
    pub fn settle(&mut self, now: Instant) {
        if let State::Running { started } = self.state {
            if now.saturating_duration_since(started) >= self.duration {
                self.state = State::Done;
            }
        }
    }

    /// Displayed value at `now`. Monotonic for monotonic `now`, and
    /// exactly the target once the duration has elapsed.
    pub fn value_at(&self, now: Instant) -> u64 {
        match self.state {
            State::Idle => 0,
            State::Done => self.target,
            State::Running { started } => {
                if self.duration.is_zero() {
                    return self.target;
                }
                let elapsed = now.saturating_duration_since(started);
                let progress =
                    (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0);
                (self.target as f64 * progress).floor() as u64
            }
        }
    }

    /// Whether the counter still needs animation ticks.
    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running { .. })
    }

    pub fn has_started(&self) -> bool {
        self.state != State::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_counter_shows_zero() {
        let counter = Counter::new(500, Duration::from_millis(2_000));
        assert_eq!(counter.value_at(Instant::now()), 0);
        assert!(!counter.has_started());
    }

    #[test]
    fn value_climbs_monotonically_to_target() {
        let start = Instant::now();
        let mut counter = Counter::new(500, Duration::from_millis(2_000));
        counter.trigger(start);

        let mut previous = 0;
        for millis in (0..=2_000).step_by(100) {
            let value = counter.value_at(start + Duration::from_millis(millis));
            assert!(value >= previous);
            previous = value;
        }
        assert_eq!(previous, 500);
    }

    #[test]
    fn trigger_is_one_shot() {
        let start = Instant::now();
        let mut counter = Counter::new(100, Duration::from_millis(2_000));
        counter.trigger(start);

        let midway = start + Duration::from_millis(1_000);
        let before = counter.value_at(midway);
        counter.trigger(midway);
        assert_eq!(counter.value_at(midway), before);
    }

    #[test]
    fn settle_finishes_after_duration() {
        let start = Instant::now();
        let mut counter = Counter::new(42, Duration::from_millis(2_000));
        counter.trigger(start);

        counter.settle(start + Duration::from_millis(1_999));
        assert!(counter.is_running());

        counter.settle(start + Duration::from_millis(2_000));
        assert!(!counter.is_running());
        assert_eq!(counter.value_at(start + Duration::from_millis(2_000)), 42);
    }

    #[test]
    fn zero_duration_lands_immediately() {
        let start = Instant::now();
        let mut counter = Counter::new(9, Duration::ZERO);
        counter.trigger(start);
        assert_eq!(counter.value_at(start), 9);
    }
}

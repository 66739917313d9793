// SPDX-License-Identifier: MPL-2.0
//! Page scroll position and animated scrolling.

use std::time::{Duration, Instant};

use crate::config::defaults;

/// Current vertical scroll position of the page.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollState {
    offset: f32,
}

impl ScrollState {
    /// Records the absolute offset reported by the scrollable.
    pub fn record(&mut self, offset: f32) {
        self.offset = offset.max(0.0);
    }

    /// Absolute vertical offset in logical pixels.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Whether the header renders with a drop shadow.
    pub fn header_elevated(&self) -> bool {
        self.offset > defaults::HEADER_ELEVATION_OFFSET
    }

    /// Whether the scroll-to-top button is shown.
    pub fn show_scroll_top(&self) -> bool {
        self.offset > defaults::SCROLL_TOP_VISIBLE_OFFSET
    }
}

/// An in-flight animated scroll between two offsets.
///
/// The animation is a pure function of time: each tick asks for the
/// offset at `now` and snaps the scrollable there, so dropped ticks
/// lose smoothness but never accuracy.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started: Instant, duration: Duration) -> Self {
        Self {
            from,
            to,
            started,
            duration,
        }
    }

    /// Destination offset.
    pub fn target(&self) -> f32 {
        self.to
    }

    /// Offset at `now`, eased so the motion decelerates into the target.
    pub fn offset_at(&self, now: Instant) -> f32 {
        let progress = self.progress_at(now);
        self.from + (self.to - self.from) * ease_out_cubic(progress)
    }

    /// Whether the animation has reached its target at `now`.
    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress_at(now) >= 1.0
    }

    fn progress_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
}

fn ease_out_cubic(t: f32) -> f32 {
    let inverted = 1.0 - t;
    1.0 - inverted * inverted * inverted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_elevates_past_offset_threshold() {
        let mut state = ScrollState::default();
        assert!(!state.header_elevated());

        state.record(defaults::HEADER_ELEVATION_OFFSET + 1.0);
        assert!(state.header_elevated());
    }

    #[test]
    fn scroll_top_button_appears_past_threshold() {
        let mut state = ScrollState::default();
        state.record(defaults::SCROLL_TOP_VISIBLE_OFFSET);
        assert!(!state.show_scroll_top());

        state.record(defaults::SCROLL_TOP_VISIBLE_OFFSET + 1.0);
        assert!(state.show_scroll_top());
    }

    #[test]
    fn negative_offsets_clamp_to_zero() {
        let mut state = ScrollState::default();
        state.record(-20.0);
        assert_eq!(state.offset(), 0.0);
    }

    #[test]
    fn animation_starts_at_origin_and_ends_at_target() {
        let started = Instant::now();
        let animation = ScrollAnimation::new(0.0, 600.0, started, Duration::from_millis(400));

        assert_eq!(animation.offset_at(started), 0.0);
        assert_eq!(animation.offset_at(started + Duration::from_millis(400)), 600.0);
        assert!(animation.is_finished(started + Duration::from_millis(400)));
    }

    #[test]
    fn animation_decelerates_toward_target() {
        let started = Instant::now();
        let animation = ScrollAnimation::new(0.0, 100.0, started, Duration::from_millis(400));

        let halfway = animation.offset_at(started + Duration::from_millis(200));
        assert!(halfway > 50.0, "ease-out covers most distance early: {halfway}");
        assert!(halfway < 100.0);
    }

    #[test]
    fn zero_duration_jumps_straight_to_target() {
        let started = Instant::now();
        let animation = ScrollAnimation::new(40.0, 0.0, started, Duration::ZERO);

        assert_eq!(animation.offset_at(started), 0.0);
        assert!(animation.is_finished(started));
    }
}

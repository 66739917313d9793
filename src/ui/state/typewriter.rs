// SPDX-License-Identifier: MPL-2.0
//! Character-by-character reveal for the hero tagline.

use std::time::{Duration, Instant};

/// Reveals a fixed string one character at a time.
///
/// The first character appears the moment the animation starts and one
/// more is added per interval. Until started, nothing is shown.
#[derive(Debug, Clone)]
pub struct Typewriter {
    full: String,
    char_count: usize,
    interval: Duration,
    started: Option<Instant>,
}

impl Typewriter {
    pub fn new(text: impl Into<String>, interval: Duration) -> Self {
        let full = text.into();
        let char_count = full.chars().count();
        Self {
            full,
            char_count,
            interval,
            started: None,
        }
    }

    /// Starts the reveal at `now`. Later calls are ignored.
    pub fn start(&mut self, now: Instant) {
        if self.started.is_none() {
            self.started = Some(now);
        }
    }

    /// The portion of the text visible at `now`.
    pub fn visible_at(&self, now: Instant) -> &str {
        let revealed = self.revealed_at(now);
        match self.full.char_indices().nth(revealed) {
            Some((byte, _)) => &self.full[..byte],
            None => &self.full,
        }
    }

    /// Whether the full text is visible at `now`.
    pub fn is_done_at(&self, now: Instant) -> bool {
        self.revealed_at(now) >= self.char_count
    }

    /// Whether the reveal has started but not finished at `now`.
    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.started.is_some() && !self.is_done_at(now)
    }

    fn revealed_at(&self, now: Instant) -> usize {
        let Some(started) = self.started else {
            return 0;
        };
        if self.interval.is_zero() {
            return self.char_count;
        }
        let elapsed = now.saturating_duration_since(started);
        let steps = (elapsed.as_millis() / self.interval.as_millis()) as usize;
        steps.saturating_add(1).min(self.char_count)
    }
}

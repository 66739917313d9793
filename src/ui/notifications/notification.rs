// SPDX-License-Identifier: MPL-2.0
//! A single toast notification and its time-driven lifecycle.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use crate::config::defaults;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Unique identifier of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Visual severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    /// Accent color used by the toast border.
    pub fn color(self) -> iced::Color {
        use crate::ui::design_tokens::palette;
        match self {
            Self::Info => palette::INFO_500,
            Self::Error => palette::ERROR_500,
        }
    }
}

/// Lifecycle phase of a notification at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not yet slid in; rendered invisible.
    Entering,
    /// Fully visible.
    Visible,
    /// Sliding out after expiry or dismissal.
    Leaving,
    /// Finished; to be removed by the next sweep.
    Expired,
}

/// Lifecycle durations, resolved from configuration at creation time.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    /// Delay between creation and slide-in.
    pub show_delay: Duration,
    /// Time on screen before the automatic slide-out.
    pub display: Duration,
    /// Length of the slide-out.
    pub exit: Duration,
}

impl Timings {
    /// Timings with the given display time, clamped to the supported
    /// range. Show delay and exit length are fixed.
    pub fn with_display_ms(display_ms: u64) -> Self {
        let display_ms = display_ms.clamp(
            defaults::MIN_NOTIFICATION_DISPLAY_MS,
            defaults::MAX_NOTIFICATION_DISPLAY_MS,
        );
        Self {
            show_delay: Duration::from_millis(defaults::DEFAULT_NOTIFICATION_SHOW_DELAY_MS),
            display: Duration::from_millis(display_ms),
            exit: Duration::from_millis(defaults::DEFAULT_NOTIFICATION_EXIT_MS),
        }
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self::with_display_ms(defaults::DEFAULT_NOTIFICATION_DISPLAY_MS)
    }
}

/// One toast message with its creation time and optional dismissal.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    severity: Severity,
    timings: Timings,
    created_at: Instant,
    dismissed_at: Option<Instant>,
}

impl Notification {
    pub fn new(
        message: impl Into<String>,
        severity: Severity,
        timings: Timings,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::next(),
            message: message.into(),
            severity,
            timings,
            created_at,
            dismissed_at: None,
        }
    }

    pub fn id(&self) -> NotificationId {
        self.id
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Dismisses the notification at `now`, starting its slide-out
    /// immediately. Repeated calls keep the first dismissal time.
    /// Returns whether this call performed the dismissal.
    pub fn dismiss(&mut self, now: Instant) -> bool {
        if self.dismissed_at.is_some() {
            return false;
        }
        self.dismissed_at = Some(now);
        true
    }

    /// Lifecycle phase at `now`.
    ///
    /// A manual dismissal overrides the automatic schedule: the
    /// slide-out runs from the dismissal time, even if the notification
    /// had not finished sliding in.
    pub fn phase_at(&self, now: Instant) -> Phase {
        if let Some(dismissed_at) = self.dismissed_at {
            let since_dismissal = now.saturating_duration_since(dismissed_at);
            return if since_dismissal < self.timings.exit {
                Phase::Leaving
            } else {
                Phase::Expired
            };
        }

        // The display window runs from creation, so the entry delay
        // spends part of it rather than extending it.
        let age = now.saturating_duration_since(self.created_at);
        if age < self.timings.show_delay {
            Phase::Entering
        } else if age < self.timings.display {
            Phase::Visible
        } else if age < self.timings.display + self.timings.exit {
            Phase::Leaving
        } else {
            Phase::Expired
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notification(created_at: Instant) -> Notification {
        Notification::new("saved", Severity::Info, Timings::default(), created_at)
    }

    #[test]
    fn ids_are_unique() {
        let now = Instant::now();
        assert_ne!(notification(now).id(), notification(now).id());
    }

    #[test]
    fn phases_follow_the_automatic_schedule() {
        let created = Instant::now();
        let toast = notification(created);

        assert_eq!(toast.phase_at(created), Phase::Entering);
        assert_eq!(toast.phase_at(created + Duration::from_millis(100)), Phase::Visible);
        assert_eq!(toast.phase_at(created + Duration::from_millis(4_999)), Phase::Visible);
        assert_eq!(toast.phase_at(created + Duration::from_millis(5_000)), Phase::Leaving);
        assert_eq!(toast.phase_at(created + Duration::from_millis(5_300)), Phase::Expired);
    }

    #[test]
    fn dismissal_starts_the_slide_out_immediately() {
        let created = Instant::now();
        let mut toast = notification(created);
        let dismissed = created + Duration::from_millis(1_000);

        assert!(toast.dismiss(dismissed));
        assert_eq!(toast.phase_at(dismissed), Phase::Leaving);
        assert_eq!(toast.phase_at(dismissed + Duration::from_millis(300)), Phase::Expired);
    }

    #[test]
    fn dismissal_cancels_the_automatic_schedule() {
        let created = Instant::now();
        let mut toast = notification(created);
        toast.dismiss(created + Duration::from_millis(50));

        // The automatic slide-in at 100ms never happens.
        assert_eq!(toast.phase_at(created + Duration::from_millis(100)), Phase::Leaving);
        assert_eq!(toast.phase_at(created + Duration::from_millis(400)), Phase::Expired);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let created = Instant::now();
        let mut toast = notification(created);

        assert!(toast.dismiss(created + Duration::from_millis(500)));
        assert!(!toast.dismiss(created + Duration::from_millis(4_000)));
        // The first dismissal time still governs the phase.
        assert_eq!(toast.phase_at(created + Duration::from_millis(900)), Phase::Expired);
    }

    #[test]
    fn display_time_is_clamped_to_supported_range() {
        let timings = Timings::with_display_ms(200);
        assert_eq!(timings.display, Duration::from_millis(defaults::MIN_NOTIFICATION_DISPLAY_MS));

        let timings = Timings::with_display_ms(90_000);
        assert_eq!(timings.display, Duration::from_millis(defaults::MAX_NOTIFICATION_DISPLAY_MS));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Owner of all live notifications.

use std::time::Instant;

use super::notification::{Notification, NotificationId, Phase, Severity, Timings};

/// Messages emitted by toast widgets.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The dismiss button of a toast was pressed.
    Dismiss(NotificationId),
}

/// Creates notifications, answers dismissals, and removes expired ones.
#[derive(Debug, Default)]
pub struct Manager {
    notifications: Vec<Notification>,
}

impl Manager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a notification and returns its id.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        timings: Timings,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(message, severity, timings, now);
        let id = notification.id();
        self.notifications.push(notification);
        id
    }

    /// Dismisses the notification with `id`, if it is still live.
    /// Unknown ids and repeated dismissals are no-ops returning `false`.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        self.notifications
            .iter_mut()
            .find(|n| n.id() == id)
            .is_some_and(|n| n.dismiss(now))
    }

    /// Drops every notification that has finished its slide-out.
    pub fn sweep(&mut self, now: Instant) {
        self.notifications
            .retain(|n| n.phase_at(now) != Phase::Expired);
    }

    /// Live notifications with their phase at `now`, oldest first.
    pub fn iter_at(&self, now: Instant) -> impl Iterator<Item = (&Notification, Phase)> {
        self.notifications.iter().filter_map(move |n| {
            let phase = n.phase_at(now);
            (phase != Phase::Expired).then_some((n, phase))
        })
    }

    /// Whether any notification still needs animation ticks.
    pub fn has_live(&self) -> bool {
        !self.notifications.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn manager_with_one(now: Instant) -> (Manager, NotificationId) {
        let mut manager = Manager::new();
        let id = manager.notify("hello", Severity::Info, Timings::default(), now);
        (manager, id)
    }

    #[test]
    fn notify_returns_a_usable_id() {
        let now = Instant::now();
        let (mut manager, id) = manager_with_one(now);

        assert!(manager.dismiss(id, now));
    }

    #[test]
    fn dismissing_an_unknown_id_is_a_no_op() {
        let now = Instant::now();
        let (mut manager, id) = manager_with_one(now);
        let (mut other, _) = manager_with_one(now);

        assert!(!other.dismiss(id, now));
        assert!(manager.dismiss(id, now));
        assert!(!manager.dismiss(id, now));
    }

    #[test]
    fn sweep_removes_expired_notifications_only() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let old = manager.notify("old", Severity::Info, Timings::default(), now);
        manager.notify("new", Severity::Error, Timings::default(), now + Duration::from_secs(3));
        manager.dismiss(old, now);

        manager.sweep(now + Duration::from_millis(3_500));

        let remaining: Vec<_> = manager
            .iter_at(now + Duration::from_millis(3_500))
            .map(|(n, _)| n.message().to_owned())
            .collect();
        assert_eq!(remaining, vec!["new"]);
    }

    #[test]
    fn iter_skips_expired_notifications_before_sweep() {
        let now = Instant::now();
        let (mut manager, id) = manager_with_one(now);
        manager.dismiss(id, now);

        let after_exit = now + Duration::from_millis(400);
        assert_eq!(manager.iter_at(after_exit).count(), 0);
        assert!(manager.has_live());

        manager.sweep(after_exit);
        assert!(!manager.has_live());
    }
}

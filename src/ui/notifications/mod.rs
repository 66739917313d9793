// SPDX-License-Identifier: MPL-2.0
//! Transient toast notifications.
//!
//! A notification is born hidden, slides in after a short delay, stays
//! on screen for a configurable time, then slides out and is removed.
//! Manual dismissal takes over the lifecycle and skips the remaining
//! display time.

pub mod manager;
pub mod notification;
pub mod toast;

pub use manager::{Manager, Message};
pub use notification::{Notification, NotificationId, Phase, Severity, Timings};

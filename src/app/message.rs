// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::page;
use iced::{Point, Size};
use std::time::Instant;

/// Runtime flags parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Override for the configuration directory (`--config-dir`).
    pub config_dir: Option<String>,
}

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Page(page::Message),
    Navbar(navbar::Message),
    Notification(notifications::Message),
    /// Periodic tick driving notifications and page animations.
    Tick(Instant),
    WindowResized(Size),
    /// Escape closes the compact menu.
    EscapePressed,
    /// Tab cycles menu focus while the compact menu is open.
    TabPressed { shift: bool },
    /// Enter activates the focused menu entry.
    ActivateFocused,
    CursorMoved(Point),
    /// Left click anywhere; closes the menu when outside it.
    MousePressed,
    ScrollToTop,
}

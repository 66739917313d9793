// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native events (keyboard, mouse, window) to top-level messages.
//! Keyboard and click routing depends on whether the compact menu is
//! open, so the listener is picked outside the closure.

use super::Message;
use crate::config::defaults;
use iced::{event, keyboard, mouse, time, window, Subscription};
use std::time::Duration;

/// Creates the native event subscription.
///
/// With the menu closed only window geometry is interesting. With the
/// menu open, Tab/Shift+Tab, Enter, Escape, and outside clicks are
/// routed as well.
pub fn create_event_subscription(menu_open: bool) -> Subscription<Message> {
    if menu_open {
        event::listen_with(|event, status, _window_id| {
            if let Some(message) = window_message(&event) {
                return Some(message);
            }

            match &event {
                event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                    return Some(Message::CursorMoved(*position));
                }
                event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                    return Some(Message::MousePressed);
                }
                _ => {}
            }

            // Keyboard handling owns the menu even when a widget
            // captured the event, mirroring capture-phase handling.
            match &event {
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Escape),
                    ..
                }) => Some(Message::EscapePressed),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Tab),
                    modifiers,
                    ..
                }) => Some(Message::TabPressed {
                    shift: modifiers.shift(),
                }),
                event::Event::Keyboard(keyboard::Event::KeyPressed {
                    key: keyboard::Key::Named(keyboard::key::Named::Enter),
                    ..
                }) if status == event::Status::Ignored => Some(Message::ActivateFocused),
                _ => None,
            }
        })
    } else {
        event::listen_with(|event, _status, _window_id| window_message(&event))
    }
}

fn window_message(event: &event::Event) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(*size)),
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowResized(*size))
        }
        _ => None,
    }
}

/// Creates a periodic tick subscription for notification lifecycles and
/// page animations. Idle applications receive no ticks.
pub fn create_tick_subscription(needs_tick: bool) -> Subscription<Message> {
    if needs_tick {
        time::every(Duration::from_millis(defaults::TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

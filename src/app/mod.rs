// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page component, the navbar with
//! its compact-menu focus trap, and the notification manager. Policy
//! decisions (breakpoint handling, menu dismissal rules, notification
//! timing) stay close to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, defaults, Config};
use crate::content::SectionId;
use crate::ui::design_tokens::sizing;
use crate::ui::navbar;
use crate::ui::notifications::{self, Severity, Timings};
use crate::ui::page;
use crate::ui::state::{FocusTrap, TabDirection, TabOutcome};
use crate::ui::theming::ThemeMode;
use iced::{Element, Point, Size, Subscription, Task, Theme};
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1_000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 480;

const FORM_ACCEPTED_MESSAGE: &str = "Thank you! Your message has been sent.";
const FORM_REJECTED_MESSAGE: &str = "Please complete all required fields correctly.";

/// Root Iced application state.
pub struct App {
    config: Config,
    theme_mode: ThemeMode,
    window_size: Size,
    cursor: Point,
    /// Whether the compact hamburger menu is open.
    menu_open: bool,
    /// Focus cycle for the open menu; `None` while the menu is closed.
    focus_trap: Option<FocusTrap<SectionId>>,
    page: page::State,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// Time of the last tick; keeps rendering deterministic between ticks.
    now: Instant,
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced::application wants a Fn closure, but the flags are consumed
    // by App::new. Stash them in a RefCell<Option<_>> and take() on the
    // single boot call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("boot called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes the application from command-line flags and the
    /// persisted configuration.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let now = Instant::now();
        let (config, config_warning) = config::load();
        let mut app = Self::with_config(config, now);

        if let Some(warning) = config_warning {
            app.notify(warning, Severity::Error, now);
        }

        let viewport_height = app.window_size.height - sizing::NAVBAR_HEIGHT;
        let task = app.page.refresh(viewport_height, now).map(Message::Page);
        (app, task)
    }

    fn with_config(config: Config, now: Instant) -> Self {
        let theme_mode = config.general.theme_mode;
        let page = page::State::new(&config, now);

        App {
            config,
            theme_mode,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: Point::ORIGIN,
            menu_open: false,
            focus_trap: None,
            page,
            notifications: notifications::Manager::new(),
            now,
        }
    }

    fn title(&self) -> String {
        self.page.brand().to_owned()
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(self.menu_open),
            subscription::create_tick_subscription(
                self.page.needs_tick(self.now) || self.notifications.has_live(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(msg) => {
                let now = Instant::now();
                let (effect, task) = self.page.handle_message(msg, now);
                match effect {
                    page::Effect::None => {}
                    page::Effect::FormAccepted => {
                        self.notify(FORM_ACCEPTED_MESSAGE, Severity::Info, now);
                    }
                    page::Effect::FormRejected => {
                        self.notify(FORM_REJECTED_MESSAGE, Severity::Error, now);
                    }
                }
                task.map(Message::Page)
            }
            Message::Navbar(msg) => {
                let event = navbar::update(msg, &mut self.menu_open);
                self.sync_focus_trap();
                if let navbar::Event::NavigateTo(id) = event {
                    self.page.scroll_to_section(id, Instant::now());
                }
                Task::none()
            }
            Message::Notification(notifications::Message::Dismiss(id)) => {
                self.notifications.dismiss(id, Instant::now());
                Task::none()
            }
            Message::Tick(now) => {
                self.now = now;
                self.notifications.sweep(now);
                self.page.tick(now).map(Message::Page)
            }
            Message::WindowResized(size) => {
                self.window_size = size;
                // Leaving the compact range closes the menu: the links
                // are inline again and the trap has nothing to cycle.
                if !self.is_compact() && self.menu_open {
                    self.menu_open = false;
                    self.sync_focus_trap();
                }
                let viewport_height = size.height - sizing::NAVBAR_HEIGHT;
                self.page
                    .refresh(viewport_height, Instant::now())
                    .map(Message::Page)
            }
            Message::EscapePressed => {
                self.close_menu();
                Task::none()
            }
            Message::TabPressed { shift } => {
                let direction = if shift {
                    TabDirection::Backward
                } else {
                    TabDirection::Forward
                };
                if let Some(trap) = &mut self.focus_trap {
                    if let TabOutcome::PassThrough = trap.handle_tab(direction) {
                        trap.step(direction);
                    }
                }
                Task::none()
            }
            Message::ActivateFocused => {
                if let Some(id) = self.focus_trap.as_ref().and_then(FocusTrap::focused) {
                    self.close_menu();
                    self.page.scroll_to_section(id, Instant::now());
                }
                Task::none()
            }
            Message::CursorMoved(position) => {
                self.cursor = position;
                Task::none()
            }
            Message::MousePressed => {
                if self.menu_open && !self.is_over_menu(self.cursor) {
                    self.close_menu();
                }
                Task::none()
            }
            Message::ScrollToTop => {
                self.page.scroll_to_top(Instant::now());
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            page: &self.page,
            notifications: &self.notifications,
            menu_open: self.menu_open,
            compact: self.is_compact(),
            focused: self.focus_trap.as_ref().and_then(FocusTrap::focused),
            now: self.now,
        })
    }

    fn notify(&mut self, message: impl Into<String>, severity: Severity, now: Instant) {
        let display_ms = self
            .config
            .notifications
            .display_ms
            .unwrap_or(defaults::DEFAULT_NOTIFICATION_DISPLAY_MS);
        let timings = Timings::with_display_ms(display_ms);
        self.notifications.notify(message, severity, timings, now);
    }

    fn is_compact(&self) -> bool {
        self.window_size.width <= defaults::COMPACT_BREAKPOINT
    }

    /// Keeps the focus trap in step with the menu: opening builds a
    /// fresh trap focused on the first entry, closing drops it.
    fn sync_focus_trap(&mut self) {
        if self.menu_open {
            if self.focus_trap.is_none() {
                self.focus_trap = Some(FocusTrap::open(SectionId::ALL.to_vec()));
            }
        } else {
            self.focus_trap = None;
        }
    }

    fn close_menu(&mut self) {
        self.menu_open = false;
        self.focus_trap = None;
    }

    /// Whether the cursor is over the open dropdown panel or the
    /// hamburger corner of the header. Clicks anywhere else, the brand
    /// text included, dismiss the menu.
    fn is_over_menu(&self, position: Point) -> bool {
        if position.y <= sizing::NAVBAR_HEIGHT {
            return position.x >= self.window_size.width - sizing::HAMBURGER_REGION_WIDTH;
        }
        let entries = SectionId::ALL.len() as f32;
        let panel_bottom = sizing::NAVBAR_HEIGHT
            + entries * sizing::MENU_ENTRY_HEIGHT
            + 2.0 * crate::ui::design_tokens::spacing::XS;
        position.y <= panel_bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::navbar::Message as NavbarMessage;

    fn app() -> App {
        App::with_config(Config::default(), Instant::now())
    }

    fn compact_app() -> App {
        let mut app = app();
        let _ = app.update(Message::WindowResized(Size::new(480.0, 800.0)));
        app
    }

    #[test]
    fn opening_the_menu_builds_a_focus_trap_on_the_first_entry() {
        let mut app = compact_app();

        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        assert!(app.menu_open);
        let trap = app.focus_trap.as_ref().unwrap();
        assert_eq!(trap.focused(), Some(SectionId::ALL[0]));
    }

    #[test]
    fn tab_wraps_at_the_last_entry() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        // One step short of a full cycle lands on the last entry.
        for _ in 1..SectionId::ALL.len() {
            let _ = app.update(Message::TabPressed { shift: false });
        }
        let last = *SectionId::ALL.last().unwrap();
        assert_eq!(app.focus_trap.as_ref().unwrap().focused(), Some(last));

        let _ = app.update(Message::TabPressed { shift: false });
        assert_eq!(
            app.focus_trap.as_ref().unwrap().focused(),
            Some(SectionId::ALL[0])
        );
    }

    #[test]
    fn shift_tab_wraps_backward_from_the_first_entry() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::TabPressed { shift: true });

        let last = *SectionId::ALL.last().unwrap();
        assert_eq!(app.focus_trap.as_ref().unwrap().focused(), Some(last));
    }

    #[test]
    fn escape_closes_the_menu_and_drops_the_trap() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::EscapePressed);

        assert!(!app.menu_open);
        assert!(app.focus_trap.is_none());
    }

    #[test]
    fn clicking_outside_the_panel_closes_the_menu() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::CursorMoved(Point::new(200.0, 700.0)));
        let _ = app.update(Message::MousePressed);

        assert!(!app.menu_open);
    }

    #[test]
    fn a_width_of_exactly_the_breakpoint_is_still_compact() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::WindowResized(Size::new(
            defaults::COMPACT_BREAKPOINT,
            800.0,
        )));

        assert!(app.is_compact());
        assert!(app.menu_open);

        let _ = app.update(Message::WindowResized(Size::new(
            defaults::COMPACT_BREAKPOINT + 1.0,
            800.0,
        )));
        assert!(!app.is_compact());
        assert!(!app.menu_open);
    }

    #[test]
    fn clicking_the_brand_strip_closes_the_menu() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::CursorMoved(Point::new(30.0, 28.0)));
        let _ = app.update(Message::MousePressed);

        assert!(!app.menu_open);
    }

    #[test]
    fn clicking_the_hamburger_corner_keeps_the_menu_open() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::CursorMoved(Point::new(470.0, 28.0)));
        let _ = app.update(Message::MousePressed);

        assert!(app.menu_open);
    }

    #[test]
    fn clicking_inside_the_panel_keeps_the_menu_open() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::CursorMoved(Point::new(200.0, 80.0)));
        let _ = app.update(Message::MousePressed);

        assert!(app.menu_open);
    }

    #[test]
    fn widening_past_the_breakpoint_closes_the_menu() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::WindowResized(Size::new(1_200.0, 800.0)));

        assert!(!app.menu_open);
        assert!(app.focus_trap.is_none());
    }

    #[test]
    fn reopening_starts_a_fresh_trap() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));
        let _ = app.update(Message::TabPressed { shift: false });
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));

        assert_eq!(
            app.focus_trap.as_ref().unwrap().focused(),
            Some(SectionId::ALL[0])
        );
    }

    #[test]
    fn activating_a_focused_entry_navigates_and_closes() {
        let mut app = compact_app();
        let _ = app.update(Message::Navbar(NavbarMessage::ToggleMenu));
        let _ = app.update(Message::TabPressed { shift: false });

        let _ = app.update(Message::ActivateFocused);

        assert!(!app.menu_open);
        assert!(app.focus_trap.is_none());
    }

    #[test]
    fn rejected_form_submissions_raise_an_error_toast() {
        let mut app = app();

        let _ = app.update(Message::Page(page::Message::SubmitForm));

        assert!(app.notifications.has_live());
        let now = Instant::now();
        let severities: Vec<Severity> = app
            .notifications
            .iter_at(now)
            .map(|(n, _)| n.severity())
            .collect();
        assert_eq!(severities, vec![Severity::Error]);
    }

    #[test]
    fn dismissing_a_toast_is_idempotent_across_updates() {
        let mut app = app();
        let now = Instant::now();
        let id = app
            .notifications
            .notify("saved", Severity::Info, Timings::default(), now);

        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));
        let _ = app.update(Message::Notification(notifications::Message::Dismiss(id)));

        assert!(app.notifications.has_live());
    }
}

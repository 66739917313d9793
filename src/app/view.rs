// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Stacks the page under the fixed header, then layers the scroll-to-top
//! button and the toast overlay on top.

use super::Message;
use crate::content::SectionId;
use crate::ui::design_tokens::{opacity, palette, spacing, typography};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{toast::Toast, Manager};
use crate::ui::page;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Stack, Text},
    Element, Length,
};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub page: &'a page::State,
    pub notifications: &'a Manager,
    pub menu_open: bool,
    pub compact: bool,
    pub focused: Option<SectionId>,
    pub now: Instant,
}

/// Renders the whole window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(NavbarViewContext {
        brand: ctx.page.brand(),
        sections: &SectionId::ALL,
        menu_open: ctx.menu_open,
        compact: ctx.compact,
        focused: ctx.focused,
        elevated: ctx.page.header_elevated(),
    })
    .map(Message::Navbar);

    let page_view = ctx.page.view(ctx.now).map(Message::Page);

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(page_view)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    let mut stack = Stack::new().push(base);

    if ctx.page.show_scroll_top() {
        stack = stack.push(scroll_top_button());
    }

    stack = stack.push(Toast::view_overlay(ctx.notifications, ctx.now).map(Message::Notification));

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn scroll_top_button<'a>() -> Element<'a, Message> {
    let control = button(Text::new("↑").size(typography::TITLE_SM))
        .on_press(Message::ScrollToTop)
        .padding(spacing::SM)
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_STRONG,
        ));

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

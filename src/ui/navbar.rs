// SPDX-License-Identifier: MPL-2.0
//! Navigation bar for the brochure page.
//!
//! On wide windows the section links render inline in the header. At or
//! below the compact breakpoint they collapse behind a hamburger button
//! that opens a dropdown panel.

use crate::content::SectionId;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub brand: &'a str,
    /// Sections to link, in page order.
    pub sections: &'a [SectionId],
    pub menu_open: bool,
    /// Window at or below the compact breakpoint.
    pub compact: bool,
    /// Entry highlighted by the menu's keyboard focus.
    pub focused: Option<SectionId>,
    /// Page has scrolled; header renders with a shadow.
    pub elevated: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    CloseMenu,
    NavigateTo(SectionId),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    MenuOpened,
    MenuClosed,
    NavigateTo(SectionId),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            if *menu_open {
                Event::MenuOpened
            } else {
                Event::MenuClosed
            }
        }
        Message::CloseMenu => {
            if *menu_open {
                *menu_open = false;
                Event::MenuClosed
            } else {
                Event::None
            }
        }
        Message::NavigateTo(id) => {
            *menu_open = false;
            Event::NavigateTo(id)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill);

    content = content.push(build_top_bar(&ctx));

    if ctx.menu_open && ctx.compact {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.brand.to_owned()).size(typography::TITLE_SM);

    let mut bar = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(Container::new(brand).width(Length::Fill));

    if ctx.compact {
        let hamburger = button(Text::new("☰").size(typography::TITLE_SM))
            .on_press(Message::ToggleMenu)
            .padding(spacing::XS)
            .style(styles::button::nav_link);
        bar = bar.push(hamburger);
    } else {
        for id in ctx.sections {
            bar = bar.push(
                button(Text::new(id.title()).size(typography::BODY))
                    .on_press(Message::NavigateTo(*id))
                    .padding(spacing::XS)
                    .style(styles::button::nav_link),
            );
        }
    }

    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .align_y(Vertical::Center)
        .style(styles::container::header(ctx.elevated))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut entries = Column::new().width(Length::Fill);

    for id in ctx.sections {
        let style = if ctx.focused == Some(*id) {
            styles::button::selected
        } else {
            styles::button::nav_link
        };
        entries = entries.push(
            button(Text::new(id.title()).size(typography::BODY))
                .on_press(Message::NavigateTo(*id))
                .width(Length::Fill)
                .height(Length::Fixed(sizing::MENU_ENTRY_HEIGHT))
                .padding(spacing::XS)
                .style(style),
        );
    }

    Container::new(entries)
        .width(Length::Fill)
        .padding(spacing::XS)
        .align_x(Horizontal::Left)
        .style(styles::container::menu_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_opens_and_closes_the_menu() {
        let mut menu_open = false;

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::MenuOpened
        ));
        assert!(menu_open);

        assert!(matches!(
            update(Message::ToggleMenu, &mut menu_open),
            Event::MenuClosed
        ));
        assert!(!menu_open);
    }

    #[test]
    fn close_on_a_closed_menu_is_silent() {
        let mut menu_open = false;
        assert!(matches!(update(Message::CloseMenu, &mut menu_open), Event::None));
    }

    #[test]
    fn navigation_closes_the_menu_and_propagates() {
        let mut menu_open = true;

        let event = update(Message::NavigateTo(SectionId::Contact), &mut menu_open);

        assert!(!menu_open);
        assert!(matches!(event, Event::NavigateTo(SectionId::Contact)));
    }
}

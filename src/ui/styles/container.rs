// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Top header bar. Gains a drop shadow once the page has scrolled past
/// the elevation offset.
pub fn header(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();

        container::Style {
            background: Some(Background::Color(palette.background.weak.color)),
            shadow: if elevated { shadow::MD } else { shadow::NONE },
            text_color: Some(palette.background.base.text),
            ..Default::default()
        }
    }
}

/// Dropdown panel behind the open hamburger menu.
pub fn menu_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Toast card with a severity-colored accent border.
pub fn toast(accent_color: Color, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let bg = theme.extended_palette().background.base.color;
        let text = theme.palette().text;

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..bg })),
            border: Border {
                color: Color {
                    a: alpha,
                    ..accent_color
                },
                width: border::WIDTH_MD,
                radius: radius::MD.into(),
            },
            shadow: if alpha >= 1.0 { shadow::MD } else { shadow::NONE },
            text_color: Some(Color { a: alpha, ..text }),
            ..Default::default()
        }
    }
}

/// Page section that fades in once scrolled into view. While hidden,
/// its text renders nearly transparent.
pub fn revealable(revealed: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let text = theme.palette().text;

        container::Style {
            text_color: Some(if revealed {
                text
            } else {
                Color {
                    a: opacity::CONCEALED,
                    ..text
                }
            }),
            ..Default::default()
        }
    }
}

/// Placeholder box shown where a gallery image has not loaded.
pub fn image_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

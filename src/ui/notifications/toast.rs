// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with severity-colored accents and a
//! dismiss button. Slide-in and slide-out render as opacity steps,
//! driven by the notification's phase.

use std::time::Instant;

use super::manager::{Manager, Message};
use super::notification::{Notification, Phase};
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{alignment, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification in the given phase.
    pub fn view(notification: &Notification, phase: Phase) -> Element<'_, Message> {
        let accent_color = notification.severity().color();
        let alpha = phase_alpha(phase);

        let message_widget = Text::new(notification.message())
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(text("✕").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent_color, alpha))
            .into()
    }

    /// Renders the toast overlay with all live notifications at `now`,
    /// stacked in the bottom-right corner.
    pub fn view_overlay(manager: &Manager, now: Instant) -> Element<'_, Message> {
        let toasts: Vec<Element<'_, Message>> = manager
            .iter_at(now)
            .map(|(notification, phase)| Self::view(notification, phase))
            .collect();

        if toasts.is_empty() {
            // An empty container that takes no space
            Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into()
        } else {
            let toast_column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Right);

            Container::new(toast_column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Right)
                .align_y(alignment::Vertical::Bottom)
                .padding(spacing::MD)
                .into()
        }
    }
}

fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Entering | Phase::Expired => 0.0,
        Phase::Visible => 1.0,
        Phase::Leaving => opacity::CONCEALED,
    }
}

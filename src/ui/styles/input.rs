// SPDX-License-Identifier: MPL-2.0
//! Text input styles.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::Theme;

/// Default input, or a red-bordered one when the field failed validation.
/// The error border appears on a failed submit and clears as soon as the
/// user types again.
pub fn field(has_error: bool) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |theme: &Theme, status: text_input::Status| {
        let mut style = text_input::default(theme, status);
        if has_error {
            style.border = iced::Border {
                color: palette::ERROR_500,
                width: border::WIDTH_MD,
                ..style.border
            };
        }
        style
    }
}

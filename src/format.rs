// SPDX-License-Identifier: MPL-2.0
//! Number formatting helpers for on-page statistics.

/// Formats an integer with dot-separated thousands groups.
///
/// Grouping starts from the right; values of three digits or fewer are
/// returned unchanged. Counters render their current value through this so
/// large targets stay legible while animating.
///
/// # Example
///
/// ```
/// use iced_folio::format::format_number;
///
/// assert_eq!(format_number(1_234_567), "1.234.567");
/// assert_eq!(format_number(999), "999");
/// ```
#[must_use]
pub fn format_number(value: u64) -> String {
    let digits = value.to_string();
    let len = digits.len();
    if len <= 3 {
        return digits;
    }

    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

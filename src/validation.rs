// SPDX-License-Identifier: MPL-2.0
//! Input validation for the contact form.

use regex::Regex;
use std::sync::LazyLock;

/// Accepts `local@domain.tld` shapes: no whitespace or extra `@`, and the
/// domain must carry at least one dot-separated suffix (`a@b` is rejected).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Returns whether `email` looks like a deliverable address.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns whether a required field is effectively empty after trimming.
#[must_use]
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

// SPDX-License-Identifier: MPL-2.0
//! Contact form state and submit-time validation.

use crate::validation;

/// One of the form's input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed; the form has been cleared.
    Accepted,
    /// At least one field failed; error flags are set.
    Rejected,
}

/// The contact form's values and per-field error flags.
///
/// Fields are only validated on submit. Editing a field clears its
/// error flag immediately, so the highlight disappears as soon as the
/// visitor starts fixing it.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    name_error: bool,
    email_error: bool,
    message_error: bool,
}

impl ContactForm {
    /// Records an edit to `field` and clears its error flag.
    pub fn input(&mut self, field: Field, value: String) {
        match field {
            Field::Name => {
                self.name = value;
                self.name_error = false;
            }
            Field::Email => {
                self.email = value;
                self.email_error = false;
            }
            Field::Message => {
                self.message = value;
                self.message_error = false;
            }
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    pub fn has_error(&self, field: Field) -> bool {
        match field {
            Field::Name => self.name_error,
            Field::Email => self.email_error,
            Field::Message => self.message_error,
        }
    }

    /// Validates every field. On success the form is cleared; on
    /// failure the offending fields are flagged and values are kept.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.name_error = validation::is_blank(&self.name);
        self.email_error = !validation::is_valid_email(&self.email);
        self.message_error = validation::is_blank(&self.message);

        if self.name_error || self.email_error || self.message_error {
            SubmitOutcome::Rejected
        } else {
            *self = Self::default();
            SubmitOutcome::Accepted
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The public contact form.
//!
//! Messages are not delivered by the site itself: the form is validated and
//! folded into a pre-filled chat message (see
//! [`crate::application::contact`]).

use super::notice::Notice;
use super::validation::{is_blank, is_valid_email};
use crate::config::DEFAULT_CONTACT_SUBJECT;
use std::fmt;

/// Why a contact form was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Name, email or message is blank.
    MissingFields,

    /// The email does not look like `local@domain.tld`.
    InvalidEmail,

    /// The chat link could not be built from the configured target.
    InvalidTarget(String),
}

impl ContactError {
    /// The notice shown for this error.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            ContactError::MissingFields => Notice::error("contact.notice.validationTitle")
                .with_description("contact.notice.validationDesc"),
            ContactError::InvalidEmail | ContactError::InvalidTarget(_) => {
                Notice::error("contact.notice.invalidEmailTitle")
                    .with_description("contact.notice.invalidEmailDesc")
            }
        }
    }
}

impl fmt::Display for ContactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactError::MissingFields => write!(f, "Please fill in all required fields"),
            ContactError::InvalidEmail => write!(f, "Please enter a valid email address"),
            ContactError::InvalidTarget(msg) => write!(f, "Invalid chat target: {msg}"),
        }
    }
}

impl std::error::Error for ContactError {}

/// Field values of the contact form. `subject` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks required fields, then the email shape.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] takes precedence over
    /// [`ContactError::InvalidEmail`].
    pub fn validate(&self) -> Result<(), ContactError> {
        if is_blank(&self.name) || is_blank(&self.email) || is_blank(&self.message) {
            return Err(ContactError::MissingFields);
        }
        if !is_valid_email(&self.email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(())
    }

    /// The pre-filled chat message.
    #[must_use]
    pub fn message_body(&self) -> String {
        let subject = if self.subject.is_empty() {
            DEFAULT_CONTACT_SUBJECT
        } else {
            &self.subject
        };
        format!(
            "Hello, I'm {}\n\nEmail: {}\nSubject: {}\n\nMessage:\n{}",
            self.name, self.email, subject, self.message
        )
    }

    /// Empties every field, as after a successful handoff.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sara".to_string(),
            email: "sara@example.com".to_string(),
            subject: String::new(),
            message: "I need a store".to_string(),
        }
    }

    #[test]
    fn complete_form_is_valid() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn blank_required_field_is_missing() {
        for blank in ["", "   "] {
            let mut form = filled();
            form.name = blank.to_string();
            assert_eq!(form.validate(), Err(ContactError::MissingFields));

            let mut form = filled();
            form.message = blank.to_string();
            assert_eq!(form.validate(), Err(ContactError::MissingFields));
        }
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let mut form = filled();
        form.email = "not-an-email".to_string();
        form.name.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingFields));
    }

    #[test]
    fn bad_email_is_rejected() {
        let mut form = filled();
        form.email = "sara@example".to_string();
        assert_eq!(form.validate(), Err(ContactError::InvalidEmail));
    }

    #[test]
    fn body_defaults_subject() {
        let body = filled().message_body();
        assert_eq!(
            body,
            "Hello, I'm Sara\n\nEmail: sara@example.com\nSubject: General Inquiry\n\nMessage:\nI need a store"
        );
    }

    #[test]
    fn body_keeps_given_subject() {
        let mut form = filled();
        form.subject = "Quote".to_string();
        assert!(form.message_body().contains("Subject: Quote\n"));
    }

    #[test]
    fn errors_map_to_notices() {
        let notice = ContactError::MissingFields.notice();
        assert!(notice.is_error());
        assert_eq!(notice.title, "contact.notice.validationTitle");
        assert_eq!(
            ContactError::InvalidEmail.notice().description,
            Some("contact.notice.invalidEmailDesc")
        );
    }

    #[test]
    fn reset_clears_fields() {
        let mut form = filled();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}

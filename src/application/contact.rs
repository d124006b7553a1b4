// SPDX-License-Identifier: MPL-2.0
//! Contact handoff to a WhatsApp click-to-chat link.
//!
//! The site never sends mail: a valid form is turned into a `wa.me` URL with
//! the message pre-filled, and the visitor's own client does the rest.

use crate::config::WHATSAPP_BASE_URL;
use crate::domain::contact::{ContactError, ContactForm};
use crate::domain::notice::Notice;
use reqwest::Url;
use tracing::debug;

/// Notice shown once the handoff link is ready.
pub const REDIRECT_NOTICE: Notice =
    Notice::success("contact.notice.redirectingTitle").with_description("contact.notice.redirectingDesc");

/// Validated contact handoff.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    pub url: Url,
    pub notice: Notice,
}

/// Builds the chat link for `form`, addressed to `number`.
///
/// # Errors
///
/// Returns the form's validation error, or
/// [`ContactError::InvalidTarget`] when `number` does not form a valid URL.
pub fn handoff_url(form: &ContactForm, number: &str) -> Result<Url, ContactError> {
    form.validate()?;
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(ContactError::InvalidTarget(number.to_string()));
    }
    let mut url = Url::parse_with_params(
        &format!("{WHATSAPP_BASE_URL}{digits}"),
        [("text", form.message_body())],
    )
    .map_err(|e| ContactError::InvalidTarget(e.to_string()))?;
    // Form encoding writes spaces as '+'; literal pluses are already %2B.
    let query = url.query().map(|query| query.replace('+', "%20"));
    url.set_query(query.as_deref());
    debug!(target_number = %digits, "Built contact handoff link");
    Ok(url)
}

/// Validates, builds the link and clears the form on success.
///
/// # Errors
///
/// Same as [`handoff_url`]; the form is left untouched on error.
pub fn submit(form: &mut ContactForm, number: &str) -> Result<Handoff, ContactError> {
    let url = handoff_url(form, number)?;
    form.reset();
    Ok(Handoff {
        url,
        notice: REDIRECT_NOTICE,
    })
}

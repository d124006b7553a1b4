// SPDX-License-Identifier: MPL-2.0
//! User-facing notifications.
//!
//! A [`Notice`] carries translation keys, not text, so the same outcome
//! renders in whichever locale is active when it is shown.

/// Visual weight of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Info,
    Error,
}

/// A toast-style notification identified by translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: &'static str,
    pub description: Option<&'static str>,
}

impl Notice {
    #[must_use]
    pub const fn success(title: &'static str) -> Self {
        Self {
            severity: Severity::Success,
            title,
            description: None,
        }
    }

    #[must_use]
    pub const fn info(title: &'static str) -> Self {
        Self {
            severity: Severity::Info,
            title,
            description: None,
        }
    }

    #[must_use]
    pub const fn error(title: &'static str) -> Self {
        Self {
            severity: Severity::Error,
            title,
            description: None,
        }
    }

    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Admin login credentials.

use super::validation::is_valid_email;
use crate::config::MIN_PASSWORD_LENGTH;
use serde::Serialize;
use std::fmt;

/// Why credentials were refused before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    InvalidEmail,
    PasswordTooShort,
}

impl CredentialsError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            CredentialsError::InvalidEmail => "admin.login.invalidEmail",
            CredentialsError::PasswordTooShort => "admin.login.passwordTooShort",
        }
    }
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialsError::InvalidEmail => write!(f, "Invalid email address"),
            CredentialsError::PasswordTooShort => write!(
                f,
                "Password must be at least {MIN_PASSWORD_LENGTH} characters"
            ),
        }
    }
}

impl std::error::Error for CredentialsError {}

/// Email and password, serialized as the session API expects them.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the email shape, then the password length (in characters).
    ///
    /// # Errors
    ///
    /// Returns the first failing rule.
    pub fn validate(&self) -> Result<(), CredentialsError> {
        if !is_valid_email(self.email.trim()) {
            return Err(CredentialsError::InvalidEmail);
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(CredentialsError::PasswordTooShort);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

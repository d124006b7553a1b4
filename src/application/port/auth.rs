// SPDX-License-Identifier: MPL-2.0
//! Authentication port definition.
//!
//! Sign-in is delegated to the hosted backend's session API; the crate only
//! carries the resulting session and decides whether it grants admin access.

use super::backend::BackendError;
use crate::domain::auth::Credentials;
use serde::Deserialize;
use std::fmt;

// =============================================================================
// AuthError
// =============================================================================

/// Errors returned by an authentication adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Wrong email or password.
    InvalidCredentials,

    /// Sign-up with an email that already has an account.
    AlreadyRegistered,

    /// The session is valid but the user holds no admin role.
    NotAdmin,

    /// Transport or backend failure.
    Backend(BackendError),
}

impl AuthError {
    /// Returns the i18n message key for this error.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            AuthError::InvalidCredentials => "admin.login.invalidCredentials",
            AuthError::AlreadyRegistered => "admin.login.alreadyRegistered",
            AuthError::NotAdmin => "admin.login.notAdmin",
            AuthError::Backend(_) => "admin.login.signUpFailed",
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredentials => write!(f, "Invalid email or password"),
            AuthError::AlreadyRegistered => write!(f, "Email already registered"),
            AuthError::NotAdmin => write!(f, "User is not an admin"),
            AuthError::Backend(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<BackendError> for AuthError {
    fn from(err: BackendError) -> Self {
        AuthError::Backend(err)
    }
}

// =============================================================================
// Session
// =============================================================================

/// Authenticated user as reported by the session API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
}

// =============================================================================
// AuthProvider Trait
// =============================================================================

/// Session API of the hosted backend.
#[allow(async_fn_in_trait)]
pub trait AuthProvider {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError>;

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), AuthError>;

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError>;
}

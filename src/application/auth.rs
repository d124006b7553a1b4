// SPDX-License-Identifier: MPL-2.0
//! Admin login flow.
//!
//! A user is an admin when the `user_roles` collection holds a row linking
//! their id to the `admin` role. Sign-in succeeds only for such users; any
//! other session is closed again right away.

use crate::application::content::ContentService;
use crate::application::port::{
    AuthError, AuthProvider, Backend, BackendError, Collection, Query, Session,
};
use crate::config::ADMIN_ROLE;
use crate::domain::auth::{Credentials, CredentialsError};
use crate::domain::notice::Notice;
use std::fmt;
use tracing::{info, warn};

/// Why a login attempt failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginError {
    /// Rejected before contacting the backend.
    Credentials(CredentialsError),
    /// Rejected by the backend or the admin check.
    Auth(AuthError),
}

impl LoginError {
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LoginError::Credentials(e) => e.i18n_key(),
            LoginError::Auth(e) => e.i18n_key(),
        }
    }

    #[must_use]
    pub fn notice(&self) -> Notice {
        Notice::error(self.i18n_key())
    }
}

impl fmt::Display for LoginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginError::Credentials(e) => write!(f, "{e}"),
            LoginError::Auth(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for LoginError {}

impl From<CredentialsError> for LoginError {
    fn from(err: CredentialsError) -> Self {
        LoginError::Credentials(err)
    }
}

impl From<AuthError> for LoginError {
    fn from(err: AuthError) -> Self {
        LoginError::Auth(err)
    }
}

/// Sign-in, sign-up and sign-out restricted to admin users.
#[derive(Debug, Clone)]
pub struct AdminGate<A, B> {
    auth: A,
    backend: B,
}

impl<A: AuthProvider, B: Backend> AdminGate<A, B> {
    #[must_use]
    pub fn new(auth: A, backend: B) -> Self {
        Self { auth, backend }
    }

    /// Whether the session's user holds the admin role. The lookup runs as
    /// that user, since role rows are only visible to their owner.
    ///
    /// # Errors
    ///
    /// Propagates backend errors.
    pub async fn is_admin(&self, session: &Session) -> Result<bool, BackendError> {
        let query = Query::all()
            .columns(&["role"])
            .eq("user_id", session.user.id.as_str())
            .eq("role", ADMIN_ROLE)
            .limit(1);
        let rows = self
            .backend
            .with_session(session)
            .select(Collection::UserRoles, &query)
            .await?;
        Ok(!rows.is_empty())
    }

    /// Content access acting as the signed-in admin.
    #[must_use]
    pub fn content(&self, session: &Session) -> ContentService<B> {
        ContentService::new(self.backend.with_session(session))
    }

    /// Signs in and verifies the admin role.
    ///
    /// # Errors
    ///
    /// Invalid credentials are refused locally. A valid session without the
    /// admin role is signed out and reported as [`AuthError::NotAdmin`].
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session, LoginError> {
        credentials.validate()?;
        let session = self.auth.sign_in(credentials).await?;
        let is_admin = self.is_admin(&session).await.map_err(AuthError::from)?;
        if !is_admin {
            warn!(user = %session.user.id, "Sign-in refused: no admin role");
            if let Err(e) = self.auth.sign_out(&session).await {
                warn!("Failed to close non-admin session: {e}");
            }
            return Err(AuthError::NotAdmin.into());
        }
        info!(user = %session.user.id, "Admin signed in");
        Ok(session)
    }

    /// Creates an account. Admin rights are granted out of band.
    ///
    /// # Errors
    ///
    /// Invalid credentials are refused locally; backend refusals are
    /// forwarded, with duplicates as [`AuthError::AlreadyRegistered`].
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<Notice, LoginError> {
        credentials.validate()?;
        self.auth.sign_up(credentials).await?;
        info!(email = %credentials.email, "Account created");
        Ok(Notice::success("admin.login.signUpSuccess"))
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn sign_out(&self, session: &Session) -> Result<Notice, AuthError> {
        self.auth.sign_out(session).await?;
        info!(user = %session.user.id, "Admin signed out");
        Ok(Notice::success("admin.notice.signedOut"))
    }
}

/// Maps a sign-up refusal message to an [`AuthError`].
#[must_use]
pub fn classify_sign_up_error(message: &str) -> AuthError {
    if message.to_lowercase().contains("already registered") {
        AuthError::AlreadyRegistered
    } else {
        AuthError::Backend(BackendError::Request(message.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_sign_up_is_recognized() {
        assert_eq!(
            classify_sign_up_error("User already registered"),
            AuthError::AlreadyRegistered
        );
        assert!(matches!(
            classify_sign_up_error("rate limited"),
            AuthError::Backend(_)
        ));
    }

    #[test]
    fn login_errors_carry_translation_keys() {
        let err: LoginError = CredentialsError::InvalidEmail.into();
        assert_eq!(err.i18n_key(), "admin.login.invalidEmail");
        let err: LoginError = AuthError::NotAdmin.into();
        assert_eq!(err.notice().title, "admin.login.notAdmin");
    }
}

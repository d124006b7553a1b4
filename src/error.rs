// SPDX-License-Identifier: MPL-2.0
use crate::application::port::{AuthError, BackendError, StorageError};
use crate::domain::contact::ContactError;
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translation(String),
    UnsupportedLocale(String),
    Storage(StorageError),
    Backend(BackendError),
    Auth(AuthError),
    Contact(ContactError),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation(e) => write!(f, "Translation Error: {}", e),
            Error::UnsupportedLocale(code) => write!(f, "Unsupported locale: {}", code),
            Error::Storage(e) => write!(f, "Storage Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
            Error::Auth(e) => write!(f, "Auth Error: {}", e),
            Error::Contact(e) => write!(f, "Contact Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        Error::Storage(err)
    }
}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<AuthError> for Error {
    fn from(err: AuthError) -> Self {
        Error::Auth(err)
    }
}

impl From<ContactError> for Error {
    fn from(err: ContactError) -> Self {
        Error::Contact(err)
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

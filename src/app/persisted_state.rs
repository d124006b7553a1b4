// SPDX-License-Identifier: MPL-2.0
//! Durable key-value state stored as CBOR.
//!
//! This is the file-backed [`KeyValueStore`]: the locale switch writes its
//! choice here so it survives restarts. State that users edit by hand lives
//! in `settings.toml` instead (see [`crate::config`]).
//!
//! # Path Resolution
//!
//! 1. Use `open_in()` with an explicit base directory
//! 2. Set `DEVFOLIO_DATA_DIR` environment variable
//! 3. Falls back to platform-specific data directory

use super::paths;
use crate::application::port::{KeyValueStore, StorageError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// State file name within the app data directory.
pub const STATE_FILE: &str = "state.cbor";

/// Everything persisted across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppState {
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

impl AppState {
    /// Reads the state file at `path`.
    ///
    /// Returns a tuple of (state, optional_warning). A missing file is not an
    /// error; an unreadable or corrupt one yields the default state and the
    /// translation key of a warning to show the user.
    pub fn load_from_path(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::default(), None);
        }

        match fs::File::open(path) {
            Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
                Ok(state) => (state, None),
                Err(_) => (
                    Self::default(),
                    Some("notification.state.parseError".to_string()),
                ),
            },
            Err(_) => (
                Self::default(),
                Some("notification.state.readError".to_string()),
            ),
        }
    }

    /// Writes the state file at `path`, creating parent directories.
    ///
    /// Returns the translation key of a warning if the save failed.
    pub fn save_to_path(&self, path: &Path) -> Option<String> {
        if let Some(parent) = path.parent() {
            if fs::create_dir_all(parent).is_err() {
                return Some("notification.state.dirError".to_string());
            }
        }

        match fs::File::create(path) {
            Ok(file) => {
                if ciborium::into_writer(self, BufWriter::new(file)).is_err() {
                    return Some("notification.state.writeError".to_string());
                }
                None
            }
            Err(_) => Some("notification.state.createError".to_string()),
        }
    }
}

/// [`KeyValueStore`] backed by `state.cbor`.
///
/// Entries are cached in memory; every `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct StateFile {
    path: Option<PathBuf>,
    state: AppState,
}

impl StateFile {
    /// Opens the state file in the default data directory.
    pub fn open() -> (Self, Option<String>) {
        Self::open_in(None)
    }

    /// Opens the state file in `base_dir`, or the default data directory.
    ///
    /// Returns the store and an optional warning key. The store is usable
    /// even when the directory cannot be resolved; writes then fail softly.
    pub fn open_in(base_dir: Option<PathBuf>) -> (Self, Option<String>) {
        let Some(path) = paths::get_app_data_dir_with_override(base_dir).map(|mut dir| {
            dir.push(STATE_FILE);
            dir
        }) else {
            return (
                Self {
                    path: None,
                    state: AppState::default(),
                },
                Some("notification.state.pathError".to_string()),
            );
        };

        let (state, warning) = AppState::load_from_path(&path);
        (
            Self {
                path: Some(path),
                state,
            },
            warning,
        )
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn state(&self) -> &AppState {
        &self.state
    }
}

impl KeyValueStore for StateFile {
    fn get(&self, key: &str) -> Option<String> {
        self.state.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.state.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.state
            .entries
            .insert(key.to_string(), value.to_string());

        let path = self.path.as_deref().ok_or(StorageError::Unavailable)?;
        match self.state.save_to_path(path) {
            None => Ok(()),
            Some(warning) => Err(StorageError::WriteFailed(warning)),
        }
    }
}

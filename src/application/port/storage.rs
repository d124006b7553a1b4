// SPDX-License-Identifier: MPL-2.0
//! Durable key-value storage port.
//!
//! The locale switch persists its choice through this trait so it can be
//! exercised without a real persistence backend. The file-backed adapter
//! lives in [`crate::app::persisted_state`].

use std::collections::HashMap;
use std::fmt;

// =============================================================================
// StorageError
// =============================================================================

/// Errors raised by a storage adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The storage location could not be determined.
    Unavailable,

    /// Writing the entry failed.
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "Storage location unavailable"),
            StorageError::WriteFailed(msg) => write!(f, "Failed to write storage: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

// =============================================================================
// KeyValueStore Trait
// =============================================================================

/// String-keyed durable storage, like a browser's local storage.
pub trait KeyValueStore {
    /// Returns the stored value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value could not be made durable.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// Process-local store. Survives only as long as the value itself, which is
/// enough to simulate a restart by handing it to a fresh context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = Self::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

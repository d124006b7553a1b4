// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines abstract interfaces that infrastructure adapters implement.
//! These traits use only domain types, ensuring the application layer remains
//! independent of concrete implementations.
//!
//! # Available Ports
//!
//! - [`storage`]: Durable key-value storage (persisted locale)
//! - [`document`]: Root document attributes (reading direction, language)
//! - [`backend`]: Hosted database CRUD
//! - [`auth`]: Hosted session API
//!
//! # Design Notes
//!
//! - `storage` and `document` are synchronous: they sit on the locale
//!   switch, which must finish its side effects before returning
//! - `backend` and `auth` are async; callers own the runtime
//! - Methods return `Result` with port-level error types

pub mod auth;
pub mod backend;
pub mod document;
pub mod storage;

// Re-export main types for convenience
pub use auth::{AuthError, AuthProvider, Session, User};
pub use backend::{Backend, BackendError, Collection, Order, Query};
pub use document::{DocumentAttributes, DocumentPort};
pub use storage::{KeyValueStore, MemoryStore, StorageError};

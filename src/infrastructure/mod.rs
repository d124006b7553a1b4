// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`rest`]: Hosted database and session API over HTTP (implements
//!   [`Backend`] and [`AuthProvider`])
//! - [`memory`]: In-process tables and accounts for demo mode and tests
//!
//! The storage and document ports are implemented next to the code that
//! owns them: [`StateFile`](crate::app::persisted_state::StateFile) and
//! [`DocumentAttributes`](crate::application::port::DocumentAttributes).
//!
//! [`Backend`]: crate::application::port::Backend
//! [`AuthProvider`]: crate::application::port::AuthProvider

pub mod memory;
pub mod rest;

// Re-export main types for convenience
pub use memory::{MemoryAuth, MemoryBackend};
pub use rest::RestBackend;

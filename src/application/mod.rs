// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`content`]: Typed content CRUD and the public blog listing
//! - [`auth`]: Admin sign-in gated on the admin role
//! - [`contact`]: Contact form handoff to a chat link
//! - [`blog`]: Locale-aware post presentation
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - The CLI drives application services with concrete adapters
//!
//! # Example
//!
//! ```ignore
//! use devfolio::application::content::ContentService;
//! use devfolio::domain::content::Project;
//! use devfolio::infrastructure::MemoryBackend;
//!
//! let service = ContentService::new(MemoryBackend::new());
//! let projects = service.list_ordered::<Project>().await?;
//! ```

pub mod auth;
pub mod blog;
pub mod contact;
pub mod content;
pub mod port;

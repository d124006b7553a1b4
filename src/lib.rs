// SPDX-License-Identifier: MPL-2.0
//! `devfolio` is the engine of a bilingual (English/Arabic) developer
//! portfolio site.
//!
//! It provides the translation store and locale switch, typed access to the
//! hosted content backend with its admin gate, and the contact handoff to a
//! chat link. The `devfolio` binary exposes these as CLI commands.

#![doc(html_root_url = "https://docs.rs/devfolio/0.3.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod logging;

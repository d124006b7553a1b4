// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the site.
//!
//! This module provides bilingual text resolution: a static string table,
//! a locale-aware accessor and the locale switch.
//!
//! # Features
//!
//! - English and Arabic catalogs embedded from `assets/i18n/*.toml`
//! - Total lookups: an unknown key resolves to the key itself
//! - Runtime language switching with persistence and reading-direction update
//! - Startup restore of the persisted locale, with a default fallback

pub mod context;
pub mod locale;
pub mod table;

pub use context::{LanguageContext, Translator, LANGUAGE_STORAGE_KEY};
pub use locale::{Direction, Locale};
pub use table::TranslationTable;

// SPDX-License-Identifier: MPL-2.0
//! The active-locale context.
//!
//! [`LanguageContext`] owns the active locale and is the single place it can
//! change. Consumers borrow it to translate; the switch persists the choice
//! through a [`KeyValueStore`] and mirrors it onto a [`DocumentPort`].

use super::locale::{Direction, Locale};
use super::table::TranslationTable;
use crate::application::port::{DocumentPort, KeyValueStore};
use crate::domain::notice::Notice;
use crate::error::Result;
use std::sync::Arc;

/// Storage key under which the active locale is persisted.
pub const LANGUAGE_STORAGE_KEY: &str = "language";

/// Locale-bound view of the translation table.
///
/// Cheap to copy; hand one to anything that renders text.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    table: &'a TranslationTable,
    locale: Locale,
}

impl<'a> Translator<'a> {
    #[must_use]
    pub fn new(table: &'a TranslationTable, locale: Locale) -> Self {
        Self { table, locale }
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Resolves `key` under the bound locale, or returns `key` itself.
    #[must_use]
    pub fn tr<'k>(&self, key: &'k str) -> &'k str
    where
        'a: 'k,
    {
        match self.table.get(self.locale, key) {
            Some(text) => text,
            None => {
                tracing::debug!(locale = %self.locale, key, "missing translation");
                key
            }
        }
    }
}

impl Translator<'_> {
    /// Renders a notice as `title` or `title: description`.
    #[must_use]
    pub fn notice(&self, notice: &Notice) -> String {
        let title = self.tr(notice.title);
        match notice.description {
            Some(key) => format!("{title}: {}", self.tr(key)),
            None => title.to_string(),
        }
    }
}

/// Owner of the active locale.
pub struct LanguageContext<S, D> {
    table: Arc<TranslationTable>,
    locale: Locale,
    storage: S,
    document: D,
}

impl<S: KeyValueStore, D: DocumentPort> LanguageContext<S, D> {
    /// Starts a context, restoring the persisted locale when it is valid.
    ///
    /// Falls back to `default` when nothing is stored or the stored code is
    /// not a supported locale. The resolved locale is written back and the
    /// document attributes are applied before returning.
    pub fn new(table: Arc<TranslationTable>, storage: S, document: D, default: Locale) -> Self {
        let locale = match storage.get(LANGUAGE_STORAGE_KEY) {
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::warn!(%code, %default, "ignoring unsupported persisted locale");
                default
            }),
            None => default,
        };

        let mut context = Self {
            table,
            locale,
            storage,
            document,
        };
        context.apply();
        context
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.locale.direction()
    }

    #[must_use]
    pub fn is_rtl(&self) -> bool {
        self.locale.is_rtl()
    }

    /// Resolves `key` under the active locale, or returns `key` itself.
    #[must_use]
    pub fn tr<'k>(&'k self, key: &'k str) -> &'k str {
        self.translator().tr(key)
    }

    #[must_use]
    pub fn translator(&self) -> Translator<'_> {
        Translator::new(&self.table, self.locale)
    }

    #[must_use]
    pub fn table(&self) -> &TranslationTable {
        &self.table
    }

    /// Makes `locale` active, persists it and updates the document.
    pub fn set_locale(&mut self, locale: Locale) {
        if locale != self.locale {
            tracing::info!(from = %self.locale, to = %locale, "switching locale");
        }
        self.locale = locale;
        self.apply();
    }

    /// Parses `code` and makes it active.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::Error::UnsupportedLocale`] and leaves the
    /// context untouched if `code` names no supported locale.
    pub fn set_locale_code(&mut self, code: &str) -> Result<Locale> {
        let locale = code.parse::<Locale>().inspect_err(|_| {
            tracing::warn!(%code, "rejecting unsupported locale");
        })?;
        self.set_locale(locale);
        Ok(locale)
    }

    /// Flips to the other locale and returns it.
    pub fn toggle_locale(&mut self) -> Locale {
        let next = self.locale.toggled();
        self.set_locale(next);
        next
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    #[must_use]
    pub fn document(&self) -> &D {
        &self.document
    }

    /// Releases the storage, e.g. to hand it to the next context.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Persists the active locale, then mirrors it onto the document.
    /// A failed write is logged and otherwise ignored.
    fn apply(&mut self) {
        if let Err(error) = self.storage.set(LANGUAGE_STORAGE_KEY, self.locale.code()) {
            tracing::warn!(%error, locale = %self.locale, "failed to persist locale");
        }
        self.document.set_direction(self.locale.direction());
        self.document.set_language(self.locale.code());
    }
}

// SPDX-License-Identifier: MPL-2.0
//! The static bilingual string table.
//!
//! # Invariants
//!
//! 1. **Immutable after load**: no entry is added or removed once the table
//!    is built, so a shared `Arc<TranslationTable>` never needs a lock.
//! 2. **Flat keys**: nested TOML tables flatten into dotted keys, so
//!    `[projects.cta] title = ".."` is looked up as `projects.cta.title`.
//! 3. **Lookup may miss**: `get` returns `None` for unknown keys; the
//!    fallback policy lives in the accessor, not here.

use super::locale::Locale;
use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use std::collections::{BTreeSet, HashMap};

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Strings for every supported locale.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    strings: HashMap<Locale, HashMap<String, String>>,
}

impl TranslationTable {
    /// Builds the table from the `.toml` files compiled into the binary.
    ///
    /// Every locale in [`Locale::ALL`] must have a matching `<code>.toml`;
    /// a missing or malformed file is a load error.
    pub fn builtin() -> Result<Self> {
        let mut table = Self::default();
        for locale in Locale::ALL {
            let filename = format!("{}.toml", locale.code());
            let file = Asset::get(&filename).ok_or_else(|| {
                Error::Translation(format!("missing embedded catalog {filename}"))
            })?;
            let source = String::from_utf8_lossy(file.data.as_ref());
            table.load_toml(locale, &source)?;
        }
        Ok(table)
    }

    /// Parses one locale's TOML source and merges it into the table.
    pub fn load_toml(&mut self, locale: Locale, source: &str) -> Result<()> {
        let document: toml::Table = toml::from_str(source)
            .map_err(|e| Error::Translation(format!("{locale}: {e}")))?;
        let entries = self.strings.entry(locale).or_default();
        flatten_into(entries, None, &document)
            .map_err(|key| Error::Translation(format!("{locale}: '{key}' is not a string")))?;
        Ok(())
    }

    /// Builds a table directly from `(key, value)` pairs.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (Locale, &'a str, &'a str)>) -> Self {
        let mut table = Self::default();
        for (locale, key, value) in pairs {
            table
                .strings
                .entry(locale)
                .or_default()
                .insert(key.to_string(), value.to_string());
        }
        table
    }

    #[must_use]
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        self.strings
            .get(&locale)
            .and_then(|entries| entries.get(key))
            .map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    /// Number of entries for `locale`.
    #[must_use]
    pub fn len(&self, locale: Locale) -> usize {
        self.strings.get(&locale).map_or(0, HashMap::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.values().all(HashMap::is_empty)
    }

    /// Sorted keys of one locale.
    #[must_use]
    pub fn keys(&self, locale: Locale) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .strings
            .get(&locale)
            .map(|entries| entries.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Keys present under `reference` but absent under `locale`, sorted.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale, reference: Locale) -> Vec<&str> {
        let present: BTreeSet<&str> = self.keys(locale).into_iter().collect();
        self.keys(reference)
            .into_iter()
            .filter(|key| !present.contains(key))
            .collect()
    }
}

/// Walks a TOML table, inserting string leaves under dotted keys.
/// Returns the offending key if a leaf is not a string.
fn flatten_into(
    entries: &mut HashMap<String, String>,
    prefix: Option<&str>,
    table: &toml::Table,
) -> std::result::Result<(), String> {
    for (name, value) in table {
        let key = match prefix {
            Some(prefix) => format!("{prefix}.{name}"),
            None => name.clone(),
        };
        match value {
            toml::Value::String(text) => {
                entries.insert(key, text.clone());
            }
            toml::Value::Table(nested) => flatten_into(entries, Some(&key), nested)?,
            _ => return Err(key),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_loads_every_locale() {
        let table = TranslationTable::builtin().expect("embedded catalogs should parse");
        for locale in Locale::ALL {
            assert!(table.len(locale) > 100, "{locale} looks truncated");
        }
    }

    #[test]
    fn builtin_locales_share_one_key_set() {
        let table = TranslationTable::builtin().expect("embedded catalogs should parse");
        assert!(table.missing_keys(Locale::Ar, Locale::En).is_empty());
        assert!(table.missing_keys(Locale::En, Locale::Ar).is_empty());
    }

    #[test]
    fn nested_tables_flatten_to_dotted_keys() {
        let mut table = TranslationTable::default();
        table
            .load_toml(
                Locale::En,
                "[projects]\ntitle = \"My Projects\"\n[projects.cta]\ntitle = \"Have a Project in Mind?\"\n",
            )
            .unwrap();
        assert_eq!(table.get(Locale::En, "projects.title"), Some("My Projects"));
        assert_eq!(
            table.get(Locale::En, "projects.cta.title"),
            Some("Have a Project in Mind?")
        );
    }

    #[test]
    fn non_string_leaf_is_rejected() {
        let mut table = TranslationTable::default();
        let err = table.load_toml(Locale::En, "[blog]\nlimit = 6\n").unwrap_err();
        match err {
            Error::Translation(message) => assert!(message.contains("blog.limit")),
            other => panic!("expected Translation error, got {other:?}"),
        }
    }

    #[test]
    fn get_misses_unknown_key_and_locale() {
        let table = TranslationTable::from_pairs([(Locale::En, "nav.home", "Home")]);
        assert_eq!(table.get(Locale::En, "nav.home"), Some("Home"));
        assert_eq!(table.get(Locale::En, "nav.away"), None);
        assert_eq!(table.get(Locale::Ar, "nav.home"), None);
    }

    #[test]
    fn missing_keys_reports_gaps() {
        let table = TranslationTable::from_pairs([
            (Locale::En, "a", "A"),
            (Locale::En, "b", "B"),
            (Locale::Ar, "a", "أ"),
        ]);
        assert_eq!(table.missing_keys(Locale::Ar, Locale::En), vec!["b"]);
        assert!(table.missing_keys(Locale::En, Locale::Ar).is_empty());
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = TranslationTable::default();
        assert!(table.is_empty());
        assert_eq!(table.len(Locale::En), 0);
        assert!(table.keys(Locale::Ar).is_empty());
    }
}

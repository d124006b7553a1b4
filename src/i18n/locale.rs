// SPDX-License-Identifier: MPL-2.0
//! Supported locales and their reading direction.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

/// A selectable site language.
///
/// The set is closed: locales are chosen, never created at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Every supported locale, in display order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// Short language code, as persisted and as written to the `lang` attribute.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }

    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Locale::Ar => Direction::Rtl,
            Locale::En => Direction::Ltr,
        }
    }

    #[must_use]
    pub fn is_rtl(self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// The other locale of the pair.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ar,
            Locale::Ar => Locale::En,
        }
    }

    /// Maps a parsed BCP-47 identifier onto a supported locale by language subtag.
    #[must_use]
    pub fn from_language_identifier(id: &LanguageIdentifier) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|locale| id.language.as_str() == locale.code())
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = Error;

    /// Accepts any well-formed tag whose language subtag is supported,
    /// so `ar-YE` and `EN` resolve while `fr` or `??` are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id: LanguageIdentifier = s
            .trim()
            .parse()
            .map_err(|_| Error::UnsupportedLocale(s.to_string()))?;
        Self::from_language_identifier(&id).ok_or_else(|| Error::UnsupportedLocale(s.to_string()))
    }
}

/// Document reading direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Attribute value (`ltr` / `rtl`).
    #[must_use]
    pub fn as_attr(self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

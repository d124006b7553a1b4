// SPDX-License-Identifier: MPL-2.0
//! Document-level attributes consumed by the rendering environment.
//!
//! A locale change flips the reading direction and the language attribute
//! of the root document; this port is where that side effect lands.

use crate::i18n::locale::Direction;

/// Sink for the root document's `dir` and `lang` attributes.
pub trait DocumentPort {
    fn set_direction(&mut self, direction: Direction);
    fn set_language(&mut self, lang: &str);
}

impl<T: DocumentPort + ?Sized> DocumentPort for &mut T {
    fn set_direction(&mut self, direction: Direction) {
        (**self).set_direction(direction);
    }

    fn set_language(&mut self, lang: &str) {
        (**self).set_language(lang);
    }
}

/// In-memory record of the document attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentAttributes {
    dir: Direction,
    lang: String,
}

impl DocumentAttributes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn dir(&self) -> Direction {
        self.dir
    }

    #[must_use]
    pub fn lang(&self) -> &str {
        &self.lang
    }
}

impl DocumentPort for DocumentAttributes {
    fn set_direction(&mut self, direction: Direction) {
        self.dir = direction;
    }

    fn set_language(&mut self, lang: &str) {
        self.lang = lang.to_string();
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Application root: wires configuration, the persisted locale and the
//! content backend together and runs CLI commands against them.
//!
//! Startup warnings (unreadable config or state) are collected as
//! translation keys and rendered once the locale is known.

pub mod cli;
pub mod paths;
pub mod persisted_state;

use crate::application::blog::PostCard;
use crate::application::content::{ContentService, Record};
use crate::application::contact;
use crate::application::port::{
    Backend, BackendError, Collection, DocumentAttributes, Query, Session,
};
use crate::config::{self, Config};
use crate::domain::content::{
    AboutContent, BlogPost, ContactInfo, Entry, HeroContent, Project, Service, SiteSettings,
};
use crate::error::{Error, Result};
use crate::i18n::{LanguageContext, Locale, TranslationTable, Translator};
use crate::infrastructure::{MemoryBackend, RestBackend};
use cli::{Command, Flags, LocaleAction};
use persisted_state::StateFile;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

// =============================================================================
// Backend Selection
// =============================================================================

/// The backend the CLI talks to.
#[derive(Debug, Clone)]
pub enum SiteBackend {
    Rest(RestBackend),
    Memory(MemoryBackend),
}

impl SiteBackend {
    /// The hosted backend when configured, else in-memory demo content.
    #[must_use]
    pub fn from_config(config: &Config, demo: bool) -> Self {
        if demo {
            return SiteBackend::Memory(MemoryBackend::new());
        }
        match RestBackend::from_config(&config.backend) {
            Ok(rest) => SiteBackend::Rest(rest),
            Err(e) => {
                info!("Using demo content: {e}");
                SiteBackend::Memory(MemoryBackend::new())
            }
        }
    }
}

impl Backend for SiteBackend {
    fn with_session(&self, session: &Session) -> Self {
        match self {
            SiteBackend::Rest(b) => SiteBackend::Rest(b.with_session(session)),
            SiteBackend::Memory(b) => SiteBackend::Memory(b.with_session(session)),
        }
    }

    async fn select(
        &self,
        collection: Collection,
        query: &Query,
    ) -> std::result::Result<Vec<Value>, BackendError> {
        match self {
            SiteBackend::Rest(b) => b.select(collection, query).await,
            SiteBackend::Memory(b) => b.select(collection, query).await,
        }
    }

    async fn insert(
        &self,
        collection: Collection,
        row: Value,
    ) -> std::result::Result<Value, BackendError> {
        match self {
            SiteBackend::Rest(b) => b.insert(collection, row).await,
            SiteBackend::Memory(b) => b.insert(collection, row).await,
        }
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        row: Value,
    ) -> std::result::Result<Value, BackendError> {
        match self {
            SiteBackend::Rest(b) => b.update(collection, id, row).await,
            SiteBackend::Memory(b) => b.update(collection, id, row).await,
        }
    }

    async fn delete(
        &self,
        collection: Collection,
        id: &str,
    ) -> std::result::Result<(), BackendError> {
        match self {
            SiteBackend::Rest(b) => b.delete(collection, id).await,
            SiteBackend::Memory(b) => b.delete(collection, id).await,
        }
    }
}

// =============================================================================
// App
// =============================================================================

/// Loaded application state for one CLI invocation.
pub struct App {
    config: Config,
    language: LanguageContext<StateFile, DocumentAttributes>,
    display_locale: Option<Locale>,
    content: ContentService<SiteBackend>,
    warnings: Vec<String>,
}

impl App {
    /// Builds the app from loaded config and state. `warnings` are the
    /// translation keys reported while loading them.
    ///
    /// # Errors
    ///
    /// Fails when the embedded catalogs cannot be parsed or `--lang` names
    /// an unsupported locale.
    pub fn with_parts(
        flags: &Flags,
        config: Config,
        state: StateFile,
        warnings: impl IntoIterator<Item = Option<String>>,
    ) -> Result<Self> {
        let table = Arc::new(TranslationTable::builtin()?);
        let display_locale = flags
            .lang
            .as_deref()
            .map(str::parse::<Locale>)
            .transpose()?;
        let language = LanguageContext::new(
            table,
            state,
            DocumentAttributes::new(),
            config.default_locale(),
        );
        let content = ContentService::new(SiteBackend::from_config(&config, flags.demo));
        Ok(Self {
            config,
            language,
            display_locale,
            content,
            warnings: warnings.into_iter().flatten().collect(),
        })
    }

    /// Translator for output: the `--lang` override, else the active locale.
    #[must_use]
    pub fn translator(&self) -> Translator<'_> {
        let locale = self.display_locale.unwrap_or(self.language.locale());
        Translator::new(self.language.table(), locale)
    }

    #[must_use]
    pub fn language(&self) -> &LanguageContext<StateFile, DocumentAttributes> {
        &self.language
    }

    /// Startup warnings, translated.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let tr = self.translator();
        self.warnings.iter().map(|key| tr.tr(key).to_string()).collect()
    }

    /// Localized message for an error returned by [`App::execute`].
    #[must_use]
    pub fn describe_error(&self, error: &Error) -> String {
        match error {
            Error::Contact(e) => self.translator().notice(&e.notice()),
            other => other.to_string(),
        }
    }

    /// Runs one command and returns its output.
    ///
    /// # Errors
    ///
    /// Propagates validation, locale and backend errors.
    pub async fn execute(&mut self, command: Command) -> Result<String> {
        match command {
            Command::Help => Ok(cli::HELP.to_string()),
            Command::Translate(keys) => {
                let tr = self.translator();
                Ok(keys.iter().map(|key| tr.tr(key)).collect::<Vec<_>>().join("\n"))
            }
            Command::Locale(action) => self.locale(action),
            Command::Contact(mut form) => {
                let handoff = contact::submit(&mut form, &self.config.contact.whatsapp_number)?;
                let notice = self.translator().notice(&handoff.notice);
                Ok(format!("{notice}\n{}", handoff.url))
            }
            Command::Blog => Ok(self.blog().await),
            Command::List(collection) => self.list(collection).await,
        }
    }

    fn locale(&mut self, action: LocaleAction) -> Result<String> {
        match action {
            LocaleAction::Show => {}
            LocaleAction::Set(code) => {
                self.language.set_locale_code(&code)?;
            }
            LocaleAction::Toggle => {
                self.language.toggle_locale();
            }
        }
        let document = self.language.document();
        Ok(format!(
            "{} ({})\nlang={} dir={}",
            self.language.locale(),
            self.language.tr("language.name"),
            document.lang(),
            document.dir()
        ))
    }

    async fn blog(&self) -> String {
        let posts = self.content.display_posts().await;
        let tr = self.translator();
        posts
            .iter()
            .map(|entry| {
                let card = PostCard::new(entry, tr);
                let mut lines = vec![format!("{} | {} | {}", card.date, card.title, card.read_time)];
                lines.extend(card.excerpt.map(|excerpt| format!("    {excerpt}")));
                lines.join("\n")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn list(&self, collection: Collection) -> Result<String> {
        let service = &self.content;
        let rows = match collection {
            Collection::HeroContent => single(service.load_single::<HeroContent>().await?)?,
            Collection::AboutContent => single(service.load_single::<AboutContent>().await?)?,
            Collection::ContactInfo => single(service.load_single::<ContactInfo>().await?)?,
            Collection::SiteSettings => single(service.load_single::<SiteSettings>().await?)?,
            Collection::Projects => many(service.list_ordered::<Project>().await?)?,
            Collection::Services => many(service.list_ordered::<Service>().await?)?,
            Collection::BlogPosts => many(service.list_ordered::<BlogPost>().await?)?,
            Collection::UserRoles => {
                warn!("Refusing to list {collection}");
                return Err(Error::Usage(format!("{collection} cannot be listed")));
            }
        };
        serde_json::to_string_pretty(&rows).map_err(|e| Error::Usage(e.to_string()))
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| BackendError::Decode(e.to_string()).into())
}

fn single<T: Record>(entry: Option<Entry<T>>) -> Result<Value> {
    to_json(&entry.into_iter().collect::<Vec<_>>())
}

fn many<T: Record>(entries: Vec<Entry<T>>) -> Result<Value> {
    to_json(&entries)
}

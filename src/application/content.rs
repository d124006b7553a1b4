// SPDX-License-Identifier: MPL-2.0
//! Typed content access on top of the [`Backend`] port.
//!
//! [`ContentService`] turns JSON rows into [`Entry`] records, keeps the
//! read rules of each admin tab in one place (single-row sections, ordered
//! lists, the public blog listing) and maps outcomes to [`Notice`]s.

use crate::application::port::{Backend, BackendError, Collection, Order, Query};
use crate::config::PUBLIC_BLOG_LIMIT;
use crate::domain::content::{
    demo_posts, AboutContent, BlogPost, ContactInfo, Entry, HeroContent, Project, Service,
    SiteSettings,
};
use crate::domain::notice::Notice;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::{info, warn};

/// Columns fetched by the public blog listing.
const BLOG_LISTING_COLUMNS: [&str; 12] = [
    "id",
    "title",
    "title_ar",
    "slug",
    "excerpt",
    "excerpt_ar",
    "cover_image",
    "category",
    "tags",
    "published",
    "published_at",
    "read_time",
];

// =============================================================================
// Record Binding
// =============================================================================

/// A record type stored in one backend collection.
pub trait Record: Serialize + DeserializeOwned {
    const COLLECTION: Collection;
}

impl Record for HeroContent {
    const COLLECTION: Collection = Collection::HeroContent;
}

impl Record for AboutContent {
    const COLLECTION: Collection = Collection::AboutContent;
}

impl Record for Project {
    const COLLECTION: Collection = Collection::Projects;
}

impl Record for Service {
    const COLLECTION: Collection = Collection::Services;
}

impl Record for ContactInfo {
    const COLLECTION: Collection = Collection::ContactInfo;
}

impl Record for SiteSettings {
    const COLLECTION: Collection = Collection::SiteSettings;
}

impl Record for BlogPost {
    const COLLECTION: Collection = Collection::BlogPosts;
}

fn decode<T: Record>(row: Value) -> Result<Entry<T>, BackendError> {
    serde_json::from_value(row).map_err(|e| BackendError::Decode(e.to_string()))
}

fn encode<T: Record>(record: &T) -> Result<Value, BackendError> {
    serde_json::to_value(record).map_err(|e| BackendError::Decode(e.to_string()))
}

// =============================================================================
// Outcome Notices
// =============================================================================

/// An admin operation whose outcome is reported to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentAction {
    Fetch,
    Save,
    Create,
    Update,
    Delete,
    TogglePublish,
}

impl ContentAction {
    /// The notice for a finished operation. A successful fetch is silent.
    #[must_use]
    pub fn notice<T>(self, outcome: &Result<T, BackendError>) -> Option<Notice> {
        let notice = match (self, outcome.is_ok()) {
            (ContentAction::Fetch, true) => return None,
            (ContentAction::Fetch, false) => Notice::error("admin.notice.fetchFailed"),
            (ContentAction::Save, true) => Notice::success("admin.notice.saved"),
            (ContentAction::Save, false) => Notice::error("admin.notice.saveFailed"),
            (ContentAction::Create, true) => Notice::success("admin.notice.created"),
            (ContentAction::Create, false) => Notice::error("admin.notice.createFailed"),
            (ContentAction::Update, true) => Notice::success("admin.notice.updated"),
            (ContentAction::Update | ContentAction::TogglePublish, false) => {
                Notice::error("admin.notice.updateFailed")
            }
            (ContentAction::Delete, true) => Notice::success("admin.notice.deleted"),
            (ContentAction::Delete, false) => Notice::error("admin.notice.deleteFailed"),
            (ContentAction::TogglePublish, true) => Notice::success("admin.notice.publishToggled"),
        };
        Some(notice)
    }
}

// =============================================================================
// ContentService
// =============================================================================

/// Typed CRUD over a [`Backend`].
#[derive(Debug, Clone)]
pub struct ContentService<B> {
    backend: B,
}

impl<B: Backend> ContentService<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Reads a single-row section (hero, about, contact info, settings).
    ///
    /// # Errors
    ///
    /// [`BackendError::MultipleRows`] if the collection holds more than one
    /// row, or any adapter/decoding error.
    pub async fn load_single<T: Record>(&self) -> Result<Option<Entry<T>>, BackendError> {
        let mut rows = self.backend.select(T::COLLECTION, &Query::all()).await?;
        if rows.len() > 1 {
            return Err(BackendError::MultipleRows);
        }
        rows.pop().map(decode).transpose()
    }

    /// Updates the existing row of a single-row section, or inserts the
    /// first one.
    ///
    /// # Errors
    ///
    /// Propagates adapter and encoding errors.
    pub async fn save_single<T: Record>(
        &self,
        existing_id: Option<&str>,
        record: &T,
    ) -> Result<Entry<T>, BackendError> {
        match existing_id {
            Some(id) => self.update(id, record).await,
            None => self.create(record).await,
        }
    }

    /// Every row of the collection, ascending by `sort_order`.
    ///
    /// # Errors
    ///
    /// Propagates adapter and decoding errors.
    pub async fn list_ordered<T: Record>(&self) -> Result<Vec<Entry<T>>, BackendError> {
        let query = Query::all().order_by("sort_order", Order::Ascending);
        self.backend
            .select(T::COLLECTION, &query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// # Errors
    ///
    /// Propagates adapter and encoding errors.
    pub async fn create<T: Record>(&self, record: &T) -> Result<Entry<T>, BackendError> {
        let row = self.backend.insert(T::COLLECTION, encode(record)?).await?;
        let entry = decode::<T>(row)?;
        info!(collection = %T::COLLECTION, id = %entry.id, "Created row");
        Ok(entry)
    }

    /// # Errors
    ///
    /// [`BackendError::NotFound`] for an unknown id, or any adapter error.
    pub async fn update<T: Record>(&self, id: &str, record: &T) -> Result<Entry<T>, BackendError> {
        let row = self
            .backend
            .update(T::COLLECTION, id, encode(record)?)
            .await?;
        info!(collection = %T::COLLECTION, id, "Updated row");
        decode(row)
    }

    /// # Errors
    ///
    /// Propagates adapter errors.
    pub async fn delete<T: Record>(&self, id: &str) -> Result<(), BackendError> {
        self.backend.delete(T::COLLECTION, id).await?;
        info!(collection = %T::COLLECTION, id, "Deleted row");
        Ok(())
    }

    /// Published posts, newest first, at most `limit`.
    ///
    /// # Errors
    ///
    /// Propagates adapter and decoding errors.
    pub async fn published_posts(
        &self,
        limit: usize,
    ) -> Result<Vec<Entry<BlogPost>>, BackendError> {
        let query = Query::all()
            .columns(&BLOG_LISTING_COLUMNS)
            .eq("published", true)
            .order_by("published_at", Order::Descending)
            .limit(limit);
        self.backend
            .select(Collection::BlogPosts, &query)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// Posts for the public blog section.
    ///
    /// Falls back to the demo posts when nothing is published or the
    /// backend cannot be read.
    pub async fn display_posts(&self) -> Vec<Entry<BlogPost>> {
        match self.published_posts(PUBLIC_BLOG_LIMIT).await {
            Ok(posts) if !posts.is_empty() => posts,
            Ok(_) => demo_posts(),
            Err(e) => {
                warn!("Failed to fetch blog posts: {e}");
                demo_posts()
            }
        }
    }

    /// Publishes or unpublishes a post, stamping `now` when publishing.
    ///
    /// # Errors
    ///
    /// [`BackendError::NotFound`] for an unknown id, or any adapter error.
    pub async fn set_published(
        &self,
        id: &str,
        published: bool,
        now: DateTime<Utc>,
    ) -> Result<Entry<BlogPost>, BackendError> {
        let patch = json!({
            "published": published,
            "published_at": published.then_some(now),
        });
        let row = self
            .backend
            .update(Collection::BlogPosts, id, patch)
            .await?;
        info!(id, published, "Toggled blog post publication");
        decode(row)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Hosted backend port definition.
//!
//! The site reads and writes its editable content through a hosted
//! database-as-a-service. This module defines the generic CRUD surface the
//! rest of the crate relies on; adapters live in [`crate::infrastructure`].
//!
//! Rows travel as JSON objects. Typed conversion happens one layer up, in
//! [`crate::application::content`].

use super::auth::Session;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// BackendError
// =============================================================================

/// Errors returned by a backend adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The request could not be sent or no response was received.
    Request(String),

    /// The backend answered with a non-success status.
    Status {
        /// HTTP-like status code.
        code: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// A row could not be converted to or from its record type.
    Decode(String),

    /// No row matched the given id.
    NotFound,

    /// A single-row read matched more than one row.
    MultipleRows,

    /// The backend is not configured (no URL or key).
    NotConfigured,
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Request(msg) => write!(f, "Request failed: {msg}"),
            BackendError::Status { code, message } => write!(f, "HTTP {code}: {message}"),
            BackendError::Decode(msg) => write!(f, "Invalid row: {msg}"),
            BackendError::NotFound => write!(f, "Row not found"),
            BackendError::MultipleRows => write!(f, "Expected at most one row"),
            BackendError::NotConfigured => write!(f, "Backend is not configured"),
        }
    }
}

impl std::error::Error for BackendError {}

// =============================================================================
// Collection
// =============================================================================

/// Named record collections of the hosted database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Collection {
    HeroContent,
    AboutContent,
    Projects,
    Services,
    ContactInfo,
    SiteSettings,
    BlogPosts,
    UserRoles,
}

impl Collection {
    pub const ALL: [Collection; 8] = [
        Collection::HeroContent,
        Collection::AboutContent,
        Collection::Projects,
        Collection::Services,
        Collection::ContactInfo,
        Collection::SiteSettings,
        Collection::BlogPosts,
        Collection::UserRoles,
    ];

    /// Table name on the backend.
    #[must_use]
    pub fn table_name(self) -> &'static str {
        match self {
            Collection::HeroContent => "hero_content",
            Collection::AboutContent => "about_content",
            Collection::Projects => "projects",
            Collection::Services => "services",
            Collection::ContactInfo => "contact_info",
            Collection::SiteSettings => "site_settings",
            Collection::BlogPosts => "blog_posts",
            Collection::UserRoles => "user_roles",
        }
    }

    /// Translation key of the admin tab label.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("admin.collection.{}", self.table_name())
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

impl FromStr for Collection {
    type Err = BackendError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.table_name() == s)
            .ok_or_else(|| BackendError::Decode(format!("unknown collection: {s}")))
    }
}

// =============================================================================
// Query
// =============================================================================

/// Sort direction of an order clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A read against one collection: projection, equality filters, one order
/// clause and an optional limit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub columns: Option<Vec<String>>,
    pub filters: Vec<(String, Value)>,
    pub order: Option<(String, Order)>,
    pub limit: Option<usize>,
}

impl Query {
    /// Every column of every row.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn columns(mut self, columns: &[&str]) -> Self {
        self.columns = Some(columns.iter().map(|c| (*c).to_string()).collect());
        self
    }

    #[must_use]
    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: &str, order: Order) -> Self {
        self.order = Some((column.to_string(), order));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

// =============================================================================
// Backend Trait
// =============================================================================

/// Generic CRUD access to the hosted database.
///
/// Every call is an independent request/response pair; no ordering is
/// guaranteed between concurrent calls.
#[allow(async_fn_in_trait)]
pub trait Backend {
    /// A handle on the same database whose requests act as the user of
    /// `session`. Row-level policies (admin writes, role lookups) only
    /// grant access through such a handle.
    #[must_use]
    fn with_session(&self, session: &Session) -> Self;

    /// Returns the rows matching `query`.
    async fn select(
        &self,
        collection: Collection,
        query: &Query,
    ) -> Result<Vec<Value>, BackendError>;

    /// Inserts one row and returns it as stored (with its id).
    async fn insert(&self, collection: Collection, row: Value) -> Result<Value, BackendError>;

    /// Merges `row` into the row with the given id and returns the result.
    async fn update(
        &self,
        collection: Collection,
        id: &str,
        row: Value,
    ) -> Result<Value, BackendError>;

    /// Removes the row with the given id.
    async fn delete(&self, collection: Collection, id: &str) -> Result<(), BackendError>;
}

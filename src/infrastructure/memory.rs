// SPDX-License-Identifier: MPL-2.0
//! In-process adapters for the backend and session ports.
//!
//! Used by the CLI's demo mode and by tests. Reads follow the hosted
//! database's semantics: equality filters, a single order clause with
//! `null` values last when ascending (first when descending), then limit.
//! Like the hosted policies, `user_roles` rows are only visible to the
//! signed-in user they belong to.

use crate::application::port::{
    AuthError, AuthProvider, Backend, BackendError, Collection, Order, Query, Session, User,
};
use crate::domain::auth::Credentials;
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

// =============================================================================
// MemoryBackend
// =============================================================================

/// Rows kept in memory, per collection. Clones share the same tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    tables: Arc<Mutex<BTreeMap<Collection, Vec<Map<String, Value>>>>>,
    /// User id of the session this handle acts for.
    viewer: Option<String>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rows stored in a collection.
    pub async fn count(&self, collection: Collection) -> usize {
        self.tables
            .lock()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }
}

fn as_object(row: Value) -> Result<Map<String, Value>, BackendError> {
    match row {
        Value::Object(map) => Ok(map),
        other => Err(BackendError::Decode(format!("expected an object, got {other}"))),
    }
}

fn row_id(row: &Map<String, Value>) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

/// Row-level visibility: role rows belong to a single user.
fn visible_to(collection: Collection, row: &Map<String, Value>, viewer: Option<&str>) -> bool {
    match collection {
        Collection::UserRoles => {
            viewer.is_some() && row.get("user_id").and_then(Value::as_str) == viewer
        }
        _ => true,
    }
}

/// Orders two non-null column values of the same JSON type.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(a), Value::Number(b)) => a
            .as_f64()
            .partial_cmp(&b.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn compare_column(a: Option<&Value>, b: Option<&Value>, order: Order) -> Ordering {
    let a = a.filter(|v| !v.is_null());
    let b = b.filter(|v| !v.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        // Nulls sort as the largest value: last ascending, first descending.
        (None, Some(_)) => match order {
            Order::Ascending => Ordering::Greater,
            Order::Descending => Ordering::Less,
        },
        (Some(_), None) => match order {
            Order::Ascending => Ordering::Less,
            Order::Descending => Ordering::Greater,
        },
        (Some(a), Some(b)) => match order {
            Order::Ascending => compare_values(a, b),
            Order::Descending => compare_values(b, a),
        },
    }
}

fn project(row: &Map<String, Value>, columns: Option<&[String]>) -> Value {
    match columns {
        None => Value::Object(row.clone()),
        Some(columns) => Value::Object(
            columns
                .iter()
                .filter_map(|column| row.get(column).map(|v| (column.clone(), v.clone())))
                .collect(),
        ),
    }
}

impl Backend for MemoryBackend {
    fn with_session(&self, session: &Session) -> Self {
        Self {
            tables: Arc::clone(&self.tables),
            viewer: Some(session.user.id.clone()),
        }
    }

    async fn select(
        &self,
        collection: Collection,
        query: &Query,
    ) -> Result<Vec<Value>, BackendError> {
        let tables = self.tables.lock().await;
        let Some(rows) = tables.get(&collection) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&Map<String, Value>> = rows
            .iter()
            .filter(|row| visible_to(collection, row, self.viewer.as_deref()))
            .filter(|row| {
                query
                    .filters
                    .iter()
                    .all(|(column, value)| row.get(column) == Some(value))
            })
            .collect();

        if let Some((column, order)) = &query.order {
            matched.sort_by(|a, b| compare_column(a.get(column), b.get(column), *order));
        }
        if let Some(limit) = query.limit {
            matched.truncate(limit);
        }

        Ok(matched
            .into_iter()
            .map(|row| project(row, query.columns.as_deref()))
            .collect())
    }

    async fn insert(&self, collection: Collection, row: Value) -> Result<Value, BackendError> {
        let mut row = as_object(row)?;
        if row_id(&row).is_none() {
            row.insert("id".to_string(), Value::String(Uuid::new_v4().to_string()));
        }
        let stored = Value::Object(row.clone());
        self.tables
            .lock()
            .await
            .entry(collection)
            .or_default()
            .push(row);
        Ok(stored)
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        row: Value,
    ) -> Result<Value, BackendError> {
        let patch = as_object(row)?;
        let mut tables = self.tables.lock().await;
        let existing = tables
            .get_mut(&collection)
            .and_then(|rows| rows.iter_mut().find(|row| row_id(row) == Some(id)))
            .ok_or(BackendError::NotFound)?;
        for (column, value) in patch {
            if column != "id" {
                existing.insert(column, value);
            }
        }
        Ok(Value::Object(existing.clone()))
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), BackendError> {
        if let Some(rows) = self.tables.lock().await.get_mut(&collection) {
            rows.retain(|row| row_id(row) != Some(id));
        }
        Ok(())
    }
}

// =============================================================================
// MemoryAuth
// =============================================================================

#[derive(Debug, Clone)]
struct Account {
    id: String,
    password: String,
}

/// Accounts kept in memory. Clones share the same accounts.
#[derive(Debug, Clone, Default)]
pub struct MemoryAuth {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl MemoryAuth {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of the account registered under `email`.
    pub async fn user_id(&self, email: &str) -> Option<String> {
        self.accounts
            .lock()
            .await
            .get(email)
            .map(|account| account.id.clone())
    }
}

impl AuthProvider for MemoryAuth {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let accounts = self.accounts.lock().await;
        let account = accounts
            .get(&credentials.email)
            .filter(|account| account.password == credentials.password)
            .ok_or(AuthError::InvalidCredentials)?;
        Ok(Session {
            access_token: Uuid::new_v4().to_string(),
            user: User {
                id: account.id.clone(),
                email: Some(credentials.email.clone()),
            },
        })
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let mut accounts = self.accounts.lock().await;
        if accounts.contains_key(&credentials.email) {
            return Err(AuthError::AlreadyRegistered);
        }
        accounts.insert(
            credentials.email.clone(),
            Account {
                id: Uuid::new_v4().to_string(),
                password: credentials.password.clone(),
            },
        );
        Ok(())
    }

    async fn sign_out(&self, _session: &Session) -> Result<(), AuthError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn insert_assigns_unique_ids() {
        let backend = MemoryBackend::new();
        let a = backend
            .insert(Collection::Services, json!({"title": "Web"}))
            .await
            .unwrap();
        let b = backend
            .insert(Collection::Services, json!({"title": "Mobile"}))
            .await
            .unwrap();
        assert_ne!(a["id"], b["id"]);
        assert_eq!(backend.count(Collection::Services).await, 2);
        assert_eq!(backend.count(Collection::Projects).await, 0);
    }

    #[tokio::test]
    async fn select_filters_orders_and_limits() {
        let backend = MemoryBackend::new();
        let rows = [
            ("b", json!(2), true),
            ("a", json!(1), true),
            ("c", Value::Null, true),
            ("d", json!(0), false),
        ];
        for (title, order, published) in rows {
            backend
                .insert(
                    Collection::BlogPosts,
                    json!({"title": title, "sort_order": order, "published": published}),
                )
                .await
                .unwrap();
        }

        let query = Query::all()
            .eq("published", true)
            .order_by("sort_order", Order::Ascending);
        let titles: Vec<Value> = backend
            .select(Collection::BlogPosts, &query)
            .await
            .unwrap()
            .into_iter()
            .map(|row| row["title"].clone())
            .collect();
        assert_eq!(titles, vec![json!("a"), json!("b"), json!("c")]);

        let query = Query::all()
            .columns(&["title"])
            .order_by("sort_order", Order::Descending)
            .limit(2);
        let rows = backend.select(Collection::BlogPosts, &query).await.unwrap();
        assert_eq!(rows, vec![json!({"title": "c"}), json!({"title": "b"})]);
    }

    #[tokio::test]
    async fn update_merges_and_reports_missing_rows() {
        let backend = MemoryBackend::new();
        let row = backend
            .insert(Collection::HeroContent, json!({"title": "Old", "subtitle": "Dev"}))
            .await
            .unwrap();
        let id = row["id"].as_str().unwrap().to_string();

        let updated = backend
            .update(Collection::HeroContent, &id, json!({"title": "New", "id": "hijack"}))
            .await
            .unwrap();
        assert_eq!(updated["title"], "New");
        assert_eq!(updated["subtitle"], "Dev");
        assert_eq!(updated["id"], json!(id));

        let missing = backend
            .update(Collection::HeroContent, "nope", json!({"title": "x"}))
            .await;
        assert_eq!(missing, Err(BackendError::NotFound));
    }

    #[tokio::test]
    async fn non_object_rows_are_rejected() {
        let backend = MemoryBackend::new();
        let result = backend.insert(Collection::Projects, json!([1, 2])).await;
        assert!(matches!(result, Err(BackendError::Decode(_))));
    }

    #[tokio::test]
    async fn auth_registers_and_checks_passwords() {
        let auth = MemoryAuth::new();
        let creds = Credentials::new("admin@example.com", "secret1");
        auth.sign_up(&creds).await.unwrap();
        assert_eq!(auth.sign_up(&creds).await, Err(AuthError::AlreadyRegistered));

        let session = auth.sign_in(&creds).await.unwrap();
        assert_eq!(Some(session.user.id), auth.user_id("admin@example.com").await);

        let wrong = Credentials::new("admin@example.com", "secret2");
        assert_eq!(auth.sign_in(&wrong).await, Err(AuthError::InvalidCredentials));
    }

    #[tokio::test]
    async fn role_rows_are_visible_only_to_their_user() {
        let backend = MemoryBackend::new();
        backend
            .insert(Collection::UserRoles, json!({"user_id": "u1", "role": "admin"}))
            .await
            .unwrap();
        let session = |id: &str| Session {
            access_token: format!("token-{id}"),
            user: User {
                id: id.to_string(),
                email: None,
            },
        };
        let query = Query::all().eq("role", "admin");

        let anonymous = backend.select(Collection::UserRoles, &query).await.unwrap();
        assert!(anonymous.is_empty());
        let other = backend.with_session(&session("u2"));
        assert!(other.select(Collection::UserRoles, &query).await.unwrap().is_empty());
        let owner = backend.with_session(&session("u1"));
        assert_eq!(owner.select(Collection::UserRoles, &query).await.unwrap().len(), 1);

        // Session handles share the same tables
        owner
            .insert(Collection::Services, json!({"title": "Web"}))
            .await
            .unwrap();
        assert_eq!(backend.count(Collection::Services).await, 1);
    }
}

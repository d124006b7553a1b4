// SPDX-License-Identifier: MPL-2.0
//! Hosted backend adapter over HTTP.
//!
//! Talks to a Supabase-style project: rows through the PostgREST endpoint
//! (`/rest/v1/<table>`), sessions through the auth endpoint (`/auth/v1`).
//! Every request carries the project's public key; writes made after an
//! admin sign-in carry the session's access token instead of the key as
//! bearer.

use crate::application::auth::classify_sign_up_error;
use crate::application::port::{
    AuthError, AuthProvider, Backend, BackendError, Collection, Order, Query, Session,
};
use crate::config::BackendConfig;
use crate::domain::auth::Credentials;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde_json::Value;
use tracing::debug;

const USER_AGENT: &str = concat!("devfolio/", env!("CARGO_PKG_VERSION"));

/// Client for the hosted database and its session API.
#[derive(Debug, Clone)]
pub struct RestBackend {
    client: Client,
    base_url: String,
    api_key: String,
    access_token: Option<String>,
}

impl RestBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::Request`] if the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, BackendError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            access_token: None,
        })
    }

    /// # Errors
    ///
    /// Returns [`BackendError::NotConfigured`] when the URL or key is missing.
    pub fn from_config(config: &BackendConfig) -> Result<Self, BackendError> {
        let (url, key) = config.credentials().ok_or(BackendError::NotConfigured)?;
        Self::new(url, key)
    }

    fn table_url(&self, collection: Collection) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection.table_name())
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.base_url)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let bearer = self.access_token.as_deref().unwrap_or(&self.api_key);
        request
            .header("apikey", &self.api_key)
            .bearer_auth(bearer)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, BackendError> {
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if response.status().is_success() {
            return Ok(response);
        }
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        Err(BackendError::Status {
            code,
            message: error_message(&body),
        })
    }

    async fn rows(response: Response) -> Result<Vec<Value>, BackendError> {
        response
            .json::<Vec<Value>>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()))
    }
}

// =============================================================================
// Request Encoding
// =============================================================================

fn filter_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// PostgREST query parameters for a read.
fn query_params(query: &Query) -> Vec<(String, String)> {
    let select = query
        .columns
        .as_ref()
        .map_or_else(|| "*".to_string(), |columns| columns.join(","));
    let mut params = vec![("select".to_string(), select)];
    for (column, value) in &query.filters {
        params.push((column.clone(), format!("eq.{}", filter_value(value))));
    }
    if let Some((column, order)) = &query.order {
        let direction = match order {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        };
        params.push(("order".to_string(), format!("{column}.{direction}")));
    }
    if let Some(limit) = query.limit {
        params.push(("limit".to_string(), limit.to_string()));
    }
    params
}

fn id_filter(id: &str) -> [(&'static str, String); 1] {
    [("id", format!("eq.{id}"))]
}

/// Best human-readable message in an error body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|field| json.get(*field).and_then(Value::as_str).map(str::to_string))
        })
        .unwrap_or_else(|| body.to_string())
}

// =============================================================================
// Port Implementations
// =============================================================================

impl Backend for RestBackend {
    /// Sends the session's access token as bearer; the client is shared.
    fn with_session(&self, session: &Session) -> Self {
        Self {
            access_token: Some(session.access_token.clone()),
            ..self.clone()
        }
    }

    async fn select(
        &self,
        collection: Collection,
        query: &Query,
    ) -> Result<Vec<Value>, BackendError> {
        debug!(%collection, ?query, "select");
        let request = self
            .client
            .get(self.table_url(collection))
            .query(&query_params(query));
        Self::rows(self.send(request).await?).await
    }

    async fn insert(&self, collection: Collection, row: Value) -> Result<Value, BackendError> {
        let request = self
            .client
            .post(self.table_url(collection))
            .header("Prefer", "return=representation")
            .json(&row);
        Self::rows(self.send(request).await?)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| BackendError::Decode("insert returned no row".to_string()))
    }

    async fn update(
        &self,
        collection: Collection,
        id: &str,
        row: Value,
    ) -> Result<Value, BackendError> {
        let request = self
            .client
            .patch(self.table_url(collection))
            .query(&id_filter(id))
            .header("Prefer", "return=representation")
            .json(&row);
        Self::rows(self.send(request).await?)
            .await?
            .into_iter()
            .next()
            .ok_or(BackendError::NotFound)
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<(), BackendError> {
        let request = self
            .client
            .delete(self.table_url(collection))
            .query(&id_filter(id));
        self.send(request).await?;
        Ok(())
    }
}

impl AuthProvider for RestBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let request = self
            .client
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .json(credentials);
        let response = match self.send(request).await {
            Ok(response) => response,
            Err(BackendError::Status { code, .. })
                if code == StatusCode::BAD_REQUEST.as_u16()
                    || code == StatusCode::UNAUTHORIZED.as_u16() =>
            {
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        };
        response
            .json::<Session>()
            .await
            .map_err(|e| BackendError::Decode(e.to_string()).into())
    }

    async fn sign_up(&self, credentials: &Credentials) -> Result<(), AuthError> {
        let request = self.client.post(self.auth_url("signup")).json(credentials);
        match self.send(request).await {
            Ok(_) => Ok(()),
            Err(BackendError::Status { message, .. }) => Err(classify_sign_up_error(&message)),
            Err(e) => Err(e.into()),
        }
    }

    async fn sign_out(&self, session: &Session) -> Result<(), AuthError> {
        let request = self.client.post(self.auth_url("logout"));
        self.with_session(session).send(request).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn read_parameters_follow_postgrest_syntax() {
        let query = Query::all()
            .columns(&["id", "title"])
            .eq("published", true)
            .eq("slug", "hello-world")
            .order_by("published_at", Order::Descending)
            .limit(6);
        let params = query_params(&query);
        let expected: Vec<(String, String)> = [
            ("select", "id,title"),
            ("published", "eq.true"),
            ("slug", "eq.hello-world"),
            ("order", "published_at.desc"),
            ("limit", "6"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
        assert_eq!(params, expected);
    }

    #[test]
    fn empty_query_selects_everything() {
        assert_eq!(
            query_params(&Query::all()),
            vec![("select".to_string(), "*".to_string())]
        );
    }

    #[test]
    fn error_message_prefers_json_fields() {
        assert_eq!(
            error_message(&json!({"msg": "User already registered"}).to_string()),
            "User already registered"
        );
        assert_eq!(error_message("gateway timeout"), "gateway timeout");
    }

    #[test]
    fn missing_config_is_reported() {
        let result = RestBackend::from_config(&BackendConfig::default());
        assert!(matches!(result, Err(BackendError::NotConfigured)));
    }

    #[test]
    fn urls_are_built_from_trimmed_base() {
        let backend = RestBackend::new("https://demo.supabase.co/", "anon").unwrap();
        assert_eq!(
            backend.table_url(Collection::BlogPosts),
            "https://demo.supabase.co/rest/v1/blog_posts"
        );
        assert_eq!(backend.auth_url("signup"), "https://demo.supabase.co/auth/v1/signup");
    }
}

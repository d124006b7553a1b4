// SPDX-License-Identifier: MPL-2.0
//! HTTP behaviour of the hosted backend adapter, exercised against a local
//! stub server that records every request it receives.

use devfolio::application::auth::{AdminGate, LoginError};
use devfolio::application::content::ContentService;
use devfolio::application::port::{
    AuthError, AuthProvider, Backend, BackendError, Collection, Session, User,
};
use devfolio::domain::auth::Credentials;
use devfolio::domain::content::{Project, ServiceForm};
use devfolio::infrastructure::RestBackend;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

const API_KEY: &str = "anon-key";
const USER_TOKEN: &str = "user-token";

// =============================================================================
// Stub Server
// =============================================================================

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    target: String,
    headers: Vec<(String, String)>,
    body: String,
}

impl Recorded {
    fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

type Handler = fn(&Recorded) -> (u16, String);

struct Stub {
    base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Stub {
    fn backend(&self) -> RestBackend {
        RestBackend::new(&self.base_url, API_KEY).expect("client should build")
    }

    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn request_to(&self, path: &str) -> Recorded {
        self.requests()
            .into_iter()
            .find(|request| request.path() == path)
            .unwrap_or_else(|| panic!("no request to {path}"))
    }
}

async fn read_request(stream: &mut TcpStream) -> Option<Recorded> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    let head_len = loop {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..head_len]).to_string();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();
    let headers: Vec<(String, String)> = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(key, value)| (key.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();

    let body_len = headers
        .iter()
        .find(|(key, _)| key == "content-length")
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    while buf.len() < head_len + body_len {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let body = String::from_utf8_lossy(&buf[head_len..]).to_string();

    Some(Recorded {
        method,
        target,
        headers,
        body,
    })
}

/// Serves one connection at a time, answering each request with `handler`.
async fn serve(handler: Handler) -> Stub {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("stub should bind");
    let addr = listener.local_addr().expect("stub address");
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requests);

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let Some(request) = read_request(&mut stream).await else {
                continue;
            };
            let (status, body) = handler(&request);
            log.lock().unwrap().push(request);
            let response = format!(
                "HTTP/1.1 {status} Stub\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            let _ = stream.shutdown().await;
        }
    });

    Stub {
        base_url: format!("http://{addr}"),
        requests,
    }
}

fn session() -> Session {
    Session {
        access_token: USER_TOKEN.to_string(),
        user: User {
            id: "u1".to_string(),
            email: Some("admin@example.com".to_string()),
        },
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

// =============================================================================
// Admin Gate
// =============================================================================

/// Answers like a hosted project where role rows are only visible to
/// their own user.
fn hosted_project(request: &Recorded) -> (u16, String) {
    let signed_in = request.header("authorization") == Some(bearer(USER_TOKEN).as_str());
    match request.path() {
        "/auth/v1/token" => (
            200,
            json!({
                "access_token": USER_TOKEN,
                "user": { "id": "u1", "email": "admin@example.com" }
            })
            .to_string(),
        ),
        "/rest/v1/user_roles" if signed_in => (200, json!([{ "role": "admin" }]).to_string()),
        "/rest/v1/user_roles" => (200, "[]".to_string()),
        "/rest/v1/services" if signed_in => (
            201,
            json!([{ "id": "s1", "title": "Web", "sort_order": 0 }]).to_string(),
        ),
        "/rest/v1/services" => (401, json!({ "message": "permission denied" }).to_string()),
        _ => (404, "{}".to_string()),
    }
}

#[tokio::test]
async fn test_admin_role_is_checked_as_the_signed_in_user() {
    let stub = serve(hosted_project).await;
    let gate = AdminGate::new(stub.backend(), stub.backend());

    let session = gate
        .sign_in(&Credentials::new("admin@example.com", "secret1"))
        .await
        .expect("admin should be let in");
    assert_eq!(session.user.id, "u1");

    let role_query = stub.request_to("/rest/v1/user_roles");
    assert_eq!(role_query.header("authorization"), Some(bearer(USER_TOKEN).as_str()));
    assert_eq!(role_query.header("apikey"), Some(API_KEY));
    assert!(role_query.target.contains("user_id=eq.u1"));
    assert!(stub.requests().iter().all(|r| r.path() != "/auth/v1/logout"));
}

#[tokio::test]
async fn test_admin_content_writes_carry_the_session_token() {
    let stub = serve(hosted_project).await;
    let gate = AdminGate::new(stub.backend(), stub.backend());
    let service = ServiceForm {
        title: "Web".to_string(),
        ..ServiceForm::default()
    }
    .to_record()
    .unwrap();

    // Without a session the write is refused by the backend
    let anonymous = ContentService::new(stub.backend()).create(&service).await;
    assert!(matches!(anonymous, Err(BackendError::Status { code: 401, .. })));

    let created = gate.content(&session()).create(&service).await.unwrap();
    assert_eq!(created.id, "s1");

    let write = stub.requests().pop().unwrap();
    assert_eq!(write.method, "POST");
    assert_eq!(write.header("authorization"), Some(bearer(USER_TOKEN).as_str()));
    assert_eq!(write.header("prefer"), Some("return=representation"));
    assert_eq!(
        serde_json::from_str::<serde_json::Value>(&write.body).unwrap()["title"],
        "Web"
    );
}

// =============================================================================
// Rows
// =============================================================================

#[tokio::test]
async fn test_public_reads_send_the_project_key() {
    let stub = serve(|_| (200, "[]".to_string())).await;
    let projects = ContentService::new(stub.backend())
        .list_ordered::<Project>()
        .await
        .unwrap();
    assert!(projects.is_empty());

    let read = stub.request_to("/rest/v1/projects");
    assert_eq!(read.method, "GET");
    assert_eq!(read.header("apikey"), Some(API_KEY));
    assert_eq!(read.header("authorization"), Some(bearer(API_KEY).as_str()));
    assert!(read.target.contains("order=sort_order.asc"));
}

#[tokio::test]
async fn test_update_of_missing_row_is_not_found() {
    let stub = serve(|_| (200, "[]".to_string())).await;
    let backend = stub.backend().with_session(&session());
    let result = backend
        .update(Collection::HeroContent, "h1", json!({ "title": "New" }))
        .await;
    assert_eq!(result, Err(BackendError::NotFound));

    let patch = stub.request_to("/rest/v1/hero_content");
    assert_eq!(patch.method, "PATCH");
    assert!(patch.target.contains("id=eq.h1"));
    assert_eq!(patch.header("prefer"), Some("return=representation"));
}

#[tokio::test]
async fn test_error_status_carries_backend_message() {
    let stub = serve(|_| {
        (
            500,
            json!({ "message": "relation does not exist" }).to_string(),
        )
    })
    .await;
    let result = stub
        .backend()
        .select(Collection::BlogPosts, &Default::default())
        .await;
    assert_eq!(
        result,
        Err(BackendError::Status {
            code: 500,
            message: "relation does not exist".to_string(),
        })
    );
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn test_rejected_password_is_invalid_credentials() {
    let stub = serve(|_| {
        (
            400,
            json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" })
                .to_string(),
        )
    })
    .await;
    let gate = AdminGate::new(stub.backend(), stub.backend());
    assert_eq!(
        gate.sign_in(&Credentials::new("admin@example.com", "wrong-password"))
            .await,
        Err(LoginError::Auth(AuthError::InvalidCredentials))
    );

    let token = stub.request_to("/auth/v1/token");
    assert!(token.target.contains("grant_type=password"));
    assert!(token.body.contains("admin@example.com"));
}

#[tokio::test]
async fn test_duplicate_sign_up_is_already_registered() {
    let stub = serve(|_| {
        (
            422,
            json!({ "code": 422, "msg": "User already registered" }).to_string(),
        )
    })
    .await;
    let result = stub
        .backend()
        .sign_up(&Credentials::new("admin@example.com", "secret1"))
        .await;
    assert_eq!(result, Err(AuthError::AlreadyRegistered));
    assert_eq!(stub.request_to("/auth/v1/signup").method, "POST");
}

#[tokio::test]
async fn test_sign_out_reports_failures() {
    let stub = serve(|_| (204, String::new())).await;
    let gate = AdminGate::new(stub.backend(), stub.backend());
    let notice = gate.sign_out(&session()).await.unwrap();
    assert_eq!(notice.title, "admin.notice.signedOut");
    let logout = stub.request_to("/auth/v1/logout");
    assert_eq!(logout.header("authorization"), Some(bearer(USER_TOKEN).as_str()));

    let stub = serve(|_| (401, json!({ "msg": "invalid JWT" }).to_string())).await;
    let gate = AdminGate::new(stub.backend(), stub.backend());
    assert_eq!(
        gate.sign_out(&session()).await,
        Err(AuthError::Backend(BackendError::Status {
            code: 401,
            message: "invalid JWT".to_string(),
        }))
    );
}

//! Common test utilities and fixtures
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use quill_server::{create_router, state::AppState, TokenService};
use quill_storage::SqliteStorage;
use serde_json::Value;
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key";

/// Fast bcrypt cost for tests
pub const TEST_BCRYPT_COST: u32 = 4;

/// Everything a test needs; the temp dir keeps the database file alive
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub storage: Arc<SqliteStorage>,
    pub tokens: Arc<TokenService>,
    _temp_dir: TempDir,
}

/// Create file-backed storage with migrations applied
pub async fn create_test_storage() -> (Arc<SqliteStorage>, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_url = format!("sqlite://{}", temp_dir.path().join("test.db").display());

    let pool = quill_storage::create_pool(&db_url)
        .await
        .expect("Failed to create pool");
    quill_storage::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    (Arc::new(SqliteStorage::new(pool)), temp_dir)
}

pub async fn create_test_app() -> TestApp {
    let (storage, temp_dir) = create_test_storage().await;
    let tokens = Arc::new(TokenService::with_default_expiration(TEST_SECRET));
    let state = AppState::from_storage(Arc::clone(&storage), Arc::clone(&tokens), TEST_BCRYPT_COST);

    TestApp {
        router: create_router(state.clone()),
        state,
        storage,
        tokens,
        _temp_dir: temp_dir,
    }
}

impl TestApp {
    /// Send a request and return status plus parsed JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed");
        into_json(response).await
    }

    /// Sign up through the API and return the access token
    pub async fn sign_up(&self, full_name: &str, email: &str, password: &str) -> String {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/create-account",
                None,
                &serde_json::json!({
                    "fullName": full_name,
                    "email": email,
                    "password": password,
                }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "signup failed: {body}");
        body["accessToken"]
            .as_str()
            .expect("accessToken missing")
            .to_string()
    }

    /// Create a note through the API and return its id
    pub async fn add_note(&self, token: &str, title: &str, content: &str) -> String {
        let (status, body) = self
            .send(json_request(
                "POST",
                "/Add-Note",
                Some(token),
                &serde_json::json!({ "title": title, "content": content }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK, "add note failed: {body}");
        body["note"]["_id"].as_str().expect("note id missing").to_string()
    }
}

pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder
        .body(Body::from(serde_json::to_string(body).unwrap()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn into_json(response: Response<Body>) -> (StatusCode, Value) {
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

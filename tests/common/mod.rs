//! Common test utilities and helpers
//!
//! Every test server runs over its own in-memory SQLite database, so tests
//! are independent and can run in parallel.

#![allow(dead_code)]

use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::SqlitePool;
use storefront::backend::routes::create_router;
use storefront::backend::server::{
    config::{load_database, ServerConfig},
    init::create_app,
    state::AppState,
};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Config with the cheapest bcrypt cost and a private in-memory database
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .database_url("sqlite::memory:")
        .bcrypt_cost(4)
        .build()
        .expect("valid test config")
}

pub async fn test_server() -> TestServer {
    let app = create_app(&test_config()).await.expect("app starts");
    TestServer::new(app).expect("test server")
}

/// Test server plus a handle on its database, for asserting on stored rows
pub async fn test_app() -> (TestServer, SqlitePool) {
    let config = test_config();
    let pool = load_database(&config.database_url).await.expect("database");
    let app = create_router(AppState::new(&config, pool.clone()));
    (TestServer::new(app).expect("test server"), pool)
}

pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count query");
    count
}

/// `Authorization: Bearer <token>`
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    (
        header::AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).expect("ascii token"),
    )
}

pub async fn signup(server: &TestServer, email: &str, password: &str) -> StatusCode {
    server
        .post("/signup")
        .json(&json!({ "email": email, "password": password }))
        .await
        .status_code()
}

/// Log in and return the session token
pub async fn login(server: &TestServer, email: &str, password: &str) -> String {
    let response = server
        .post("/login")
        .json(&json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["token"].as_str().expect("token field").to_string()
}

/// Sign up a fresh user and return their token
pub async fn signed_in(server: &TestServer) -> String {
    let email = format!("user_{}@example.com", uuid::Uuid::new_v4());
    assert_eq!(signup(server, &email, "test_password_123").await, StatusCode::CREATED);
    login(server, &email, "test_password_123").await
}

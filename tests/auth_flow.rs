//! Authentication API integration tests
//!
//! Signup, login, logout and the login-required middleware driven through
//! the full router.

mod common;

use axum::http::{header, HeaderValue, StatusCode};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use storefront::backend::auth::{CredentialStore, SqliteCredentialStore};

use common::{bearer, login, signup, test_app, test_server};

#[tokio::test]
async fn test_signup_login_and_access() {
    let (server, pool) = test_app().await;

    let response = server
        .post("/signup")
        .json(&json!({ "email": "alice@x.com", "password": "pw123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.text(), "User created successfully");

    let token = login(&server, "alice@x.com", "pw123").await;
    assert_eq!(token.split('.').count(), 3);

    let (name, value) = bearer(&token);
    let response = server.get("/api/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();

    let stored = SqliteCredentialStore::new(pool)
        .find_by_email("alice@x.com")
        .await
        .unwrap()
        .expect("alice is stored");
    assert_eq!(body["userId"], stored.id.as_str());
}

#[tokio::test]
async fn test_corrupted_token_is_rejected() {
    let server = test_server().await;
    signup(&server, "alice@x.com", "pw123").await;
    let token = login(&server, "alice@x.com", "pw123").await;

    let mut corrupted = token.into_bytes();
    let pos = corrupted.len() - 10;
    corrupted[pos] = if corrupted[pos] == b'A' { b'B' } else { b'A' };
    let corrupted = String::from_utf8(corrupted).unwrap();

    let (name, value) = bearer(&corrupted);
    let response = server.get("/api/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_and_malformed_headers() {
    let server = test_server().await;
    signup(&server, "alice@x.com", "pw123").await;
    let token = login(&server, "alice@x.com", "pw123").await;

    let response = server.get("/api/me").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    for value in [
        token.clone(),
        format!("Bearer  {}", token),
        format!("Bearer {} extra", token),
        format!("Token {}", token),
        "Bearer".to_string(),
    ] {
        let response = server
            .get("/api/me")
            .add_header(header::AUTHORIZATION, HeaderValue::from_str(&value).unwrap())
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED, "{value:?}");
    }
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let server = test_server().await;
    signup(&server, "alice@x.com", "pw123").await;

    let wrong_password = server
        .post("/login")
        .json(&json!({ "email": "alice@x.com", "password": "nope" }))
        .await;
    let unknown_email = server
        .post("/login")
        .json(&json!({ "email": "bob@x.com", "password": "pw123" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_email.text());
}

#[tokio::test]
async fn test_signup_rejects_bad_payloads() {
    let server = test_server().await;

    let response = server
        .post("/signup")
        .content_type("application/json")
        .bytes("{not json".into())
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let response = server
        .post("/signup")
        .json(&json!({ "email": "", "password": "pw123" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_duplicate_signup_conflicts() {
    let server = test_server().await;

    assert_eq!(signup(&server, "alice@x.com", "pw123").await, StatusCode::CREATED);
    assert_eq!(signup(&server, "alice@x.com", "other").await, StatusCode::CONFLICT);

    // The first password still works
    login(&server, "alice@x.com", "pw123").await;
}

#[tokio::test]
async fn test_logout_clears_cookie_without_revoking() {
    let server = test_server().await;
    signup(&server, "alice@x.com", "pw123").await;
    let token = login(&server, "alice@x.com", "pw123").await;

    let response = server.get("/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let cookie = response.header(header::SET_COOKIE);
    assert!(cookie.to_str().unwrap().contains("Max-Age=0"));

    let (name, value) = bearer(&token);
    let response = server.get("/api/me").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

/**
 * Logout Handler
 *
 * GET /logout clears the `session_token` cookie on the client and returns
 * 200. Tokens are stateless, so this cannot invalidate a token that was
 * already issued: a copy of it stays valid until its expiry.
 */

use axum::{
    http::{header::SET_COOKIE, StatusCode},
    response::IntoResponse,
};

/// Name of the cookie a browser client may hold the token in
pub const SESSION_COOKIE: &str = "session_token";

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    tracing::info!("Logout requested");

    let expired_cookie = format!("{}=; Path=/; Max-Age=0; HttpOnly", SESSION_COOKIE);
    (
        StatusCode::OK,
        [(SET_COOKIE, expired_cookie)],
        "Logout successful",
    )
}

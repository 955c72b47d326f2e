/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * login. It extracts and verifies the session token from the Authorization
 * header and hands the verified identity to handlers as a typed request
 * extension.
 *
 * # Request States
 *
 * - No header → 401
 * - Header not exactly `Bearer <token>` → 401
 * - Bad signature, malformed or expired token → 401 with one generic message
 * - Valid → the wrapped handler runs with `AuthenticatedUser` attached
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Identity verified from the session token, valid for one request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Reads the Authorization header
/// 2. Requires the exact `Bearer <token>` shape
/// 3. Verifies the token
/// 4. Attaches `AuthenticatedUser` to request extensions
///
/// Authentication failure is terminal for the request; the wrapped handler
/// is never invoked.
pub async fn require_login(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::authentication("Unauthorized")
        })?
        .to_str()
        .map_err(|_| {
            tracing::warn!("Non-ASCII Authorization header");
            BackendError::authentication("Invalid authorization header")
        })?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::authentication("Invalid authorization header")
    })?;

    let claims = tokens.verify_token(token).map_err(|e| {
        tracing::warn!("Rejected session token: {}", e);
        BackendError::authentication("Invalid token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
    });

    Ok(next.run(request).await)
}

/// Split `Bearer <token>` into its token, requiring exactly two
/// space-separated segments
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}

/// Axum extractor for the authenticated user
///
/// Only usable on routes behind `require_login`; elsewhere it rejects with
/// 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::authentication("Unauthorized")
            })?;

        Ok(AuthUser(user))
    }
}

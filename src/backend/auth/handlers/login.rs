/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a session token
 * 4. Return the token
 *
 * # Security
 *
 * - Unknown email, wrong password and an unusable stored hash all return the
 *   same 401 body, so accounts cannot be enumerated
 * - An unknown email still pays for one bcrypt hash at the configured cost,
 *   so response time does not reveal whether the account exists
 * - Passwords are never logged or returned in responses
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::auth::password::{hash_password, verify_password};
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::CredentialStore;
use crate::backend::error::BackendError;
use crate::backend::server::state::BcryptCost;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body does not decode
/// * `401 Unauthorized` - If the user is not found or the password is incorrect
/// * `500 Internal Server Error` - If the store lookup or token issuance fails
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."
/// }
/// ```
pub async fn login(
    State(credentials): State<Arc<dyn CredentialStore>>,
    State(tokens): State<Arc<TokenService>>,
    State(BcryptCost(cost)): State<BcryptCost>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected login payload: {}", e);
        BackendError::validation("Invalid request payload")
    })?;

    let user = credentials
        .find_by_email(&request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error: {:?}", e);
            BackendError::storage("Error connecting to the database")
        })?;

    let Some(user) = user else {
        // Same bcrypt work as a real comparison; the result is discarded.
        let _ = hash_password(&request.password, cost).await;
        tracing::warn!("Login for unknown email: {}", request.email);
        return Err(BackendError::authentication(INVALID_CREDENTIALS));
    };

    let valid = verify_password(&request.password, &user.password_hash)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Password verification error for {}: {:?}", user.email, e);
            false
        });

    if !valid {
        tracing::warn!("Invalid password for user: {}", user.email);
        return Err(BackendError::authentication(INVALID_CREDENTIALS));
    }

    let token = tokens.issue_token(&user.id).map_err(|e| {
        tracing::error!("Failed to create token: {:?}", e);
        BackendError::internal("Error generating token")
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok(Json(TokenResponse { token }))
}

/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Decode the JSON body (400 if it does not decode)
 * 2. Hash the password with bcrypt on the blocking pool
 * 3. Insert the credential into the store
 * 4. Return 201 with a plain confirmation
 *
 * # Security
 *
 * - The plaintext password is dropped once hashed and never persisted
 * - The response never contains the hash
 * - A taken email is reported as a conflict with a generic message
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;

use crate::backend::auth::handlers::types::SignupRequest;
use crate::backend::auth::password::hash_password;
use crate::backend::auth::users::{CredentialStore, NewUser};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::server::state::BcryptCost;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - If the body does not decode or a field is empty
/// * `409 Conflict` - If the store already holds this email
/// * `500 Internal Server Error` - If hashing or the insert fails
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "email": "alice@x.com",
///   "password": "pw123"
/// }
/// ```
pub async fn signup(
    State(credentials): State<Arc<dyn CredentialStore>>,
    State(BcryptCost(cost)): State<BcryptCost>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, &'static str), BackendError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!("Rejected signup payload: {}", e);
        BackendError::validation("Invalid request payload")
    })?;

    if request.email.is_empty() || request.password.is_empty() {
        tracing::warn!("Signup with empty email or password");
        return Err(BackendError::validation("Invalid request payload"));
    }
    tracing::info!("Signup request for: {}", request.email);

    let password_hash = hash_password(&request.password, cost).await.map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        BackendError::internal("Error hashing password")
    })?;

    let user_id = credentials
        .insert(NewUser {
            email: request.email.clone(),
            password_hash,
        })
        .await
        .map_err(|e| match e {
            StoreError::Conflict => {
                tracing::warn!("Email already registered: {}", request.email);
                BackendError::conflict("Error creating user")
            }
            other => {
                tracing::error!("Failed to create user: {:?}", other);
                BackendError::storage("Error creating user")
            }
        })?;

    tracing::info!("User created successfully: {} ({})", request.email, user_id);

    Ok((StatusCode::CREATED, "User created successfully"))
}

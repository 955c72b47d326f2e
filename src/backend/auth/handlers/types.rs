/**
 * Authentication Handler Types
 *
 * Request and response bodies for the signup, login and identity endpoints.
 */

use serde::{Deserialize, Serialize};

/// Credentials sent to signup and login
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct CredentialsRequest {
    /// User's email address
    pub email: String,
    /// User's plaintext password (hashed before storage, never logged)
    pub password: String,
}

pub type SignupRequest = CredentialsRequest;
pub type LoginRequest = CredentialsRequest;

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct TokenResponse {
    /// Session token for the `Authorization: Bearer` header
    pub token: String,
}

/// Identity of the caller as seen by the auth middleware
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub user_id: String,
}

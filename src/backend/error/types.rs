/**
 * Backend Error Types
 *
 * This module defines the errors that HTTP handlers return. Each variant maps
 * to one HTTP status code and carries the message the client is allowed to
 * see. Underlying store or crypto errors are logged where they occur and
 * never copied into these messages.
 *
 * # Error Categories
 *
 * - `ValidationError` - Malformed request body or path (400)
 * - `AuthenticationError` - Bad credentials or token (401)
 * - `NotFoundError` - Target record does not exist (404)
 * - `ConflictError` - Record already exists (409)
 * - `StorageError` - Store or blob collaborator failure (500)
 * - `InternalError` - Anything else on the server side (500)
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use storefront::backend::error::BackendError;
///
/// let err = BackendError::validation("Invalid request payload");
/// let err = BackendError::authentication("Invalid credentials");
/// let err = BackendError::storage("Error creating user");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not be decoded or failed validation
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Credentials or token were rejected
    ///
    /// The message is intentionally generic so that callers cannot tell
    /// which check failed.
    #[error("Authentication error: {message}")]
    AuthenticationError {
        /// Human-readable error message
        message: String,
    },

    /// The addressed record does not exist
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// The record collides with an existing one
    #[error("Conflict: {message}")]
    ConflictError {
        /// Human-readable error message
        message: String,
    },

    /// A store collaborator failed
    #[error("Storage error: {message}")]
    StorageError {
        /// Human-readable error message
        message: String,
    },

    /// Internal failure unrelated to storage (hashing, token signing)
    #[error("Internal error: {message}")]
    InternalError {
        /// Human-readable error message
        message: String,
    },

    /// Product form was incomplete
    #[error(transparent)]
    SharedError(#[from] SharedError),
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::AuthenticationError {
            message: message.into(),
        }
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Create a new conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::ConflictError {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageError {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `AuthenticationError` - 401 Unauthorized
    /// - `NotFoundError` - 404 Not Found
    /// - `ConflictError` - 409 Conflict
    /// - `StorageError` / `InternalError` - 500 Internal Server Error
    /// - `SharedError` - 400 Bad Request
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthenticationError { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::ConflictError { .. } => StatusCode::CONFLICT,
            Self::StorageError { .. } | Self::InternalError { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::SharedError(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Get the error message shown to clients
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::AuthenticationError { message }
            | Self::NotFoundError { message }
            | Self::ConflictError { message }
            | Self::StorageError { message }
            | Self::InternalError { message } => message.clone(),
            Self::SharedError(err) => err.to_string(),
        }
    }
}

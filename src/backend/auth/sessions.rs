/**
 * Session Management and JWT Tokens
 *
 * This module issues and verifies the signed session tokens handed out at
 * login. Tokens are HS256 JWTs signed with the single shared secret from
 * `ServerConfig`. They live for `TOKEN_LIFETIME` and there is no server-side
 * session table, so a token stays valid until it expires.
 */

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::backend::server::config::TOKEN_LIFETIME;

/// Fixed `sub` claim carried by every session token
pub const TOKEN_SUBJECT: &str = "user_token";

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub user_id: String,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Always `TOKEN_SUBJECT`
    pub sub: String,
}

/// Token issuance and verification failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token's expiry instant has been reached
    #[error("token has expired")]
    Expired,
    /// Bad signature, malformed structure or unexpected claims
    #[error("invalid token: {0}")]
    Invalid(String),
    /// Signing failed
    #[error("failed to encode token: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens
///
/// Holds only the keys derived from the shared secret, so one instance is
/// shared across all requests behind an `Arc`.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    /// Create a token service for the given shared secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Create a token for a user, valid from now
    pub fn issue_token(&self, user_id: &str) -> Result<String, TokenError> {
        self.issue_token_at(user_id, Utc::now())
    }

    /// Create a token as if it had been issued at `issued_at`
    pub fn issue_token_at(
        &self,
        user_id: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            user_id: user_id.to_string(),
            iat,
            exp: iat + TOKEN_LIFETIME.as_secs() as i64,
            sub: TOKEN_SUBJECT.to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Encoding)
    }

    /// Verify a token against the current time
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_token_at(token, Utc::now())
    }

    /// Verify a token's signature and claims, treating `now` as the current time
    ///
    /// A token is rejected at or after its `exp` instant.
    pub fn verify_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked below against `now` with no leeway.
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);
        validation.sub = Some(TOKEN_SUBJECT.to_string());

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;

        let claims = token_data.claims;
        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        Ok(claims)
    }
}

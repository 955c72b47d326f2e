/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds every collaborator a handler may need, each constructed
 * once at startup and passed in explicitly:
 * - The token service (read-only keys derived from the shared secret)
 * - The credential store
 * - The product and blob stores
 * - The bcrypt cost factor for new password hashes
 *
 * There is no process-wide global: tests build an `AppState` over an
 * in-memory database or their own store implementations.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract only the part of the
 * state they use, e.g. `State(tokens): State<Arc<TokenService>>`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::{CredentialStore, SqliteCredentialStore};
use crate::backend::catalog::blobs::{BlobStore, SqliteBlobStore};
use crate::backend::catalog::products::{ProductStore, SqliteProductStore};
use crate::backend::server::config::ServerConfig;

/// bcrypt cost factor, wrapped so it can be extracted as state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BcryptCost(pub u32);

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    /// Session token issuance and verification
    pub tokens: Arc<TokenService>,

    /// User credentials, looked up by email
    pub credentials: Arc<dyn CredentialStore>,

    /// Product records
    pub products: Arc<dyn ProductStore>,

    /// Product image content
    pub blobs: Arc<dyn BlobStore>,

    /// Cost factor used when hashing new passwords
    pub bcrypt_cost: BcryptCost,
}

impl AppState {
    /// Build the state with SQLite-backed stores over `pool`
    pub fn new(config: &ServerConfig, pool: SqlitePool) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(&config.jwt_secret)),
            credentials: Arc::new(SqliteCredentialStore::new(pool.clone())),
            products: Arc::new(SqliteProductStore::new(pool.clone())),
            blobs: Arc::new(SqliteBlobStore::new(pool)),
            bcrypt_cost: BcryptCost(config.bcrypt_cost),
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}

impl FromRef<AppState> for Arc<dyn ProductStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.products.clone()
    }
}

impl FromRef<AppState> for Arc<dyn BlobStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.blobs.clone()
    }
}

impl FromRef<AppState> for BcryptCost {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.bcrypt_cost
    }
}

/**
 * User Model and Credential Store
 *
 * This module defines the stored credential record and the `CredentialStore`
 * abstraction the auth handlers are constructed with, plus the SQLite-backed
 * implementation used by the server.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::backend::error::StoreError;

/// User struct representing a stored credential
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID string)
    pub id: String,
    /// User email address, the lookup key (case-sensitive)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// A credential about to be inserted
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Persistent store of user credentials, keyed by email
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Get user by email, `None` if no such user
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a new user and return its ID
    ///
    /// Fails with `StoreError::Conflict` when the email is already taken.
    async fn insert(&self, user: NewUser) -> Result<String, StoreError>;
}

/// Credential store backed by the `users` table
#[derive(Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, user: NewUser) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO users (id, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }
}

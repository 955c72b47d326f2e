/**
 * Image Blob Store
 *
 * Product images are stored as opaque byte blobs addressed by ID, separate
 * from product records.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::StoreError;

/// Upload/download store for binary content
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `content` and return the new blob ID
    async fn upload(&self, filename: &str, content: Vec<u8>) -> Result<String, StoreError>;

    /// Read a blob's content, `StoreError::NotFound` if absent
    async fn download(&self, id: &str) -> Result<Vec<u8>, StoreError>;

    /// Remove a blob, `StoreError::NotFound` if absent
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Blob store backed by the `blobs` table
#[derive(Clone)]
pub struct SqliteBlobStore {
    pool: SqlitePool,
}

impl SqliteBlobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BlobStore for SqliteBlobStore {
    async fn upload(&self, filename: &str, content: Vec<u8>) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO blobs (id, filename, content, created_at)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(&id)
        .bind(filename)
        .bind(content)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!("Stored blob {} ({})", id, filename);
        Ok(id)
    }

    async fn download(&self, id: &str) -> Result<Vec<u8>, StoreError> {
        let row: Option<(Vec<u8>,)> = sqlx::query_as("SELECT content FROM blobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|(content,)| content).ok_or(StoreError::NotFound)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM blobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        tracing::debug!("Removed blob {}", id);
        Ok(())
    }
}

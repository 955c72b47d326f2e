/**
 * Product Store
 *
 * Persistence for product records. The image itself lives in the blob
 * store; a product only carries the blob ID.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use crate::backend::error::StoreError;
use crate::shared::Product;

/// Fields written by an edit; `img` is replaced only when present
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    pub name: String,
    pub desc: String,
    pub img: Option<String>,
}

/// CRUD store for products
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Insert a product and return its new ID
    async fn insert(&self, product: &Product) -> Result<String, StoreError>;

    /// All products in creation order, without image content
    async fn list(&self) -> Result<Vec<Product>, StoreError>;

    /// One product by ID, `StoreError::NotFound` if absent
    async fn get(&self, id: &str) -> Result<Product, StoreError>;

    /// Update a product, `StoreError::NotFound` if no such ID
    async fn update(&self, id: &str, update: ProductUpdate) -> Result<(), StoreError>;

    /// Delete a product and return the removed record, `StoreError::NotFound` if no such ID
    async fn delete(&self, id: &str) -> Result<Product, StoreError>;
}

#[derive(sqlx::FromRow)]
struct ProductRow {
    id: String,
    name: String,
    description: String,
    img: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: row.id,
            name: row.name,
            desc: row.description,
            img: row.img,
            img_content: None,
        }
    }
}

/// Product store backed by the `products` table
#[derive(Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn insert(&self, product: &Product) -> Result<String, StoreError> {
        let id = uuid::Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO products (id, name, description, img, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(&id)
        .bind(&product.name)
        .bind(&product.desc)
        .bind(&product.img)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, description, img
            FROM products
            ORDER BY rowid
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, description, img FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::from).ok_or(StoreError::NotFound)
    }

    async fn update(&self, id: &str, update: ProductUpdate) -> Result<(), StoreError> {
        let result = match update.img {
            Some(img) => {
                sqlx::query("UPDATE products SET name = $1, description = $2, img = $3 WHERE id = $4")
                    .bind(&update.name)
                    .bind(&update.desc)
                    .bind(img)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
            None => {
                sqlx::query("UPDATE products SET name = $1, description = $2 WHERE id = $3")
                    .bind(&update.name)
                    .bind(&update.desc)
                    .bind(id)
                    .execute(&self.pool)
                    .await?
            }
        };

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<Product, StoreError> {
        let row = sqlx::query_as::<_, ProductRow>(
            "DELETE FROM products WHERE id = $1 RETURNING id, name, description, img",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Product::from).ok_or(StoreError::NotFound)
    }
}

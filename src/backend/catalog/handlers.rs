/**
 * Catalog Handlers
 *
 * HTTP handlers for product CRUD. Products arrive as multipart forms with
 * `name` and `desc` text fields and an `img` file field; the image goes to
 * the blob store and the product keeps its blob ID.
 *
 * # Routes
 *
 * - `POST /api/addProduct` - Create (login required)
 * - `GET /api/getAllProducts` - List with image content (public)
 * - `PUT /api/editProduct/{id}` - Update, image optional (login required)
 * - `DELETE /api/deleteProduct/{id}` - Delete (login required)
 */

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    response::Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

use crate::backend::catalog::blobs::BlobStore;
use crate::backend::catalog::products::{ProductStore, ProductUpdate};
use crate::backend::error::{BackendError, StoreError};
use crate::backend::middleware::AuthUser;
use crate::shared::{Product, SharedError};

/// Upload size limit for product forms (10 MiB)
pub const MAX_UPLOAD_BYTES: usize = 10 << 20;

/// Decoded product form
#[derive(Debug, Default)]
struct ProductForm {
    name: String,
    desc: String,
    img: Option<ImageUpload>,
}

#[derive(Debug)]
struct ImageUpload {
    filename: String,
    content: Vec<u8>,
}

async fn read_form(
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<ProductForm, BackendError> {
    let unparseable = |e: &dyn std::fmt::Display| {
        tracing::warn!("Unable to parse product form: {}", e);
        BackendError::validation("Unable to parse form")
    };

    let mut multipart = multipart.map_err(|e| unparseable(&e))?;
    let mut form = ProductForm::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| unparseable(&e))? {
        let field_name = field.name().map(str::to_string);
        match field_name.as_deref() {
            Some("name") => form.name = field.text().await.map_err(|e| unparseable(&e))?,
            Some("desc") => form.desc = field.text().await.map_err(|e| unparseable(&e))?,
            Some("img") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content = field.bytes().await.map_err(|e| unparseable(&e))?;
                form.img = Some(ImageUpload {
                    filename,
                    content: content.to_vec(),
                });
            }
            _ => {}
        }
    }

    Ok(form)
}

fn parse_product_id(id: &str) -> Result<(), BackendError> {
    uuid::Uuid::parse_str(id).map(|_| ()).map_err(|_| {
        tracing::warn!("Invalid product ID: {}", id);
        BackendError::validation("Invalid product ID format")
    })
}

async fn upload_image(blobs: &dyn BlobStore, image: ImageUpload) -> Result<String, BackendError> {
    blobs
        .upload(&image.filename, image.content)
        .await
        .map_err(|e| {
            tracing::error!("Failed to upload image {}: {:?}", image.filename, e);
            BackendError::storage("Unable to upload file")
        })
}

/// Remove a blob no product references any more
///
/// Failure only leaves an unreferenced row behind, so it is logged and the
/// request carries on.
async fn discard_image(blobs: &dyn BlobStore, img: &str) {
    if let Err(e) = blobs.delete(img).await {
        tracing::warn!("Failed to remove unreferenced image {}: {:?}", img, e);
    }
}

fn product_not_found_or<'a>(
    action: &'static str,
    id: &'a str,
) -> impl FnOnce(StoreError) -> BackendError + 'a {
    move |e| match e {
        StoreError::NotFound => BackendError::not_found("Product not found"),
        other => {
            tracing::error!("Failed to {} product {}: {:?}", action, id, other);
            BackendError::storage(format!("Unable to {} product", action))
        }
    }
}

/// Create a product from a multipart form
///
/// Returns the new product's ID as a JSON string.
pub async fn add_product(
    State(products): State<Arc<dyn ProductStore>>,
    State(blobs): State<Arc<dyn BlobStore>>,
    AuthUser(user): AuthUser,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<String>, BackendError> {
    let form = read_form(multipart).await?;
    let image = form.img.ok_or_else(|| {
        let err = SharedError::MissingImage;
        tracing::warn!("Rejected product form: {} ({})", err, err.field());
        BackendError::from(err)
    })?;

    let img = upload_image(blobs.as_ref(), image).await?;
    let product = Product::new(form.name, form.desc, img);

    let id = match products.insert(&product).await {
        Ok(id) => id,
        Err(e) => {
            tracing::error!("Failed to insert product: {:?}", e);
            discard_image(blobs.as_ref(), &product.img).await;
            return Err(BackendError::storage("Unable to insert product"));
        }
    };

    tracing::info!("Product {} added by {}", id, user.user_id);
    Ok(Json(id))
}

/// List all products with their image content
pub async fn get_all_products(
    State(products): State<Arc<dyn ProductStore>>,
    State(blobs): State<Arc<dyn BlobStore>>,
) -> Result<Json<Vec<Product>>, BackendError> {
    let mut listed = products.list().await.map_err(|e| {
        tracing::error!("Failed to list products: {:?}", e);
        BackendError::storage("Unable to list products")
    })?;

    for product in &mut listed {
        let content = blobs.download(&product.img).await.map_err(|e| {
            tracing::error!("Failed to read image {} for product {}: {:?}", product.img, product.id, e);
            BackendError::storage("Unable to read file content")
        })?;
        product.img_content = Some(content);
    }

    Ok(Json(listed))
}

/// Update a product's name and description, and its image when one is sent
///
/// The product must exist before a new image is stored. A replaced image is
/// removed once the update has landed.
pub async fn edit_product(
    State(products): State<Arc<dyn ProductStore>>,
    State(blobs): State<Arc<dyn BlobStore>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<Value>, BackendError> {
    parse_product_id(&id)?;
    let form = read_form(multipart).await?;

    let existing = products
        .get(&id)
        .await
        .map_err(product_not_found_or("update", &id))?;

    let img = match form.img {
        Some(image) => Some(upload_image(blobs.as_ref(), image).await?),
        None => None,
    };

    let update = ProductUpdate {
        name: form.name,
        desc: form.desc,
        img: img.clone(),
    };
    if let Err(e) = products.update(&id, update).await {
        if let Some(img) = &img {
            discard_image(blobs.as_ref(), img).await;
        }
        return Err(product_not_found_or("update", &id)(e));
    }

    if img.is_some() {
        discard_image(blobs.as_ref(), &existing.img).await;
    }

    tracing::info!("Product {} updated by {}", id, user.user_id);
    Ok(Json(json!({ "message": "Product updated successfully" })))
}

/// Delete a product and its image
pub async fn delete_product(
    State(products): State<Arc<dyn ProductStore>>,
    State(blobs): State<Arc<dyn BlobStore>>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Value>, BackendError> {
    parse_product_id(&id)?;

    let removed = products
        .delete(&id)
        .await
        .map_err(product_not_found_or("delete", &id))?;
    discard_image(blobs.as_ref(), &removed.img).await;

    tracing::info!("Product {} deleted by {}", id, user.user_id);
    Ok(Json(json!({ "message": "Product deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::catalog::blobs::SqliteBlobStore;
    use crate::backend::catalog::products::SqliteProductStore;
    use crate::backend::middleware::AuthenticatedUser;
    use crate::backend::server::config::load_database;
    use async_trait::async_trait;
    use axum::{
        body::Body,
        extract::{FromRequest, Request},
        http::{header::CONTENT_TYPE, StatusCode},
    };
    use sqlx::SqlitePool;

    const MISSING_ID: &str = "9b2f6a4e-3c1d-4e8a-9f7b-2a5c8d1e0f34";

    async fn stores() -> (Arc<dyn ProductStore>, Arc<dyn BlobStore>, SqlitePool) {
        let pool = load_database("sqlite::memory:").await.unwrap();
        (
            Arc::new(SqliteProductStore::new(pool.clone())),
            Arc::new(SqliteBlobStore::new(pool.clone())),
            pool,
        )
    }

    async fn blob_count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blobs")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    fn caller() -> AuthUser {
        AuthUser(AuthenticatedUser {
            user_id: "user-1".to_string(),
        })
    }

    /// Multipart body with `name`, `desc` and optionally an `img` file part
    async fn form(name: &str, image: Option<&[u8]>) -> Result<Multipart, MultipartRejection> {
        let mut body = Vec::new();
        for (field, value) in [("name", name), ("desc", "Desk lamp")] {
            body.extend_from_slice(
                format!("--X\r\nContent-Disposition: form-data; name=\"{field}\"\r\n\r\n{value}\r\n")
                    .as_bytes(),
            );
        }
        if let Some(bytes) = image {
            body.extend_from_slice(
                b"--X\r\nContent-Disposition: form-data; name=\"img\"; filename=\"lamp.png\"\r\nContent-Type: image/png\r\n\r\n",
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(b"--X--\r\n");

        let request = Request::builder()
            .header(CONTENT_TYPE, "multipart/form-data; boundary=X")
            .body(Body::from(body))
            .unwrap();
        Multipart::from_request(request, &()).await
    }

    /// Product store whose writes always fail
    struct FailingProductStore;

    #[async_trait]
    impl ProductStore for FailingProductStore {
        async fn insert(&self, _product: &Product) -> Result<String, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn list(&self) -> Result<Vec<Product>, StoreError> {
            Ok(Vec::new())
        }

        async fn get(&self, id: &str) -> Result<Product, StoreError> {
            let mut product = Product::new("Lamp", "Desk lamp", "old-blob");
            product.id = id.to_string();
            Ok(product)
        }

        async fn update(&self, _id: &str, _update: ProductUpdate) -> Result<(), StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }

        async fn delete(&self, _id: &str) -> Result<Product, StoreError> {
            Err(StoreError::Database(sqlx::Error::PoolClosed))
        }
    }

    #[test]
    fn test_parse_product_id() {
        assert!(parse_product_id(MISSING_ID).is_ok());
        let err = parse_product_id("64f1c2").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid product ID format");
    }

    #[tokio::test]
    async fn test_add_product_accepts_empty_name() {
        let (products, blobs, pool) = stores().await;

        let Json(id) = add_product(
            State(products.clone()),
            State(blobs),
            caller(),
            form("", Some(&[1, 2])).await,
        )
        .await
        .unwrap();

        assert_eq!(products.get(&id).await.unwrap().name, "");
        assert_eq!(blob_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_add_product_without_image() {
        let (products, blobs, _) = stores().await;

        let err = add_product(State(products), State(blobs), caller(), form("Lamp", None).await)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Unable to get file");
    }

    #[tokio::test]
    async fn test_failed_insert_discards_uploaded_image() {
        let (_, blobs, pool) = stores().await;

        let err = add_product(
            State(Arc::new(FailingProductStore) as Arc<dyn ProductStore>),
            State(blobs),
            caller(),
            form("Lamp", Some(&[1, 2])).await,
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(blob_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_edit_missing_product_stores_no_image() {
        let (products, blobs, pool) = stores().await;

        let err = edit_product(
            State(products),
            State(blobs),
            caller(),
            Path(MISSING_ID.to_string()),
            form("Lamp", Some(&[1, 2])).await,
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(blob_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_failed_update_discards_uploaded_image() {
        let (_, blobs, pool) = stores().await;

        let err = edit_product(
            State(Arc::new(FailingProductStore) as Arc<dyn ProductStore>),
            State(blobs),
            caller(),
            Path(MISSING_ID.to_string()),
            form("Lamp", Some(&[1, 2])).await,
        )
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(blob_count(&pool).await, 0);
    }

    #[tokio::test]
    async fn test_edit_replaces_and_removes_old_image() {
        let (products, blobs, pool) = stores().await;
        let old = blobs.upload("lamp.png", vec![1]).await.unwrap();
        let id = products.insert(&Product::new("Lamp", "Desk lamp", old.clone())).await.unwrap();

        edit_product(
            State(products.clone()),
            State(blobs.clone()),
            caller(),
            Path(id.clone()),
            form("Lamp v2", Some(&[7, 7])).await,
        )
        .await
        .unwrap();

        let product = products.get(&id).await.unwrap();
        assert_ne!(product.img, old);
        assert_eq!(blobs.download(&product.img).await.unwrap(), vec![7, 7]);
        assert!(matches!(blobs.download(&old).await, Err(StoreError::NotFound)));
        assert_eq!(blob_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn test_listing_attaches_image_content() {
        let (products, blobs, _) = stores().await;
        let img = blobs.upload("lamp.png", vec![9, 8, 7]).await.unwrap();
        products.insert(&Product::new("Lamp", "Desk lamp", img)).await.unwrap();

        let Json(listed) = get_all_products(State(products), State(blobs)).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].img_content, Some(vec![9, 8, 7]));
    }

    #[tokio::test]
    async fn test_listing_with_missing_image_fails() {
        let (products, blobs, _) = stores().await;
        products.insert(&Product::new("Lamp", "Desk lamp", "gone")).await.unwrap();

        let err = get_all_products(State(products), State(blobs)).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Unable to read file content");
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let (products, blobs, _) = stores().await;
        let err = delete_product(State(products), State(blobs), caller(), Path(MISSING_ID.to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_removes_product_and_image() {
        let (products, blobs, pool) = stores().await;
        let img = blobs.upload("lamp.png", vec![1]).await.unwrap();
        let id = products.insert(&Product::new("Lamp", "Desk lamp", img)).await.unwrap();

        let Json(body) = delete_product(State(products.clone()), State(blobs), caller(), Path(id))
            .await
            .unwrap();
        assert_eq!(body["message"], "Product deleted successfully");
        assert!(products.list().await.unwrap().is_empty());
        assert_eq!(blob_count(&pool).await, 0);
    }
}

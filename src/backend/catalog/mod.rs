//! Product Catalog Module
//!
//! Product CRUD over a product store and an image blob store.
//!
//! ```text
//! catalog/
//! ├── mod.rs        - Module exports
//! ├── products.rs   - ProductStore and its SQLite implementation
//! ├── blobs.rs      - BlobStore for product images
//! └── handlers.rs   - Multipart HTTP handlers
//! ```

pub mod blobs;
pub mod handlers;
pub mod products;

pub use blobs::{BlobStore, SqliteBlobStore};
pub use handlers::{add_product, delete_product, edit_product, get_all_products, MAX_UPLOAD_BYTES};
pub use products::{ProductStore, ProductUpdate, SqliteProductStore};

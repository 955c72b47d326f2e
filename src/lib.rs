//! Storefront - Main Library
//!
//! A product catalog HTTP service with token-authenticated write access.
//!
//! # Module Structure
//!
//! - **`shared`** - Wire types shared by handlers and clients
//!   - `Product` and its base64 image encoding
//!   - Shared error types
//!
//! - **`backend`** - Axum server
//!   - Signup, login and logout with bcrypt password hashes
//!   - HS256 session tokens and the login-required middleware
//!   - Product CRUD with image blobs
//!   - SQLite persistence via sqlx
//!
//! # Usage
//!
//! ```rust,no_run
//! use storefront::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(("0.0.0.0", config.port)).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for rejected product forms
//! - `backend::error::BackendError` for everything that becomes an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;

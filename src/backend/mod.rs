//! Backend Module
//!
//! Server-side code: the Axum router, authentication, the product catalog
//! and SQLite persistence.
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Configuration, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Credentials, passwords, tokens and handlers
//! ├── catalog/        - Product and image stores and handlers
//! ├── middleware/     - Login-required middleware and extractor
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! `AppState` holds the token service and the stores behind `Arc`s. Handlers
//! pull out only what they use through `FromRef`.
//!
//! # Error Handling
//!
//! Handlers return `Result<_, BackendError>`; `BackendError` renders as a
//! JSON body `{"error": ..., "status": ...}` with the matching status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Product catalog
pub mod catalog;

pub use error::BackendError;
pub use server::create_app;

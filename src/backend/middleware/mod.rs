//! Middleware Module
//!
//! HTTP middleware applied to routes before they reach handlers.
//!
//! - **`auth`** - `require_login`, which gates routes on a valid session token
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use storefront::backend::middleware::require_login;
//!
//! let protected = Router::new()
//!     .route("/api/me", get(get_me))
//!     .route_layer(from_fn_with_state(app_state.clone(), require_login));
//! ```

pub mod auth;

pub use auth::{require_login, AuthUser, AuthenticatedUser};

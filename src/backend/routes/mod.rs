//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - Public and login-required routes
//! ```
//!
//! # Routes
//!
//! ## Public
//!
//! - `POST /signup` - User registration
//! - `POST /login` - Returns a session token
//! - `GET /logout` - Clears the session cookie
//! - `GET /api/getAllProducts` - Product listing with images
//!
//! ## Login required
//!
//! - `GET /api/me` - Caller identity
//! - `POST /api/addProduct` - Create a product
//! - `PUT /api/editProduct/{id}` - Update a product
//! - `DELETE /api/deleteProduct/{id}` - Delete a product

/// Main router creation
pub mod router;

/// API route tables
pub mod api_routes;

pub use router::create_router;

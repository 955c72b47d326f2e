//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Advisory logout handler
//! └── me.rs       - Verified identity handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - User authentication
//! - **`logout`** - GET /logout - Clear client cookie
//! - **`get_me`** - GET /api/me - Identity from the session token

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

/// Get current user handler
pub mod me;

pub use types::{CredentialsRequest, LoginRequest, MeResponse, SignupRequest, TokenResponse};

pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;

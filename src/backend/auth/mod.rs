//! Authentication Module
//!
//! This module handles user registration, login and session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - Credential record and CredentialStore
//! ├── password.rs     - bcrypt hashing on the blocking pool
//! ├── sessions.rs     - TokenService (JWT issuance and verification)
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: email and password → password hashed → credential stored → 201
//! 2. **Login**: email and password → hash compared → session token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` → token verified by
//!    the middleware → identity available to the handler
//! 4. **Logout**: client cookie cleared; the token itself stays valid until expiry
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs with an absolute 24 hour lifetime
//! - Invalid credentials and invalid tokens return 401 with generic messages

/// Credential record and store
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, logout, signup};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{CredentialStore, NewUser, SqliteCredentialStore, User};

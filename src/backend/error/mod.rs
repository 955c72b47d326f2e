//! Backend Error Module
//!
//! Error types returned by HTTP handlers and middleware, and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! ├── conversion.rs - IntoResponse implementation
//! └── store.rs      - Store collaborator errors
//! ```
//!
//! # Propagation Policy
//!
//! Handlers log the underlying cause (store error, bcrypt error, token
//! error) at the point of failure and return a `BackendError` whose message
//! is safe to show to clients. Authentication failures always collapse to a
//! generic message.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

/// Store collaborator errors
pub mod store;

pub use store::StoreError;
pub use types::BackendError;

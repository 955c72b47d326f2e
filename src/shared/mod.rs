//! Shared Module
//!
//! Types that are independent of the HTTP server: the product record that
//! clients send and receive, and the validation errors raised on it.

/// Product data structure
pub mod product;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use product::Product;

//! Shared Error Types
//!
//! Problems found in a submitted product form before anything is stored.
//! These are independent of HTTP; the backend maps every variant to 400.
use thiserror::Error;

/// Product form failures
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SharedError {
    /// A new product was submitted without its `img` file part
    #[error("Unable to get file")]
    MissingImage,
}

impl SharedError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingImage => "img",
        }
    }
}

//! Error outcomes of shortlink store operations.

use thiserror::Error;

/// Failure of a single store operation.
///
/// Store operations never retry; every failure surfaces immediately as one of
/// these variants and the API layer maps it to a status code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No document matches the requested short key.
    #[error("shortlink not found")]
    NotFound,

    /// The write would give two shortlinks the same short key.
    #[error("shortlink already exists")]
    Duplicate,

    /// Any other store failure, including connectivity problems and timeouts.
    #[error("{0}")]
    Unexpected(String),
}

impl StoreError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}

//! Storage error types.
//!
//! Used by store adapters, the repository, and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
    #[error("Invalid article id: '{0}'")]
    InvalidId(String),
}

impl From<mongodb::error::Error> for StorageError {
    fn from(error: mongodb::error::Error) -> Self {
        StorageError::Database(error.to_string())
    }
}

impl From<mongodb::bson::ser::Error> for StorageError {
    fn from(error: mongodb::bson::ser::Error) -> Self {
        StorageError::InvalidDocument(error.to_string())
    }
}

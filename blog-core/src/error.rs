//! Core error type, used during bootstrap (logging setup, filesystem).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Tracing error: {0}")]
    Tracing(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;

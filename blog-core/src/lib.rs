//! # blog-core
//!
//! Core types for the article service: the [`Article`] wire record, the validated
//! [`ArticleInput`] request schema, confirmation payloads, error types, and tracing
//! initialization. Store- and transport-agnostic; used by storage and blog-api.

pub mod error;
pub mod logger;
pub mod types;
pub mod validation;

pub use error::{CoreError, Result};
pub use logger::init_tracing;
pub use types::{Article, ArticleInput, Confirmation, CreatedArticle};
pub use validation::{ValidationError, ValidationErrors};

//! Storage crate: article persistence behind a document-store seam.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ArticleDocument (store-native shape)
//! - [`store`] – ArticleStore trait
//! - [`mongo_store`] – MongoArticleStore (MongoDB, `blog_db.articles`)
//! - [`memory_store`] – InMemoryArticleStore
//! - [`article_repo`] – ArticleRepository and FetchOutcome

mod article_repo;
mod error;
mod memory_store;
mod models;
mod mongo_store;
mod store;

#[cfg(test)]
mod article_repo_test;

pub use article_repo::{parse_article_id, ArticleRepository, FetchOutcome, LIST_LIMIT};
pub use error::StorageError;
pub use memory_store::InMemoryArticleStore;
pub use models::ArticleDocument;
pub use mongo_store::{MongoArticleStore, COLLECTION_NAME, DATABASE_NAME};
pub use store::ArticleStore;

pub use mongodb::bson::oid::ObjectId;

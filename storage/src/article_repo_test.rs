//! Unit tests for ArticleRepository against failing and in-memory stores.
//!
//! Covers id parsing and how store failures surface per operation.

use std::sync::Arc;

use async_trait::async_trait;
use blog_core::ArticleInput;
use mongodb::bson::oid::ObjectId;

use crate::article_repo::{parse_article_id, ArticleRepository, FetchOutcome};
use crate::error::StorageError;
use crate::memory_store::InMemoryArticleStore;
use crate::models::ArticleDocument;
use crate::store::ArticleStore;

/// Store whose every operation fails, as when the server is unreachable.
struct UnreachableStore;

fn unreachable() -> StorageError {
    StorageError::Database("server selection timeout".to_string())
}

#[async_trait]
impl ArticleStore for UnreachableStore {
    async fn find_all(&self, _limit: usize) -> Result<Vec<ArticleDocument>, StorageError> {
        Err(unreachable())
    }
    async fn find_by_id(&self, _id: ObjectId) -> Result<Option<ArticleDocument>, StorageError> {
        Err(unreachable())
    }
    async fn insert(&self, _document: &ArticleDocument) -> Result<ObjectId, StorageError> {
        Err(unreachable())
    }
    async fn set_fields(
        &self,
        _id: ObjectId,
        _document: &ArticleDocument,
    ) -> Result<u64, StorageError> {
        Err(unreachable())
    }
    async fn delete_by_id(&self, _id: ObjectId) -> Result<u64, StorageError> {
        Err(unreachable())
    }
}

#[test]
fn test_parse_article_id() {
    assert!(parse_article_id("000000000000000000000000").is_some());
    assert!(parse_article_id("65a1b2c3d4e5f60718293a4b").is_some());
    assert!(parse_article_id("not-a-valid-id").is_none());
    assert!(parse_article_id("65a1b2c3d4e5f60718293a4").is_none());
    assert!(parse_article_id("").is_none());
}

#[tokio::test]
async fn test_get_article_store_failure_is_not_not_found() {
    let repo = ArticleRepository::new(Arc::new(UnreachableStore));
    let outcome = repo.get_article("000000000000000000000000").await;
    assert!(matches!(outcome, FetchOutcome::StoreError(StorageError::Database(_))));
}

#[tokio::test]
async fn test_get_article_malformed_id_never_reaches_store() {
    let repo = ArticleRepository::new(Arc::new(UnreachableStore));
    assert!(matches!(
        repo.get_article("not-a-valid-id").await,
        FetchOutcome::NotFound
    ));
}

#[tokio::test]
async fn test_list_and_writes_propagate_store_failure() {
    let repo = ArticleRepository::new(Arc::new(UnreachableStore));
    let input = ArticleInput::new("A", "B");
    let id = "000000000000000000000000";

    assert!(repo.list_articles().await.is_err());
    assert!(repo.create_article(&input).await.is_err());
    assert!(repo.update_article(id, &input).await.is_err());
    assert!(repo.delete_article(id).await.is_err());
}

#[tokio::test]
async fn test_malformed_id_writes_fail_before_store_access() {
    let repo = ArticleRepository::new(Arc::new(UnreachableStore));
    let input = ArticleInput::new("A", "B");

    assert!(matches!(
        repo.update_article("nope", &input).await,
        Err(StorageError::InvalidId(id)) if id == "nope"
    ));
    assert!(matches!(
        repo.delete_article("nope").await,
        Err(StorageError::InvalidId(_))
    ));
}

#[tokio::test]
async fn test_document_without_id_is_a_store_error() {
    let store = InMemoryArticleStore::new();
    let repo = ArticleRepository::new(Arc::new(store.clone()));
    repo.create_article(&ArticleInput::new("A", "B")).await.unwrap();
    assert_eq!(store.len().await, 1);

    let broken = ArticleDocument::from_input(&ArticleInput::new("A", "B"));
    assert!(matches!(
        broken.into_article(),
        Err(StorageError::InvalidDocument(_))
    ));
}

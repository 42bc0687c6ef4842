//! # In-memory article store
//!
//! Insertion-ordered implementation of [`ArticleStore`] for tests and local development.
//! Data is lost on restart. The store uses `Arc<RwLock<>>`, so clones share the same documents.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::StorageError;
use crate::models::ArticleDocument;
use crate::store::ArticleStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleStore {
    documents: Arc<RwLock<Vec<ArticleDocument>>>,
}

impl InMemoryArticleStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored documents.
    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl ArticleStore for InMemoryArticleStore {
    async fn find_all(&self, limit: usize) -> Result<Vec<ArticleDocument>, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().take(limit).cloned().collect())
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ArticleDocument>, StorageError> {
        let documents = self.documents.read().await;
        Ok(documents.iter().find(|d| d.id == Some(id)).cloned())
    }

    async fn insert(&self, document: &ArticleDocument) -> Result<ObjectId, StorageError> {
        let id = ObjectId::new();
        let mut stored = document.clone();
        stored.id = Some(id);
        self.documents.write().await.push(stored);
        debug!(id = %id, "In-memory insert");
        Ok(id)
    }

    async fn set_fields(
        &self,
        id: ObjectId,
        document: &ArticleDocument,
    ) -> Result<u64, StorageError> {
        let mut documents = self.documents.write().await;
        match documents.iter_mut().find(|d| d.id == Some(id)) {
            Some(existing) => {
                *existing = ArticleDocument {
                    id: Some(id),
                    ..document.clone()
                };
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StorageError> {
        let mut documents = self.documents.write().await;
        let before = documents.len();
        documents.retain(|d| d.id != Some(id));
        Ok((before - documents.len()) as u64)
    }
}

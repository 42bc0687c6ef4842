use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::StorageError;
use crate::models::ArticleDocument;

/// Document-store operations the repository needs. Implementations own their connection/handle.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Returns up to `limit` documents in the store's natural order, with no filter.
    async fn find_all(&self, limit: usize) -> Result<Vec<ArticleDocument>, StorageError>;

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ArticleDocument>, StorageError>;

    /// Inserts the document (its `id` is ignored) and returns the assigned id.
    async fn insert(&self, document: &ArticleDocument) -> Result<ObjectId, StorageError>;

    /// Overwrites every non-id field of the matching document. Returns the matched count.
    async fn set_fields(
        &self,
        id: ObjectId,
        document: &ArticleDocument,
    ) -> Result<u64, StorageError>;

    /// Removes the matching document. Returns the deleted count.
    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StorageError>;
}

//! MongoDB store adapter: one client, one database, one collection.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};
use tracing::{debug, info};

use crate::error::StorageError;
use crate::models::ArticleDocument;
use crate::store::ArticleStore;

pub const DATABASE_NAME: &str = "blog_db";
pub const COLLECTION_NAME: &str = "articles";

/// Holds the `blog_db.articles` collection handle. Clones share the underlying client and its pool.
#[derive(Clone)]
pub struct MongoArticleStore {
    collection: Collection<ArticleDocument>,
}

impl MongoArticleStore {
    /// Creates a client from the connection string and selects the article collection.
    ///
    /// The driver connects lazily; an unreachable server surfaces on the first operation.
    pub async fn connect(uri: &str) -> Result<Self, StorageError> {
        info!(
            database = DATABASE_NAME,
            collection = COLLECTION_NAME,
            "Initializing MongoDB client"
        );
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::from_client(&client))
    }

    pub fn from_client(client: &Client) -> Self {
        let collection = client
            .database(DATABASE_NAME)
            .collection::<ArticleDocument>(COLLECTION_NAME);
        Self { collection }
    }
}

/// `$set` body for a full overwrite of every field except `_id`.
fn set_document(document: &ArticleDocument) -> Result<Document, StorageError> {
    let mut fields = mongodb::bson::to_document(document)?;
    fields.remove("_id");
    Ok(doc! { "$set": fields })
}

#[async_trait]
impl ArticleStore for MongoArticleStore {
    async fn find_all(&self, limit: usize) -> Result<Vec<ArticleDocument>, StorageError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let cursor = self.collection.find(doc! {}).limit(limit).await?;
        let documents: Vec<ArticleDocument> = cursor.try_collect().await?;
        debug!(count = documents.len(), "Fetched article documents");
        Ok(documents)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<ArticleDocument>, StorageError> {
        Ok(self.collection.find_one(doc! { "_id": id }).await?)
    }

    async fn insert(&self, document: &ArticleDocument) -> Result<ObjectId, StorageError> {
        let mut document = document.clone();
        document.id = None;
        let result = self.collection.insert_one(&document).await?;
        result.inserted_id.as_object_id().ok_or_else(|| {
            StorageError::InvalidDocument(format!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn set_fields(
        &self,
        id: ObjectId,
        document: &ArticleDocument,
    ) -> Result<u64, StorageError> {
        let update = set_document(document)?;
        let result = self
            .collection
            .update_one(doc! { "_id": id }, update)
            .await?;
        Ok(result.matched_count)
    }

    async fn delete_by_id(&self, id: ObjectId) -> Result<u64, StorageError> {
        let result = self.collection.delete_one(doc! { "_id": id }).await?;
        Ok(result.deleted_count)
    }
}

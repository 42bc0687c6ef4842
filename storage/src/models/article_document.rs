//! Article document model for persistence.
//!
//! Maps to documents in the `articles` collection; `_id` is the store-native ObjectId.
//! Decoding is lenient: documents written outside this service may lack any field, and a
//! missing `title` or `content` decodes as an empty string instead of failing a whole listing.

use blog_core::{Article, ArticleInput};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::error::StorageError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    /// Absent until the store assigns it on insert.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub publish_date: Option<String>,
}

impl ArticleDocument {
    /// Builds a document without an id from validated input.
    pub fn from_input(input: &ArticleInput) -> Self {
        Self {
            id: None,
            title: input.title.clone(),
            content: input.content.clone(),
            tags: input.tags.clone(),
            publish_date: input.publish_date.clone(),
        }
    }

    /// Converts to the wire record, turning the ObjectId into its hex string.
    pub fn into_article(self) -> Result<Article, StorageError> {
        let id = self.id.ok_or_else(|| {
            StorageError::InvalidDocument(format!("article '{}' has no _id", self.title))
        })?;
        Ok(Article {
            id: id.to_hex(),
            title: self.title,
            content: self.content,
            tags: self.tags,
            publish_date: self.publish_date,
        })
    }
}

//! Article repository: the five article operations over an [`ArticleStore`].
//!
//! Translates between the wire record ([`Article`], string id) and the store shape
//! ([`ArticleDocument`], ObjectId). Writes to a well-formed but unknown id still confirm; a
//! malformed id on a write is a [`StorageError::InvalidId`].

use blog_core::{Article, ArticleInput, Confirmation};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

use crate::error::StorageError;
use crate::models::ArticleDocument;
use crate::store::ArticleStore;

/// Maximum number of articles returned by [`ArticleRepository::list_articles`].
pub const LIST_LIMIT: usize = 100;

/// Result of a single-article fetch. Keeps "does not exist" apart from "store failed".
#[derive(Debug)]
pub enum FetchOutcome {
    Found(Article),
    /// Malformed id, or no document with that id.
    NotFound,
    StoreError(StorageError),
}

/// Parses the external string form into an ObjectId. `None` for anything that is not 24 hex chars.
pub fn parse_article_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[derive(Clone)]
pub struct ArticleRepository {
    store: Arc<dyn ArticleStore>,
}

impl ArticleRepository {
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn list_articles(&self) -> Result<Vec<Article>, StorageError> {
        let documents = self.store.find_all(LIST_LIMIT).await.map_err(|e| {
            error!(error = %e, "Error fetching articles");
            e
        })?;
        let articles = documents
            .into_iter()
            .map(ArticleDocument::into_article)
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = articles.len(), "Retrieved articles");
        Ok(articles)
    }

    #[instrument(skip(self))]
    pub async fn get_article(&self, id: &str) -> FetchOutcome {
        let Some(object_id) = parse_article_id(id) else {
            debug!(article_id = %id, "Malformed article id");
            return FetchOutcome::NotFound;
        };

        match self.store.find_by_id(object_id).await {
            Ok(Some(document)) => match document.into_article() {
                Ok(article) => FetchOutcome::Found(article),
                Err(e) => FetchOutcome::StoreError(e),
            },
            Ok(None) => {
                debug!(article_id = %id, "Article not found");
                FetchOutcome::NotFound
            }
            Err(e) => {
                error!(article_id = %id, error = %e, "Error fetching article");
                FetchOutcome::StoreError(e)
            }
        }
    }

    #[instrument(skip(self, input), fields(title = %input.title))]
    pub async fn create_article(
        &self,
        input: &ArticleInput,
    ) -> Result<(String, Confirmation), StorageError> {
        let document = ArticleDocument::from_input(input);
        let id = self.store.insert(&document).await?;
        info!(article_id = %id, "Article created");
        Ok((id.to_hex(), Confirmation::POSTED))
    }

    #[instrument(skip(self, input))]
    pub async fn update_article(
        &self,
        id: &str,
        input: &ArticleInput,
    ) -> Result<Confirmation, StorageError> {
        let Some(object_id) = parse_article_id(id) else {
            warn!(article_id = %id, "Update rejected: malformed article id");
            return Err(StorageError::InvalidId(id.to_string()));
        };
        let matched = self
            .store
            .set_fields(object_id, &ArticleDocument::from_input(input))
            .await?;
        info!(article_id = %id, matched, "Article update applied");
        Ok(Confirmation::UPDATED)
    }

    #[instrument(skip(self))]
    pub async fn delete_article(&self, id: &str) -> Result<Confirmation, StorageError> {
        let Some(object_id) = parse_article_id(id) else {
            warn!(article_id = %id, "Delete rejected: malformed article id");
            return Err(StorageError::InvalidId(id.to_string()));
        };
        let deleted = self.store.delete_by_id(object_id).await?;
        info!(article_id = %id, deleted, "Article delete applied");
        Ok(Confirmation::DELETED)
    }
}

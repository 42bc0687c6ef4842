use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use blog_core::{ArticleInput, ValidationError, ValidationErrors};
use tracing::warn;

use crate::error::ApiError;

/// JSON body validated into an [`ArticleInput`] before the handler runs.
/// Rejects with a 422 listing every offending field; the repository is never reached.
#[derive(Debug)]
pub struct ValidatedArticle(pub ArticleInput);

impl<S> FromRequest<S> for ValidatedArticle
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            ValidationErrors::single(ValidationError::unreadable_body(&rejection.body_text()))
        })?;

        let input = ArticleInput::from_slice(&body).map_err(|errors| {
            warn!(errors = %errors, "Rejected article body");
            errors
        })?;

        Ok(Self(input))
    }
}

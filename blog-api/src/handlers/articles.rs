use axum::extract::{Path, State};
use axum::Json;
use blog_core::{Article, Confirmation, CreatedArticle};
use storage::FetchOutcome;

use crate::error::ApiError;
use crate::extract::ValidatedArticle;
use crate::state::AppState;

/// `GET /articles`: up to 100 articles in store order.
pub async fn list_articles(State(state): State<AppState>) -> Result<Json<Vec<Article>>, ApiError> {
    let articles = state.repository.list_articles().await?;
    Ok(Json(articles))
}

/// `GET /articles/{id}`: 404 for unknown or malformed ids, 500 when the store fails.
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Article>, ApiError> {
    match state.repository.get_article(&id).await {
        FetchOutcome::Found(article) => Ok(Json(article)),
        FetchOutcome::NotFound => Err(ApiError::ArticleNotFound),
        FetchOutcome::StoreError(e) => Err(ApiError::Storage(e)),
    }
}

pub async fn create_article(
    State(state): State<AppState>,
    ValidatedArticle(input): ValidatedArticle,
) -> Result<Json<CreatedArticle>, ApiError> {
    let (id, _confirmation) = state.repository.create_article(&input).await?;
    Ok(Json(CreatedArticle { id }))
}

/// `PUT /articles/{id}`: confirms even when no article has that id. Malformed ids are a 500.
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedArticle(input): ValidatedArticle,
) -> Result<Json<Confirmation>, ApiError> {
    let confirmation = state.repository.update_article(&id, &input).await?;
    Ok(Json(confirmation))
}

/// `DELETE /articles/{id}`: confirms even when nothing was deleted. Malformed ids are a 500.
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Confirmation>, ApiError> {
    let confirmation = state.repository.delete_article(&id).await?;
    Ok(Json(confirmation))
}

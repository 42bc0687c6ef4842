use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use middleware::{cors_layer, error_boundary_layer, log_requests};

use crate::handlers::{
    create_article, delete_article, get_article, list_articles, method_not_allowed,
    route_not_found, update_article,
};
use crate::state::AppState;

/// Builds the article routes wrapped in the error boundary, request logging and, when an origin
/// is given, CORS. Layers run outside-in: CORS, logging, panic boundary, routes.
pub fn build_router(state: AppState, cors_origin: Option<HeaderValue>) -> Router {
    let router = Router::new()
        .route("/articles", get(list_articles).post(create_article))
        .route(
            "/articles/{id}",
            get(get_article).put(update_article).delete(delete_article),
        )
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(error_boundary_layer())
        .layer(axum::middleware::from_fn(log_requests));

    match cors_origin {
        Some(origin) => router.layer(cors_layer(origin)),
        None => router,
    }
}

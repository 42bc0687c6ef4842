use anyhow::Result;
use axum::Router;
use blog_core::init_tracing;
use std::sync::Arc;
use storage::{ArticleRepository, ArticleStore, MongoArticleStore};
use tokio::net::TcpListener;
use tracing::{info, instrument};

use crate::config::ApiConfig;
use crate::router::build_router;
use crate::state::AppState;

/// Main entry: validate config, init logging, connect the store, then serve until the process exits.
pub async fn run_server(config: ApiConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)?;

    info!(
        bind_addr = %config.bind_addr,
        cors_allowed_origin = ?config.cors_allowed_origin,
        "Initializing article service"
    );

    let store = MongoArticleStore::connect(&config.mongo_uri).await?;
    run_server_with_store(config, Arc::new(store)).await
}

/// Serves with a pre-built store. Does not initialize tracing.
#[instrument(skip(config, store), fields(bind_addr = %config.bind_addr))]
pub async fn run_server_with_store(config: ApiConfig, store: Arc<dyn ArticleStore>) -> Result<()> {
    let app = build_app(&config, store)?;
    let listener = TcpListener::bind(config.socket_addr()?).await?;
    info!(addr = %listener.local_addr()?, "Article service listening");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Builds repository, state and router without binding a socket. Used by tests.
pub fn build_app(config: &ApiConfig, store: Arc<dyn ArticleStore>) -> Result<Router> {
    let repository = ArticleRepository::new(store);
    let state = AppState::new(repository);
    Ok(build_router(state, config.cors_origin()?))
}

//! # Article API
//!
//! HTTP service over a single "article" resource. Wires storage (repository + store adapter),
//! middleware (error boundary, request logging, CORS) and the axum router. Loads config from env
//! and serves until the process is killed.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod runner;
pub mod state;

pub use cli::{load_config, Cli, Commands};
pub use config::ApiConfig;
pub use error::ApiError;
pub use extract::ValidatedArticle;
pub use router::build_router;
pub use runner::{build_app, run_server, run_server_with_store};
pub use state::AppState;

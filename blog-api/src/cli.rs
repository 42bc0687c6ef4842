//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::ApiConfig;

#[derive(Parser)]
#[command(name = "blog-api")]
#[command(about = "Article CRUD HTTP service", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the article API (config from env; --bind overrides BIND_ADDR).
    Run {
        #[arg(short, long)]
        bind: Option<String>,
    },
}

/// Load ApiConfig from environment. If `bind` is provided it overrides BIND_ADDR.
pub fn load_config(bind: Option<String>) -> Result<ApiConfig> {
    ApiConfig::load(bind)
}

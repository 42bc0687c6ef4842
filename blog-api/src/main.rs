//! Binary for the article API. Config from env (and `.env`); `--bind` overrides BIND_ADDR.

use anyhow::Result;
use blog_api::{load_config, run_server, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { bind } => {
            let config = load_config(bind)?;
            run_server(config).await
        }
    }
}

use anyhow::Result;
use clap::Parser;
use culturefy_core::{RecommendationClient, RecommendationView};
use tracing::info;

mod app;
mod cli;
mod config;
mod logging;
mod output;

use crate::cli::Args;
use crate::config::resolve_config;
use crate::logging::init_logging;

/// Main function - mounts the recommendation view once and prints the result
#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables before clap reads CULTUREFY_ENDPOINT
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let config = resolve_config(&args)?;

    init_logging(config.log_level.as_deref().unwrap_or("warn"));
    info!("Using recommendation endpoint {}", config.endpoint());

    let mut view = RecommendationView::new(RecommendationClient::new(config));
    if !app::run_view(&mut view).await {
        std::process::exit(1);
    }

    Ok(())
}

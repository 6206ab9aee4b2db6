use clap::Parser;
use std::path::PathBuf;

/// Terminal viewer for Culturefy recommendations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the config file (defaults to ~/.config/culturefy/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the recommendation endpoint
    #[arg(long, env = "CULTUREFY_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Enable verbose output
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

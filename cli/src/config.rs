use anyhow::{Context, Result};
use culturefy_core::config::{RecommendationConfig, get_default_config_file};
use std::path::PathBuf;

use crate::cli::Args;

pub const APP_NAME: &str = "culturefy";

/// Loads the config file and layers command-line overrides on top
pub fn resolve_config(args: &Args) -> Result<RecommendationConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => default_config_path(),
    };

    let file_config = RecommendationConfig::load_from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    let mut overrides = RecommendationConfig::empty();
    overrides.endpoint = args.endpoint.clone();
    if args.verbose {
        overrides.log_level = Some("debug".to_string());
    }

    Ok(file_config.merge(&overrides))
}

// Falls back to a relative path when the home directory is unknown
fn default_config_path() -> PathBuf {
    get_default_config_file(APP_NAME).unwrap_or_else(|_| PathBuf::from("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use culturefy_core::config::DEFAULT_ENDPOINT;

    fn args(config: Option<PathBuf>, endpoint: Option<&str>, verbose: bool) -> Args {
        Args {
            config,
            endpoint: endpoint.map(str::to_string),
            verbose,
        }
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let path = std::env::temp_dir().join("culturefy-cli-test-missing.toml");
        let config = resolve_config(&args(Some(path), None, false)).unwrap();
        assert_eq!(config.endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.log_level.as_deref(), Some("warn"));
    }

    #[test]
    fn test_flags_override_file() {
        let path = std::env::temp_dir().join("culturefy-cli-test-missing.toml");
        let config =
            resolve_config(&args(Some(path), Some("http://127.0.0.1:9/rec"), true)).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:9/rec");
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }
}

use crate::errors::{RecommendationError, RecommendationResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENDPOINT: &str =
    "https://robifastculturefy.azurewebsites.net/api/v1/recommendation/recommendations";
pub const DEFAULT_USER_ROLE: &str = "Admin";
pub const DEFAULT_USER_ID: &str = "66b6b257d802e08b54bee8f5";
pub const DEFAULT_BUSINESS_ID: &str = "66b6b16eeb02b55711d8052c";
pub const DEFAULT_RECOMMENDATION_TYPE: &str = "brandCultureStrategy";

/// Configuration struct for the recommendation viewer.
///
/// Only the endpoint and log level are configurable. The request identifiers
/// are fixed for the build and unknown keys in the file are ignored.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RecommendationConfig {
    pub endpoint: Option<String>,
    pub log_level: Option<String>,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            endpoint: Some(DEFAULT_ENDPOINT.to_string()),
            log_level: Some("warn".to_string()),
        }
    }
}

impl RecommendationConfig {
    /// A config with every key unset, useful as a merge overlay
    pub fn empty() -> Self {
        Self {
            endpoint: None,
            log_level: None,
        }
    }

    /// Loads configuration from a file if it exists, otherwise returns the default config.
    ///
    /// Keys missing from the file keep their default values.
    pub fn load_from_file(path: &Path) -> RecommendationResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            RecommendationError::ConfigError(format!("Failed to read config file: {}", e))
        })?;

        let file_config: Self = toml::from_str(&content).map_err(|e| {
            RecommendationError::ConfigError(format!("Failed to parse config file: {}", e))
        })?;

        Ok(Self::default().merge(&file_config))
    }

    /// Merges this config with another config, preferring values from the other config if present
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            endpoint: other.endpoint.clone().or_else(|| self.endpoint.clone()),
            log_level: other.log_level.clone().or_else(|| self.log_level.clone()),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }
}

/// Helper function to get default config directory
pub fn get_default_config_dir(app_name: &str) -> RecommendationResult<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        RecommendationError::ConfigError("Could not determine home directory".to_string())
    })?;

    Ok(home_dir.join(".config").join(app_name))
}

/// Helper function to get default config file path
pub fn get_default_config_file(app_name: &str) -> RecommendationResult<PathBuf> {
    let config_dir = get_default_config_dir(app_name)?;
    Ok(config_dir.join("config.toml"))
}

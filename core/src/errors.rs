use thiserror::Error;

/// Message shown for any non-success HTTP status
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch data";

/// Recommendation API errors
#[derive(Error, Debug)]
pub enum RecommendationError {
    #[error("{}", FETCH_FAILED_MESSAGE)]
    HttpError { status_code: u16 },

    #[error("{0}")]
    ParsingError(#[from] serde_json::Error),

    #[error("{0}")]
    TransportError(String),

    #[error("Configuration Error: {0}")]
    ConfigError(String),
}

impl RecommendationError {
    /// Status code of the failed exchange, if the server answered at all
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RecommendationError::HttpError { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RecommendationError {
    fn from(err: reqwest::Error) -> Self {
        RecommendationError::TransportError(err.to_string())
    }
}

/// Result type for recommendation operations
pub type RecommendationResult<T> = Result<T, RecommendationError>;

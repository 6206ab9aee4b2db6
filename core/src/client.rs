use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::{
    RecommendationConfig, DEFAULT_BUSINESS_ID, DEFAULT_RECOMMENDATION_TYPE, DEFAULT_USER_ID,
    DEFAULT_USER_ROLE,
};
use crate::errors::{RecommendationError, RecommendationResult};
use crate::types::*;

/// A completed HTTP exchange: the status line and the raw body
#[derive(Debug, Clone, PartialEq)]
pub struct HttpExchange {
    pub status: u16,
    pub body: String,
}

impl HttpExchange {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait defining how a request reaches the recommendation API
#[async_trait]
pub trait RecommendationTransport: Send + Sync + Debug {
    /// POST a JSON body to `url` and return the exchange once it completes
    async fn post_json(
        &self,
        url: &str,
        request: &RecommendationRequest,
    ) -> RecommendationResult<HttpExchange>;
}

/// Type alias for Arc-wrapped transport trait objects
pub type TransportRef = Arc<dyn RecommendationTransport>;

/// Transport backed by a reqwest client. No timeout and no retries.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Wraps an already configured reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecommendationTransport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        request: &RecommendationRequest,
    ) -> RecommendationResult<HttpExchange> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(HttpExchange { status, body })
    }
}

/// Turns a completed exchange into a [`Recommendation`].
///
/// A failure status short-circuits before the body is looked at.
pub fn handle_exchange(exchange: &HttpExchange) -> RecommendationResult<Recommendation> {
    if !exchange.is_success() {
        warn!("Recommendation API answered with status {}", exchange.status);
        return Err(RecommendationError::HttpError {
            status_code: exchange.status,
        });
    }

    let response: RecommendationResponse = serde_json::from_str(&exchange.body)?;
    Recommendation::from_response(response)
}

/// Client for the recommendation API
#[derive(Debug, Clone)]
pub struct RecommendationClient {
    transport: TransportRef,
    config: RecommendationConfig,
    profile: CompanyProfile,
}

impl RecommendationClient {
    /// Create a client that talks HTTP
    pub fn new(config: RecommendationConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    /// Create a client over any transport
    pub fn with_transport(config: RecommendationConfig, transport: TransportRef) -> Self {
        Self {
            transport,
            config,
            profile: CompanyProfile::development(),
        }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Builds the fixed request body for this build. Config never changes it.
    pub fn build_request(&self) -> RecommendationResult<RecommendationRequest> {
        RecommendationRequest::new(
            DEFAULT_USER_ROLE,
            DEFAULT_USER_ID,
            DEFAULT_BUSINESS_ID,
            DEFAULT_RECOMMENDATION_TYPE,
            &self.profile,
        )
    }

    /// Issues one request and handles the answer
    #[instrument(skip(self), fields(endpoint = %self.config.endpoint()))]
    pub async fn fetch_recommendation(&self) -> RecommendationResult<Recommendation> {
        let request = self.build_request()?;
        debug!(
            "Requesting {} recommendations for business {}",
            request.recommendation_type, request.business_id
        );

        let exchange = self
            .transport
            .post_json(self.config.endpoint(), &request)
            .await?;
        debug!(
            "Received status {} with {} body bytes",
            exchange.status,
            exchange.body.len()
        );

        handle_exchange(&exchange)
    }
}

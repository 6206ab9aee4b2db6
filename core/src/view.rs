use tracing::{error, info};

use crate::client::RecommendationClient;
use crate::errors::RecommendationResult;
use crate::types::Recommendation;

/// What the view currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Error(String),
    Loaded(Recommendation),
}

impl ViewState {
    /// Collapses a fetch outcome into the state it settles to
    pub fn settle(outcome: RecommendationResult<Recommendation>) -> Self {
        match outcome {
            Ok(recommendation) => ViewState::Loaded(recommendation),
            Err(e) => ViewState::Error(e.to_string()),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Loading is the only non-terminal state
    pub fn is_settled(&self) -> bool {
        !self.is_loading()
    }
}

/// The recommendation view.
///
/// Starts in [`ViewState::Loading`] and fetches exactly once, on the first
/// [`mount`](Self::mount). Later mounts reuse the settled state.
#[derive(Debug)]
pub struct RecommendationView {
    client: RecommendationClient,
    state: ViewState,
    mounted: bool,
}

impl RecommendationView {
    pub fn new(client: RecommendationClient) -> Self {
        Self {
            client,
            state: ViewState::Loading,
            mounted: false,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Runs the one-time fetch and moves the state out of Loading.
    pub async fn mount(&mut self) -> &ViewState {
        if self.mounted {
            return &self.state;
        }
        self.mounted = true;

        let outcome = self.client.fetch_recommendation().await;
        match &outcome {
            Ok(recommendation) => info!(
                "Loaded {} recommendation for user {}",
                recommendation.response.recommendation_type, recommendation.response.user_id
            ),
            Err(e) => error!("Failed to load recommendation: {}", e),
        }

        self.state = ViewState::settle(outcome);
        &self.state
    }

    /// Consumes the view, handing back its state
    pub fn into_state(self) -> ViewState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{FakeTransport, OK_BODY};
    use crate::config::RecommendationConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn view_over(transport: Arc<FakeTransport>) -> RecommendationView {
        RecommendationView::new(RecommendationClient::with_transport(
            RecommendationConfig::default(),
            transport,
        ))
    }

    #[test]
    fn test_new_view_is_loading() {
        let view = view_over(FakeTransport::replying(200, OK_BODY));
        assert!(view.state().is_loading());
        assert!(!view.state().is_settled());
        assert!(!view.is_mounted());
    }

    #[tokio::test]
    async fn test_mount_loads_recommendation() {
        let transport = FakeTransport::replying(200, OK_BODY);
        let mut view = view_over(transport.clone());

        match view.mount().await {
            ViewState::Loaded(recommendation) => {
                assert_eq!(recommendation.response.business_id, "66b6b16eeb02b55711d8052c");
                assert_eq!(
                    recommendation.company,
                    Some(json!({"name": "Culturefy Development", "size": "1000+"}))
                );
            }
            other => panic!("expected Loaded, got {:?}", other),
        }
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_failure_status_settles_to_error() {
        let mut view = view_over(FakeTransport::replying(404, OK_BODY));
        assert_eq!(
            view.mount().await,
            &ViewState::Error("Failed to fetch data".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_settles_to_error() {
        let mut view = view_over(FakeTransport::replying(200, "not json"));
        let state = view.mount().await;
        assert!(matches!(state, ViewState::Error(msg) if msg.contains("expected")));
    }

    #[tokio::test]
    async fn test_empty_company_data_still_loads() {
        let body = r#"{"userRole":"Admin","userId":"u","businessId":"b","recommendationType":"t","companyData":""}"#;
        let mut view = view_over(FakeTransport::replying(200, body));

        match view.mount().await {
            ViewState::Loaded(recommendation) => assert!(recommendation.company.is_none()),
            other => panic!("expected Loaded, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_repeated_mounts_fetch_once() {
        let transport = FakeTransport::replying(200, OK_BODY);
        let mut view = view_over(transport.clone());

        let first = view.mount().await.clone();
        let second = view.mount().await.clone();
        view.mount().await;

        assert_eq!(first, second);
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_error_state_is_terminal() {
        let transport = FakeTransport::failing("dns error");
        let mut view = view_over(transport.clone());

        assert_eq!(view.mount().await, &ViewState::Error("dns error".to_string()));
        assert_eq!(view.mount().await, &ViewState::Error("dns error".to_string()));
        assert_eq!(transport.call_count(), 1);
        assert!(view.into_state().is_settled());
    }
}

use culturefy_core::{RecommendationView, ViewState};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

use crate::output::{LOADING_TEXT, print_view};

/// Mounts the view behind a spinner and prints whatever it settles to.
///
/// Returns true when the recommendation loaded.
pub async fn run_view(view: &mut RecommendationView) -> bool {
    let state = mount_with_spinner(view).await;
    print_view(state);
    matches!(state, ViewState::Loaded(_))
}

/// Shows the Loading output until the fetch settles, then clears it
pub async fn mount_with_spinner(view: &mut RecommendationView) -> &ViewState {
    let spinner = loading_spinner();

    debug!("Mounting recommendation view");
    let state = view.mount().await;
    spinner.finish_and_clear();

    state
}

fn loading_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    spinner.set_style(style);
    spinner.set_message(LOADING_TEXT);
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use culturefy_core::{
        HttpExchange, RecommendationClient, RecommendationConfig, RecommendationRequest,
        RecommendationResult, RecommendationTransport,
    };
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    struct CannedTransport {
        status: u16,
        body: &'static str,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecommendationTransport for CannedTransport {
        async fn post_json(
            &self,
            _url: &str,
            _request: &RecommendationRequest,
        ) -> RecommendationResult<HttpExchange> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(HttpExchange::new(self.status, self.body))
        }
    }

    fn view(status: u16, body: &'static str) -> (RecommendationView, Arc<CannedTransport>) {
        let transport = Arc::new(CannedTransport {
            status,
            body,
            calls: AtomicUsize::new(0),
        });
        let client =
            RecommendationClient::with_transport(RecommendationConfig::default(), transport.clone());
        (RecommendationView::new(client), transport)
    }

    #[tokio::test]
    async fn test_run_view_reports_loaded() {
        let (mut view, transport) = view(
            200,
            r#"{"userRole":"Admin","userId":"u","businessId":"b","recommendationType":"t"}"#,
        );
        assert!(run_view(&mut view).await);
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_run_view_reports_error() {
        let (mut view, _) = view(500, "");
        assert!(!run_view(&mut view).await);
        assert_eq!(
            view.state(),
            &ViewState::Error("Failed to fetch data".to_string())
        );
    }

    #[tokio::test]
    async fn test_spinner_mount_leaves_settled_state() {
        let (mut view, transport) = view(200, "[]");
        let state = mount_with_spinner(&mut view).await;
        assert!(state.is_settled());
        mount_with_spinner(&mut view).await;
        assert_eq!(transport.calls.load(Ordering::SeqCst), 1);
    }
}

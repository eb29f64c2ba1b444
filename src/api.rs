use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::trace::TraceLayer;

use crate::engine::{DigestJob, RunOutcome};

#[derive(Clone)]
pub struct AppState {
    pub job: Arc<DigestJob>,
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(job: DigestJob) -> Self {
        Self {
            job: Arc::new(job),
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/api/cron", get(cron));

    if let Some(handle) = state.metrics.clone() {
        router = router.route(
            "/metrics",
            get(move || {
                let h = handle.clone();
                async move { h.render() }
            }),
        );
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Scheduler trigger (07:00 / 17:00 JST). `200 ok` or `500 {error}`.
async fn cron(State(state): State<AppState>) -> (StatusCode, String) {
    match state.job.invoke().await {
        RunOutcome::Success => (StatusCode::OK, "ok".to_string()),
        RunOutcome::Failure(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
    }
}

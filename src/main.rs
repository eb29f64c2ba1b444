//! Tech digest notifier: binary entrypoint.
//! Boots the Axum HTTP service whose `/api/cron` route is hit by the external
//! scheduler at 07:00 and 17:00 JST.

use shuttle_axum::ShuttleAxum;
use tracing::{info, warn};

use tech_digest_notifier::api::{self, AppState};
use tech_digest_notifier::metrics::Metrics;
use tech_digest_notifier::{DigestConfig, DigestJob};

#[shuttle_runtime::main]
async fn axum() -> ShuttleAxum {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();

    tech_digest_notifier::init_tracing();

    let config = DigestConfig::from_env();
    if config.discord_webhook_url.is_none() {
        warn!("DISCORD_WEBHOOK_URL is not set; every run will fail until it is");
    }
    info!(
        secondary = ?config.secondary,
        qiita_auth = config.qiita_token.is_some(),
        "digest config loaded"
    );

    let job = DigestJob::new(config, reqwest::Client::new());
    let mut state = AppState::new(job);
    match Metrics::init() {
        Ok(m) => state = state.with_metrics(m.handle),
        Err(e) => warn!(error = ?e, "metrics disabled"),
    }

    let router = api::create_router(state);
    Ok(router.into())
}

// src/engine.rs
//! One digest run: validate config, fetch both sources concurrently, render,
//! deliver. All-or-nothing; nothing is sent unless both fetches succeed.

use std::sync::Arc;

use metrics::counter;
use reqwest::Client;
use tracing::{error, info};

use crate::config::DigestConfig;
use crate::digest::{build_digest, Section};
use crate::error::Result;
use crate::ingest::providers::{build_secondary, qiita};
use crate::ingest::types::SecondaryFetcher;
use crate::ingest::ensure_metrics_described;
use crate::notify::DiscordNotifier;

/// Terminal state of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Success,
    Failure(String),
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

pub struct DigestJob {
    config: DigestConfig,
    client: Client,
    qiita: qiita::QiitaFetcher,
    secondary: Arc<dyn SecondaryFetcher>,
}

impl DigestJob {
    /// Wire the fetchers described by `config`, sharing one HTTP client.
    pub fn new(config: DigestConfig, client: Client) -> Self {
        let qiita = qiita::QiitaFetcher::new(
            client.clone(),
            config.qiita_api_base.clone(),
            config.qiita_token.clone(),
        );
        let secondary = build_secondary(&config, client.clone());
        Self {
            config,
            client,
            qiita,
            secondary,
        }
    }

    /// Replace the second source (any [`SecondaryFetcher`] will do).
    pub fn with_secondary(mut self, secondary: Arc<dyn SecondaryFetcher>) -> Self {
        self.secondary = secondary;
        self
    }

    /// Run once and fold the result into a [`RunOutcome`], logging failures.
    pub async fn invoke(&self) -> RunOutcome {
        ensure_metrics_described();

        match self.run().await {
            Ok(()) => {
                counter!("digest_runs_total", "outcome" => "success").increment(1);
                RunOutcome::Success
            }
            Err(e) => {
                error!(error = %e, kind = e.kind(), "digest run failed");
                counter!("digest_runs_total", "outcome" => "failure").increment(1);
                RunOutcome::Failure(e.to_string())
            }
        }
    }

    pub async fn run(&self) -> Result<()> {
        // Checked first so a misconfigured deployment makes no requests at all.
        let webhook = self.config.webhook_url()?;

        let (qiita_items, secondary_items) =
            tokio::try_join!(self.qiita.fetch_top(), self.secondary.fetch_top())?;

        let sections = [
            Section::new(qiita::LABEL, qiita_items),
            Section::new(self.secondary.label(), secondary_items),
        ];
        let digest = build_digest(&sections);

        DiscordNotifier::new(self.client.clone(), webhook)
            .deliver(&digest)
            .await?;

        info!(
            qiita = sections[0].items.len(),
            secondary = sections[1].items.len(),
            source = self.secondary.label(),
            "digest delivered"
        );
        Ok(())
    }
}

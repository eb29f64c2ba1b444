pub mod devto_rss;
pub mod itmedia;
pub mod qiita;

use std::sync::Arc;

use reqwest::Client;

use crate::config::{DigestConfig, SecondarySource};
use crate::ingest::types::SecondaryFetcher;

/// Build the configured second source.
pub fn build_secondary(cfg: &DigestConfig, client: Client) -> Arc<dyn SecondaryFetcher> {
    match cfg.secondary {
        SecondarySource::ItmediaRanking => Arc::new(itmedia::ItmediaRankingFetcher::new(
            client,
            cfg.itmedia_ranking_url.clone(),
            cfg.itmedia_link_prefix.clone(),
        )),
        SecondarySource::DevtoFeed => Arc::new(devto_rss::DevtoFeedFetcher::new(
            client,
            cfg.devto_feed_url.clone(),
        )),
    }
}

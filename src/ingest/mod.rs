// src/ingest/mod.rs
pub mod providers;
pub mod types;

use std::collections::HashSet;

use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use reqwest::Response;

use crate::error::{DigestError, Result};
use crate::ingest::types::{LinkItem, TOP_N};

/// One-time metrics registration (so series show up on /metrics).
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!("digest_runs_total", "Digest invocations by outcome.");
        describe_counter!(
            "digest_items_total",
            "Items contributed to the digest, per source."
        );
        describe_counter!(
            "digest_fetch_errors_total",
            "Upstream non-success responses, per source."
        );
    });
}

/// Keep items in order, dropping any whose URL was already seen, and stop at
/// `TOP_N`.
pub fn dedup_truncate<I>(items: I) -> Vec<LinkItem>
where
    I: IntoIterator<Item = LinkItem>,
{
    let mut seen: HashSet<String> = HashSet::new();
    items
        .into_iter()
        .filter(|it| seen.insert(it.url.clone()))
        .take(TOP_N)
        .collect()
}

/// Turn a non-2xx upstream response into `DigestError::Fetch`.
pub(crate) fn ensure_success(origin: &'static str, resp: Response) -> Result<Response> {
    let status = resp.status();
    if !status.is_success() {
        tracing::warn!(source = origin, %status, "upstream returned non-success");
        counter!("digest_fetch_errors_total", "source" => origin).increment(1);
        return Err(DigestError::Fetch { origin, status });
    }
    Ok(resp)
}

pub(crate) fn record_items(origin: &'static str, items: &[LinkItem]) {
    counter!("digest_items_total", "source" => origin).increment(items.len() as u64);
    tracing::debug!(source = origin, items = items.len(), "source normalized");
}

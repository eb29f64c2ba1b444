use chrono::{DateTime, Duration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::error::{DigestError, Result};
use crate::ingest::types::LinkItem;
use crate::ingest::{dedup_truncate, ensure_success, record_items};

const ORIGIN: &str = "Qiita API";
pub const LABEL: &str = "Qiita: most liked in the last 24h";

/// Raw record from `GET /items`. Only the fields we rank and render.
#[derive(Debug, Deserialize)]
struct QiitaItem {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    likes_count: Option<u64>,
}

pub struct QiitaFetcher {
    client: Client,
    api_base: String,
    token: Option<String>,
}

impl QiitaFetcher {
    pub fn new(client: Client, api_base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
            token,
        }
    }

    pub async fn fetch_top(&self) -> Result<Vec<LinkItem>> {
        self.fetch_top_at(Utc::now()).await
    }

    /// Same as [`fetch_top`](Self::fetch_top) with an explicit clock.
    pub async fn fetch_top_at(&self, now: DateTime<Utc>) -> Result<Vec<LinkItem>> {
        let since = jst_yesterday(now).format("%Y-%m-%d").to_string();
        let url = format!("{}/items", self.api_base.trim_end_matches('/'));
        let query = format!("created:>={since}");

        let mut req = self
            .client
            .get(&url)
            .query(&[("per_page", "100"), ("query", query.as_str())]);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req.send().await.map_err(DigestError::http(ORIGIN))?;
        let resp = ensure_success(ORIGIN, resp)?;
        let body = resp.text().await.map_err(DigestError::http(ORIGIN))?;

        let items: Vec<QiitaItem> =
            serde_json::from_str(&body).map_err(|e| DigestError::Parse {
                origin: ORIGIN,
                detail: e.to_string(),
            })?;
        tracing::debug!(source = ORIGIN, candidates = items.len(), %since, "qiita items received");

        let top = rank_items(items);
        record_items(ORIGIN, &top);
        Ok(top)
    }
}

/// "Yesterday" on the JST calendar (UTC+9, no DST).
pub fn jst_yesterday(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(9) - Duration::days(1)).date_naive()
}

/// Stable sort by likes (missing = 0) descending, then the first `TOP_N`
/// distinct URLs.
fn rank_items(items: Vec<QiitaItem>) -> Vec<LinkItem> {
    let mut ranked: Vec<(LinkItem, u64)> = items
        .into_iter()
        .filter_map(|it| {
            let title = it.title.as_deref().map(str::trim).unwrap_or_default();
            let url = it.url.as_deref().map(str::trim).unwrap_or_default();
            if title.is_empty() || url.is_empty() {
                return None;
            }
            Some((LinkItem::new(title, url), it.likes_count.unwrap_or(0)))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    dedup_truncate(
        ranked
            .into_iter()
            .map(|(item, likes)| item.with_note(format!("LGTM: {likes}"))),
    )
}

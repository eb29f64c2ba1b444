//! ITmedia ranking page scrape.
//!
//! The ranking page has no stable markup, so instead of targeting specific
//! elements we walk every anchor and keep the ones that look like articles:
//! an absolute link into the site whose text is long enough to be a headline.
//! If the page changes, [`extract_ranking`] is the only thing to re-tune.

use async_trait::async_trait;
use reqwest::{header::USER_AGENT, Client};
use scraper::{Html, Selector};

use crate::error::{DigestError, Result};
use crate::ingest::types::{LinkItem, SecondaryFetcher};
use crate::ingest::{dedup_truncate, ensure_success, record_items};

const ORIGIN: &str = "ITmedia ranking";
pub const LABEL: &str = "ITmedia: ranking";

/// Anchors with shorter text are navigation, tags, "more" links and so on.
pub const MIN_TITLE_CHARS: usize = 8;

pub const CRAWLER_USER_AGENT: &str =
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub struct ItmediaRankingFetcher {
    client: Client,
    page_url: String,
    link_prefix: String,
}

impl ItmediaRankingFetcher {
    pub fn new(client: Client, page_url: impl Into<String>, link_prefix: impl Into<String>) -> Self {
        Self {
            client,
            page_url: page_url.into(),
            link_prefix: link_prefix.into(),
        }
    }
}

#[async_trait]
impl SecondaryFetcher for ItmediaRankingFetcher {
    async fn fetch_top(&self) -> Result<Vec<LinkItem>> {
        let resp = self
            .client
            .get(&self.page_url)
            .header(USER_AGENT, CRAWLER_USER_AGENT)
            .send()
            .await
            .map_err(DigestError::http(ORIGIN))?;
        let resp = ensure_success(ORIGIN, resp)?;
        let html = resp.text().await.map_err(DigestError::http(ORIGIN))?;

        let top = extract_ranking(&html, &self.link_prefix)?;
        record_items(ORIGIN, &top);
        Ok(top)
    }

    fn label(&self) -> &'static str {
        LABEL
    }
}

/// Pick the first article-looking links in document order.
///
/// A link survives when its `href` starts with `link_prefix`, its trimmed
/// text has at least [`MIN_TITLE_CHARS`] characters and its `href` was not
/// kept before.
pub fn extract_ranking(html: &str, link_prefix: &str) -> Result<Vec<LinkItem>> {
    let anchors = Selector::parse("a").map_err(|e| DigestError::Parse {
        origin: ORIGIN,
        detail: e.to_string(),
    })?;
    let document = Html::parse_document(html);

    let candidates = document.select(&anchors).filter_map(|el| {
        let href = el.value().attr("href").unwrap_or_default();
        let text = el.text().collect::<String>();
        let title = text.trim();
        if href.starts_with(link_prefix) && title.chars().count() >= MIN_TITLE_CHARS {
            Some(LinkItem::new(title, href))
        } else {
            None
        }
    });

    Ok(dedup_truncate(candidates))
}

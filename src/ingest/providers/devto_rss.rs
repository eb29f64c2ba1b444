use async_trait::async_trait;
use quick_xml::de::from_str;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{DigestError, Result};
use crate::ingest::types::{LinkItem, SecondaryFetcher};
use crate::ingest::{dedup_truncate, ensure_success, record_items};

const ORIGIN: &str = "dev.to feed";
pub const LABEL: &str = "DEV Community: latest";

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}
#[derive(Debug, Deserialize)]
struct Channel {
    #[serde(rename = "item", default)]
    item: Vec<Item>,
}
#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
}

pub struct DevtoFeedFetcher {
    client: Client,
    feed_url: String,
}

impl DevtoFeedFetcher {
    pub fn new(client: Client, feed_url: impl Into<String>) -> Self {
        Self {
            client,
            feed_url: feed_url.into(),
        }
    }
}

#[async_trait]
impl SecondaryFetcher for DevtoFeedFetcher {
    async fn fetch_top(&self) -> Result<Vec<LinkItem>> {
        let resp = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(DigestError::http(ORIGIN))?;
        let resp = ensure_success(ORIGIN, resp)?;
        let body = resp.text().await.map_err(DigestError::http(ORIGIN))?;

        let top = parse_feed(&body)?;
        record_items(ORIGIN, &top);
        Ok(top)
    }

    fn label(&self) -> &'static str {
        LABEL
    }
}

/// First entries of an RSS 2.0 document that have both a title and a link.
pub fn parse_feed(xml: &str) -> Result<Vec<LinkItem>> {
    let xml_clean = scrub_html_entities_for_xml(xml);
    let rss: Rss = from_str(&xml_clean).map_err(|e| DigestError::Parse {
        origin: ORIGIN,
        detail: e.to_string(),
    })?;

    let entries = rss.channel.item.into_iter().filter_map(|it| {
        let title = it.title.as_deref().map(str::trim).unwrap_or_default();
        let link = it.link.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() || link.is_empty() {
            return None;
        }
        Some(LinkItem::new(title, link))
    });

    Ok(dedup_truncate(entries))
}

// Feeds are generated from HTML and sometimes leak entities XML doesn't know.
fn scrub_html_entities_for_xml(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&ndash;", "-")
        .replace("&mdash;", "-")
        .replace("&ldquo;", "\"")
        .replace("&rdquo;", "\"")
        .replace("&lsquo;", "'")
        .replace("&rsquo;", "'")
        .replace("&hellip;", "...")
}

// src/ingest/types.rs
use crate::error::Result;

/// How many articles each source contributes to the digest.
pub const TOP_N: usize = 3;

/// One article, normalized across sources.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct LinkItem {
    pub title: String,
    pub url: String,
    pub note: Option<String>, // e.g. "LGTM: 42"
}

impl LinkItem {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

/// The second digest section. Implementations are swapped at composition
/// time; the digest does not care which one produced the items.
#[async_trait::async_trait]
pub trait SecondaryFetcher: Send + Sync {
    async fn fetch_top(&self) -> Result<Vec<LinkItem>>;
    fn label(&self) -> &'static str;
}

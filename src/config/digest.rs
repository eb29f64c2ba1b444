// src/config/digest.rs
use std::env;

use crate::error::{DigestError, Result};

pub const ENV_DISCORD_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_QIITA_TOKEN: &str = "QIITA_TOKEN";

pub const DEFAULT_QIITA_API_BASE: &str = "https://qiita.com/api/v2";
pub const DEFAULT_ITMEDIA_RANKING_URL: &str = "https://www.itmedia.co.jp/ranking/";
pub const DEFAULT_ITMEDIA_LINK_PREFIX: &str = "https://www.itmedia.co.jp/";
pub const DEFAULT_DEVTO_FEED_URL: &str = "https://dev.to/feed";

/// Which upstream fills the second digest section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondarySource {
    ItmediaRanking,
    DevtoFeed,
}

impl Default for SecondarySource {
    fn default() -> Self {
        if cfg!(feature = "devto-feed") {
            Self::DevtoFeed
        } else {
            Self::ItmediaRanking
        }
    }
}

/// Runtime configuration, built once at startup and handed to the job.
///
/// Only the two secrets come from the environment. Endpoints are fixed and
/// can be overridden through the `with_*` builders (tests point them at
/// local servers).
#[derive(Debug, Clone)]
pub struct DigestConfig {
    pub discord_webhook_url: Option<String>,
    pub qiita_token: Option<String>,
    pub qiita_api_base: String,
    pub itmedia_ranking_url: String,
    pub itmedia_link_prefix: String,
    pub devto_feed_url: String,
    pub secondary: SecondarySource,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            discord_webhook_url: None,
            qiita_token: None,
            qiita_api_base: DEFAULT_QIITA_API_BASE.to_string(),
            itmedia_ranking_url: DEFAULT_ITMEDIA_RANKING_URL.to_string(),
            itmedia_link_prefix: DEFAULT_ITMEDIA_LINK_PREFIX.to_string(),
            devto_feed_url: DEFAULT_DEVTO_FEED_URL.to_string(),
            secondary: SecondarySource::default(),
        }
    }
}

impl DigestConfig {
    /// Read `DISCORD_WEBHOOK_URL` and `QIITA_TOKEN`. A missing webhook is not
    /// an error here; it is reported when a run is attempted.
    pub fn from_env() -> Self {
        Self {
            discord_webhook_url: non_empty_var(ENV_DISCORD_WEBHOOK_URL),
            qiita_token: non_empty_var(ENV_QIITA_TOKEN),
            ..Self::default()
        }
    }

    pub fn webhook_url(&self) -> Result<&str> {
        self.discord_webhook_url
            .as_deref()
            .ok_or(DigestError::Config(ENV_DISCORD_WEBHOOK_URL))
    }

    pub fn with_webhook_url(mut self, url: impl Into<String>) -> Self {
        self.discord_webhook_url = Some(url.into());
        self
    }

    pub fn with_qiita_token(mut self, token: impl Into<String>) -> Self {
        self.qiita_token = Some(token.into());
        self
    }

    pub fn with_qiita_api_base(mut self, base: impl Into<String>) -> Self {
        self.qiita_api_base = base.into();
        self
    }

    pub fn with_itmedia_ranking_url(mut self, url: impl Into<String>) -> Self {
        self.itmedia_ranking_url = url.into();
        self
    }

    pub fn with_devto_feed_url(mut self, url: impl Into<String>) -> Self {
        self.devto_feed_url = url.into();
        self
    }

    pub fn with_secondary(mut self, secondary: SecondarySource) -> Self {
        self.secondary = secondary;
        self
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

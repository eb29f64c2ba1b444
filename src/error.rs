// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a digest run. Each variant is terminal: the
/// entry point logs it and turns it into the failure response.
#[derive(Debug, Error)]
pub enum DigestError {
    #[error("missing required configuration: {0}")]
    Config(&'static str),

    #[error("{origin} error: {status}")]
    Fetch {
        origin: &'static str,
        status: StatusCode,
    },

    #[error("{origin} payload could not be parsed: {detail}")]
    Parse { origin: &'static str, detail: String },

    #[error("{origin} request failed: {error}")]
    Http {
        origin: &'static str,
        #[source]
        error: reqwest::Error,
    },

    #[error("Discord webhook error: {status} {body}")]
    Delivery { status: StatusCode, body: String },
}

impl DigestError {
    pub fn http(origin: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |error| Self::Http { origin, error }
    }

    /// Short machine-friendly kind, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Fetch { .. } => "fetch",
            Self::Parse { .. } => "parse",
            Self::Http { .. } => "http",
            Self::Delivery { .. } => "delivery",
        }
    }
}

pub type Result<T> = std::result::Result<T, DigestError>;

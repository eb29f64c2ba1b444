// src/lib.rs
// Public library surface for the service binary, the one-shot binary and integration tests.

pub mod api;
pub mod config;
pub mod digest;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod metrics;
pub mod notify;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::config::{DigestConfig, SecondarySource};
pub use crate::engine::{DigestJob, RunOutcome};
pub use crate::error::DigestError;
pub use crate::ingest::types::{LinkItem, SecondaryFetcher};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the fmt subscriber (compact, `RUST_LOG` aware). Safe to call when a
/// subscriber is already installed; the second call is a no-op.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("tech_digest_notifier=info,warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .try_init();
}

// tests/common/mod.rs
//
// Local stand-ins for Qiita, ITmedia, dev.to and the Discord webhook.
// Each mock is an axum app on 127.0.0.1:0 that records what it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::any,
    Router,
};
use parking_lot::Mutex;
use tokio::net::TcpListener;

pub const ITMEDIA_HTML: &str = include_str!("../fixtures/itmedia_ranking.html");
pub const DEVTO_XML: &str = include_str!("../fixtures/devto_feed.xml");

#[derive(Debug, Clone)]
pub struct Recorded {
    pub headers: HeaderMap,
    pub query: HashMap<String, String>,
    pub body: String,
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

/// A running mock endpoint. Every request to any path gets the canned reply.
pub struct MockUpstream {
    pub url: String,
    seen: Arc<Mutex<Vec<Recorded>>>,
}

impl MockUpstream {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let canned = Canned {
            status,
            body: body.into(),
            seen: seen.clone(),
        };
        let app = Router::new()
            .route("/", any(reply))
            .route("/{*rest}", any(reply))
            .with_state(canned);

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind mock");
        let addr = listener.local_addr().expect("mock addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock");
        });

        Self {
            url: format!("http://{addr}"),
            seen,
        }
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().len()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.seen.lock().clone()
    }
}

async fn reply(
    State(c): State<Canned>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    c.seen.lock().push(Recorded {
        headers,
        query,
        body,
    });
    (c.status, c.body.clone())
}

pub fn qiita_json(likes: &[Option<u64>]) -> String {
    let items: Vec<serde_json::Value> = likes
        .iter()
        .enumerate()
        .map(|(i, l)| {
            serde_json::json!({
                "title": format!("Qiita article {i}"),
                "url": format!("https://qiita.com/user{i}/items/{i}"),
                "likes_count": l,
                "created_at": "2024-03-01T10:00:00+09:00",
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}

// tests/providers_qiita.rs

mod common;

use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use common::{qiita_json, MockUpstream};
use tech_digest_notifier::ingest::providers::qiita::QiitaFetcher;
use tech_digest_notifier::DigestError;

#[tokio::test]
async fn qiita_top_three_by_likes_keeps_tie_order() {
    let upstream = MockUpstream::start(
        StatusCode::OK,
        qiita_json(&[Some(10), Some(50), Some(5), Some(50), Some(1)]),
    )
    .await;
    let fetcher = QiitaFetcher::new(reqwest::Client::new(), upstream.url.clone(), None);

    let items = fetcher.fetch_top().await.expect("qiita fetch ok");

    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Qiita article 1", "Qiita article 3", "Qiita article 0"]
    );
    let notes: Vec<&str> = items.iter().filter_map(|i| i.note.as_deref()).collect();
    assert_eq!(notes, vec!["LGTM: 50", "LGTM: 50", "LGTM: 10"]);
}

#[tokio::test]
async fn qiita_request_carries_date_query_and_bearer_token() {
    let upstream = MockUpstream::start(StatusCode::OK, "[]").await;
    let fetcher = QiitaFetcher::new(
        reqwest::Client::new(),
        upstream.url.clone(),
        Some("secret-token".into()),
    );

    // 2024-03-01 16:00 UTC = 2024-03-02 01:00 JST, so "yesterday" is 03-01.
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 16, 0, 0).unwrap();
    let items = fetcher.fetch_top_at(now).await.expect("empty list is fine");
    assert!(items.is_empty());

    let reqs = upstream.requests();
    assert_eq!(reqs.len(), 1);
    let req = &reqs[0];
    assert_eq!(req.query.get("per_page").map(String::as_str), Some("100"));
    assert_eq!(
        req.query.get("query").map(String::as_str),
        Some("created:>=2024-03-01")
    );
    assert_eq!(
        req.headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer secret-token")
    );
}

#[tokio::test]
async fn qiita_without_token_sends_no_authorization() {
    let upstream = MockUpstream::start(StatusCode::OK, qiita_json(&[Some(1)])).await;
    let fetcher = QiitaFetcher::new(reqwest::Client::new(), upstream.url.clone(), None);

    let items = fetcher.fetch_top().await.expect("qiita fetch ok");
    assert_eq!(items.len(), 1);
    assert!(upstream.requests()[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn qiita_non_success_status_is_fetch_error() {
    let upstream = MockUpstream::start(StatusCode::FORBIDDEN, "rate limited").await;
    let fetcher = QiitaFetcher::new(reqwest::Client::new(), upstream.url.clone(), None);

    match fetcher.fetch_top().await {
        Err(DigestError::Fetch { status, .. }) => assert_eq!(status, StatusCode::FORBIDDEN),
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn qiita_unexpected_payload_is_parse_error() {
    let upstream = MockUpstream::start(StatusCode::OK, r#"{"message":"not a list"}"#).await;
    let fetcher = QiitaFetcher::new(reqwest::Client::new(), upstream.url.clone(), None);

    let err = fetcher.fetch_top().await.unwrap_err();
    assert_eq!(err.kind(), "parse", "got: {err}");
}

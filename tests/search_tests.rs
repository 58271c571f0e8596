//! End-to-end search tests
//!
//! These tests use wiremock as both the proxy endpoint and the search
//! host: with the mock server configured as an HTTP proxy, every request
//! lands on it in absolute form and the path matchers still apply.

use octoseek::config::ResultKind;
use octoseek::crawler::{Crawler, ResultRecord};
use octoseek::output::render_results;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a crawler whose proxy and base URL both point at the mock server
fn crawler_for(server: &MockServer) -> Crawler {
    let proxies = vec![server.uri()];
    Crawler::with_base_url(&proxies, &server.uri(), 42).expect("failed to build crawler")
}

fn search_body(results: serde_json::Value) -> String {
    serde_json::json!({ "payload": { "results": results } }).to_string()
}

#[tokio::test]
async fn test_issues_search_end_to_end() {
    let server = MockServer::start().await;

    let body = search_body(serde_json::json!([
        {"repo": {"repository": {"owner_login": "o", "name": "r"}}, "number": 5}
    ]));
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["octocat".to_string()], ResultKind::Issues)
        .await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url(), format!("{}/o/r/issues/5", server.uri()));

    let json = render_results(&records, false).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{"url": format!("{}/o/r/issues/5", server.uri())}])
    );
}

#[tokio::test]
async fn test_wikis_search_strips_extension() {
    let server = MockServer::start().await;

    let body = search_body(serde_json::json!([
        {"repo": {"repository": {"owner_login": "o", "name": "r"}}, "path": "Home.md"}
    ]));
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["docs".to_string()], ResultKind::Wikis)
        .await;

    assert_eq!(records.len(), 1);
    assert!(records[0].url().ends_with("/wiki/Home"));
}

#[tokio::test]
async fn test_repositories_search_enriches_language_stats() {
    let server = MockServer::start().await;

    let body = search_body(serde_json::json!([
        {"repo": {"repository": {"owner_login": "test_owner", "name": "test_repo"}}}
    ]));
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let repo_page = concat!(
        "<html><body>",
        r#"<span class="Progress-item" aria-label="Python 60.0%"></span>"#,
        r#"<span class="Progress-item" aria-label="Shell 40.0%"></span>"#,
        "</body></html>"
    );
    Mock::given(method("GET"))
        .and(path("/test_owner/test_repo"))
        .respond_with(ResponseTemplate::new(200).set_body_string(repo_page))
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["openstack".to_string(), "nova".to_string()], ResultKind::Repositories)
        .await;

    assert_eq!(records.len(), 1);
    match &records[0] {
        ResultRecord::Repository { url, extra } => {
            assert_eq!(url, &format!("{}/test_owner/test_repo", server.uri()));
            assert_eq!(extra.owner, "test_owner");
            assert_eq!(extra.language_stats.get("Python"), Some("60.0%"));
            assert_eq!(extra.language_stats.get("Shell"), Some("40.0%"));
        }
        other => panic!("expected repository record, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failed_enrichment_fetch_keeps_record_with_empty_stats() {
    let server = MockServer::start().await;

    let body = search_body(serde_json::json!([
        {"repo": {"repository": {"owner_login": "o", "name": "gone"}}}
    ]));
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    // No mock for /o/gone: the landing page fetch gets a 404
    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["x".to_string()], ResultKind::Repositories)
        .await;

    assert_eq!(records.len(), 1);
    match &records[0] {
        ResultRecord::Repository { extra, .. } => assert!(extra.language_stats.is_empty()),
        other => panic!("expected repository record, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_yields_empty_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["x".to_string()], ResultKind::Issues)
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_server_error_yields_empty_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    let records = crawler
        .search(&["x".to_string()], ResultKind::Repositories)
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_unreachable_proxy_yields_empty_results() {
    // Nothing listens on port 1; the proxy connection is refused
    let proxies = vec!["http://127.0.0.1:1".to_string()];
    let mut crawler =
        Crawler::with_base_url(&proxies, "http://127.0.0.1:1", 42).expect("build crawler");

    let records = crawler
        .search(&["x".to_string()], ResultKind::Issues)
        .await;
    assert!(records.is_empty());
}

#[tokio::test]
async fn test_empty_results_list_yields_empty_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(search_body(serde_json::json!([]))),
        )
        .mount(&server)
        .await;

    let mut crawler = crawler_for(&server);
    for kind in [ResultKind::Repositories, ResultKind::Issues, ResultKind::Wikis] {
        let records = crawler.search(&["x".to_string()], kind).await;
        assert!(records.is_empty());
    }
}

//! Mock-based tests for the summary generation operation.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use faculty_summary::client::AuthorDirectoryClient;
use faculty_summary::config::Config;
use faculty_summary::error::OpError;
use faculty_summary::ops::{self, OpContext};

/// Create an operation context pointed at a mock directory.
fn setup_test_context(mock_server: &MockServer) -> OpContext {
    let config = Config::for_testing(&mock_server.uri());
    let client = AuthorDirectoryClient::new(config).unwrap();
    OpContext::new(Arc::new(client))
}

/// Mount a search returning a single candidate.
async fn mount_search(mock_server: &MockServer, query: &str, author_id: &str) {
    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("query", query))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 1,
            "offset": 0,
            "data": [{ "authorId": author_id, "name": query }]
        })))
        .mount(mock_server)
        .await;
}

fn paper_json(title: &str, year: i32, citations: i64) -> serde_json::Value {
    json!({ "title": title, "year": year, "citationCount": citations })
}

#[tokio::test]
async fn test_summary_happy_path_projection() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Jane Smith", "42").await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "42",
            "name": "Jane Smith",
            "affiliations": ["MIT"],
            "url": "https://directory.example/author/42",
            "citationCount": 1234,
            "papers": [
                paper_json("First Paper", 2019, 300),
                paper_json("Second Paper", 2021, 40),
            ]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let summary = ops::generate_summary(&ctx, "Jane Smith").await.unwrap();

    assert_eq!(summary.exact_name, "Jane Smith");
    assert_eq!(summary.affiliation, "MIT");
    assert_eq!(summary.total_citations, 1234);
    assert_eq!(summary.profile_link, "https://directory.example/author/42");
    assert_eq!(summary.publications.len(), 2);
    assert_eq!(summary.publications[0].title, "First Paper");
    assert_eq!(summary.publications[0].year, "2019");
    assert_eq!(summary.publications[0].citations, 300);
}

#[tokio::test]
async fn test_summary_caps_publications_at_five() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Prolific Author", "7").await;

    let papers: Vec<_> = (0..8).map(|i| paper_json(&format!("Paper {i}"), 2015 + i, 5)).collect();

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "7",
            "name": "Prolific Author",
            "papers": papers
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let summary = ops::generate_summary(&ctx, "Prolific Author").await.unwrap();

    assert_eq!(summary.publications.len(), 5);
    assert_eq!(summary.publications[4].title, "Paper 4");
}

#[tokio::test]
async fn test_summary_defaults_for_sparse_profile() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Sparse Author", "9").await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/9"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "9",
            "papers": [{}]
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let summary = ops::generate_summary(&ctx, "Sparse Author").await.unwrap();

    assert_eq!(summary.exact_name, "N/A");
    assert_eq!(summary.affiliation, "N/A");
    assert_eq!(summary.total_citations, 0);
    assert_eq!(summary.profile_link, "");
    assert_eq!(summary.publications[0].title, "N/A");
    assert_eq!(summary.publications[0].year, "N/A");
    assert_eq!(summary.publications[0].citations, 0);
}

#[tokio::test]
async fn test_summary_no_match_is_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 0,
            "offset": 0,
            "data": []
        })))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = ops::generate_summary(&ctx, "Unknown Person").await.unwrap_err();

    assert!(matches!(err, OpError::NotFound { .. }));
    assert_eq!(err.to_string(), "No data found for 'Unknown Person'.");
}

#[tokio::test]
async fn test_summary_blank_name_makes_no_directory_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = ops::generate_summary(&ctx, "").await.unwrap_err();

    assert!(matches!(err, OpError::InvalidInput { .. }));
    assert_eq!(err.to_string(), "Faculty name is required.");
}

#[tokio::test]
async fn test_summary_fault_during_fill_is_upstream() {
    let mock_server = MockServer::start().await;
    mount_search(&mock_server, "Flaky Author", "13").await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/13"))
        .respond_with(ResponseTemplate::new(500).set_body_string("connection reset by peer"))
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let err = ops::generate_summary(&ctx, "Flaky Author").await.unwrap_err();

    assert!(matches!(err, OpError::Upstream(_)));
    assert!(err.to_string().contains("connection reset by peer"));
}

#[tokio::test]
async fn test_summary_consumes_only_first_candidate() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/search"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 2,
            "data": [
                { "authorId": "first", "name": "First Match" },
                { "authorId": "second", "name": "Second Match" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/graph/v1/author/first"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "authorId": "first",
            "name": "First Match"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let ctx = setup_test_context(&mock_server);
    let summary = ops::generate_summary(&ctx, "ambiguous").await.unwrap();

    assert_eq!(summary.exact_name, "First Match");
}

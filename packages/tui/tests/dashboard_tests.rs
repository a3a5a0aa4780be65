//! Tests for the dashboard's four-way batch fetch.

use std::time::Duration;

use pretty_assertions::assert_eq;
use serde_json::json;
use thelin_client::ApiClient;
use thelin_tui::controller::fetch_dashboard;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_stats(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "lifelogs_today": 12,
            "classifications": {"book": 3, "business": 2},
            "pending_questions": 4,
            "pending_book_additions": 3,
            "new_business_ideas": 2
        })))
        .mount(server)
        .await;
}

async fn mount_empty_list(server: &MockServer, endpoint: &str) {
    Mock::given(method("GET"))
        .and(path(endpoint))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(server)
        .await;
}

#[tokio::test]
async fn batch_succeeds_when_all_four_reads_succeed() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_empty_list(&server, "/api/book-additions").await;
    mount_empty_list(&server, "/api/business-ideas").await;
    mount_empty_list(&server, "/api/questions").await;

    let client = ApiClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let data = fetch_dashboard(&client, 20).await.unwrap();
    assert_eq!(data.stats.lifelogs_today, 12);
    assert_eq!(data.stats.pending_questions, 4);
    assert!(data.recent_books.is_empty());
    assert!(data.recent_ideas.is_empty());
    assert!(data.pending_questions.is_empty());
}

#[tokio::test]
async fn one_failed_read_fails_the_whole_batch() {
    let server = MockServer::start().await;
    mount_stats(&server).await;
    mount_empty_list(&server, "/api/book-additions").await;
    mount_empty_list(&server, "/api/business-ideas").await;
    Mock::given(method("GET"))
        .and(path("/api/questions"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri(), Duration::from_secs(5)).unwrap();
    let err = fetch_dashboard(&client, 20).await.unwrap_err();
    assert_eq!(err.to_string(), "API error: 500 Internal Server Error");
}

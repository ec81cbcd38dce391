//! Bookmark API client against a mocked server.

mod common;

use common::{client, record};
use linkshelf_business::{ApiClientError, NewBookmark};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_sends_user_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookmarks"))
        .and(query_param("userId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            record("b2", "Second", &["rust"]),
            record("b1", "First", &[]),
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let bookmarks = client(&server).list("u1").await.unwrap();
    let titles: Vec<&str> = bookmarks.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_create_posts_camel_case_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookmarks"))
        .and(body_json(json!({
            "url": "https://example.com",
            "tags": ["tech"],
            "userId": "u1",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(record("b1", "Example", &["tech"])))
        .expect(1)
        .mount(&server)
        .await;

    let created = client(&server)
        .create(
            "u1",
            &NewBookmark {
                url: "https://example.com".to_string(),
                tags: vec!["tech".to_string()],
                custom_summary: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(created.id, "b1");
}

#[tokio::test]
async fn test_delete_uses_query_form() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookmarks"))
        .and(query_param("id", "b1"))
        .and(query_param("userId", "u1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    client(&server).delete("b1", "u1").await.unwrap();
}

#[tokio::test]
async fn test_error_envelope_becomes_status_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookmarks"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "userId is required" })),
        )
        .mount(&server)
        .await;

    let err = client(&server).list("").await.unwrap_err();
    match err {
        ApiClientError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "userId is required");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_health_reads_service_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/is-health"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("OK")
                .insert_header("x-service-env", "prod")
                .insert_header("x-service-version", "stable:0.1.0"),
        )
        .mount(&server)
        .await;

    let health = client(&server).health().await.unwrap();
    assert!(health.healthy);
    assert_eq!(health.env.as_deref(), Some("prod"));
    assert_eq!(health.version.as_deref(), Some("stable:0.1.0"));
}

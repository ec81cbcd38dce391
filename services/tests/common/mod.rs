//! Shared test utilities for integration tests.

use axum_test::TestServer;
use linkshelf_services::{
    bookmarks::MockBookmarkStore, config::Config, enrichment::Enricher, routes,
};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// An address nothing listens on, for unreachable pages and reader services.
#[allow(dead_code)]
pub const UNREACHABLE: &str = "http://127.0.0.1:9";

/// Test server over `store`, with the reader service at `reader_base`.
pub fn test_server(store: MockBookmarkStore, reader_base: &str) -> TestServer {
    let config = Config::new_for_test_with_reader(reader_base);
    let enricher = Enricher::new(&config).expect("http client should build");
    TestServer::new(routes(store, enricher, config)).expect("test server should start")
}

/// A page at `/page` titled `title`.
#[allow(dead_code)]
pub async fn mount_page(server: &MockServer, title: &str) {
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!("<html><head><title>{title}</title></head></html>")),
        )
        .mount(server)
        .await;
}

/// A reader service answering every summary request with `text`.
#[allow(dead_code)]
pub async fn mount_reader(server: &MockServer, text: &str) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/http:"))
        .respond_with(ResponseTemplate::new(200).set_body_string(text.to_string()))
        .mount(server)
        .await;
}

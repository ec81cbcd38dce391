//! Shared fixtures for client integration tests.

use linkshelf_business::{AuthContext, BookmarksClient, BusinessConfig, User};
use serde_json::{Value, json};
use wiremock::MockServer;

pub fn client(server: &MockServer) -> BookmarksClient {
    let config = BusinessConfig::new_for_test(server.uri(), server.uri());
    BookmarksClient::new(&config).expect("client should build")
}

#[allow(dead_code)]
pub fn signed_in(uid: &str) -> AuthContext {
    AuthContext {
        user: Some(User {
            uid: uid.to_string(),
            email: format!("{uid}@example.com"),
            display_name: None,
        }),
        loading: false,
    }
}

/// A server-shaped bookmark record.
pub fn record(id: &str, title: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "url": format!("https://example.com/{id}"),
        "title": title,
        "summary": "summary",
        "favicon": "https://www.google.com/s2/favicons?domain=example.com",
        "tags": tags,
        "user_id": "u1",
        "created_at": "2024-05-01T12:00:00Z",
        "updated_at": "2024-05-01T12:00:00Z",
    })
}

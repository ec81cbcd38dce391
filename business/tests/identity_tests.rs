//! Identity provider sign-in against a mocked REST endpoint.

use linkshelf_business::{
    AuthContext, BusinessConfig, IdentityClient, IdentityError, Route, SessionState, logout,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn identity(server: &MockServer) -> IdentityClient {
    let config = BusinessConfig::new_for_test(server.uri(), server.uri());
    IdentityClient::new(config.identity).expect("identity client should build")
}

#[tokio::test]
async fn test_sign_in_publishes_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .and(query_param("key", "test-api-key"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "hunter2",
            "returnSecureToken": true,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "localId": "uid-1",
            "email": "ada@example.com",
            "displayName": "Ada",
            "idToken": "id-token",
            "refreshToken": "refresh-token",
            "expiresIn": "3600",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let identity = identity(&server);
    let mut rx = identity.subscribe();
    assert!(AuthContext::current(&identity).loading);

    let user = identity.sign_in("ada@example.com", "hunter2").await.unwrap();
    assert_eq!(user.uid, "uid-1");
    assert_eq!(user.label(), "Ada");

    assert!(rx.has_changed().unwrap());
    let auth = AuthContext::from_session(&rx.borrow_and_update());
    assert_eq!(auth.route(), Some(Route::Home));
    assert_eq!(auth.user.map(|u| u.uid), Some("uid-1".to_string()));

    assert_eq!(logout(&identity), Route::Login);
    assert_eq!(*rx.borrow_and_update(), SessionState::SignedOut);
}

#[tokio::test]
async fn test_rejected_sign_in_keeps_state() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/accounts:signInWithPassword"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": { "code": 400, "message": "INVALID_LOGIN_CREDENTIALS" }
        })))
        .mount(&server)
        .await;

    let identity = identity(&server);
    identity.restore(None);

    let err = identity.sign_in("ada@example.com", "wrong").await.unwrap_err();
    assert!(matches!(err, IdentityError::Rejected(ref m) if m == "INVALID_LOGIN_CREDENTIALS"));
    assert_eq!(identity.current(), SessionState::SignedOut);
}

//! Identity provider client.
//!
//! Holds the current session in a `tokio::sync::watch` channel so any number
//! of views can observe sign-in and sign-out. The session starts as
//! [`SessionState::Unknown`] until a persisted session is restored or the user
//! signs in.

use crate::config::IdentityConfig;
use linkshelf_utils::version_info::user_agent;
use log::{error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

/// An authenticated user, referenced elsewhere by `uid` only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
}

impl User {
    /// Display name when set, email otherwise.
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(self.email.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub id_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Not yet resolved; the provider has not reported either way.
    #[default]
    Unknown,
    SignedOut,
    SignedIn(Session),
}

impl SessionState {
    pub fn user(&self) -> Option<&User> {
        match self {
            SessionState::SignedIn(session) => Some(&session.user),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("Identity request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Sign-in rejected: {0}")]
    Rejected(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    email: String,
    #[serde(default)]
    display_name: Option<String>,
    id_token: String,
    refresh_token: String,
}

#[derive(Deserialize)]
struct ProviderErrorBody {
    error: ProviderError,
}

#[derive(Deserialize)]
struct ProviderError {
    message: String,
}

pub struct IdentityClient {
    http: Client,
    config: IdentityConfig,
    session: watch::Sender<SessionState>,
}

impl IdentityClient {
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        let (session, _) = watch::channel(SessionState::Unknown);
        Ok(Self {
            http,
            config,
            session,
        })
    }

    pub fn config(&self) -> &IdentityConfig {
        &self.config
    }

    /// Observe session changes.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.session.subscribe()
    }

    pub fn current(&self) -> SessionState {
        self.session.borrow().clone()
    }

    /// Resolve the initial state from whatever session the platform persisted.
    pub fn restore(&self, persisted: Option<Session>) {
        let state = match persisted {
            Some(session) => SessionState::SignedIn(session),
            None => SessionState::SignedOut,
        };
        self.session.send_replace(state);
    }

    /// Email/password sign-in against the provider's REST endpoint.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User, IdentityError> {
        let url = format!("{}/accounts:signInWithPassword", self.config.base_url);
        let response = self
            .http
            .post(url)
            .query(&[("key", self.config.api_key.as_str())])
            .json(&SignInRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response
                .json::<ProviderErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| format!("status {status}"));
            error!("Sign-in failed for {email}: {message}");
            return Err(IdentityError::Rejected(message));
        }

        let body: SignInResponse = response.json().await?;
        let user = User {
            uid: body.local_id,
            email: body.email,
            display_name: body.display_name,
        };
        info!("Signed in as {}", user.uid);

        self.session.send_replace(SessionState::SignedIn(Session {
            user: user.clone(),
            id_token: body.id_token,
            refresh_token: body.refresh_token,
        }));
        Ok(user)
    }

    /// Drop the current session locally; the provider keeps no server-side state.
    pub fn sign_out(&self) {
        self.session.send_replace(SessionState::SignedOut);
    }
}

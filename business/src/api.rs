//! Bookmark API client.
//!
//! Thin async wrappers over the server's `/bookmarks` and `/is-health`
//! endpoints. Callers map the results into view state.

use crate::add_bookmark::NewBookmark;
use crate::bookmark::Bookmark;
use crate::config::BusinessConfig;
use linkshelf_utils::version_info::user_agent;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ApiClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API returned status {status}: {message}")]
    Status { status: u16, message: String },
}

pub type ApiResult<T> = Result<T, ApiClientError>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequest<'a> {
    #[serde(flatten)]
    bookmark: &'a NewBookmark,
    user_id: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct DeleteBody {
    success: bool,
}

/// Server health as reported by `/is-health`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceHealth {
    pub healthy: bool,
    pub env: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone)]
pub struct BookmarksClient {
    http: Client,
    base_url: String,
}

impl BookmarksClient {
    pub fn new(config: &BusinessConfig) -> ApiResult<Self> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `/bookmarks?userId=`
    pub async fn list(&self, user_id: &str) -> ApiResult<Vec<Bookmark>> {
        let response = self
            .http
            .get(format!("{}/bookmarks", self.base_url))
            .query(&[("userId", user_id)])
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// POST `/bookmarks`
    pub async fn create(&self, user_id: &str, bookmark: &NewBookmark) -> ApiResult<Bookmark> {
        let response = self
            .http
            .post(format!("{}/bookmarks", self.base_url))
            .json(&CreateRequest { bookmark, user_id })
            .send()
            .await?;

        Ok(ensure_success(response).await?.json().await?)
    }

    /// DELETE `/bookmarks?id=&userId=`
    pub async fn delete(&self, id: &str, user_id: &str) -> ApiResult<()> {
        let response = self
            .http
            .delete(format!("{}/bookmarks", self.base_url))
            .query(&[("id", id), ("userId", user_id)])
            .send()
            .await?;

        let body: DeleteBody = ensure_success(response).await?.json().await?;
        if !body.success {
            log::warn!("Delete of {id} returned success=false");
        }
        Ok(())
    }

    /// GET `/is-health`. A 502 is a valid answer, not an error.
    pub async fn health(&self) -> ApiResult<ServiceHealth> {
        let response = self
            .http
            .get(format!("{}/is-health", self.base_url))
            .send()
            .await?;

        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };

        Ok(ServiceHealth {
            healthy: response.status().is_success(),
            env: header("x-service-env"),
            version: header("x-service-version"),
        })
    }
}

async fn ensure_success(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.error)
        .unwrap_or(text);

    Err(ApiClientError::Status {
        status: status.as_u16(),
        message,
    })
}

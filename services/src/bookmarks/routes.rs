//! HTTP routes for bookmarks.
//!
//! The owner id is taken from the request as given; the caller is trusted.

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        Path, Query, State,
        rejection::{BytesRejection, PathRejection, QueryRejection},
    },
    routing::{delete, post},
};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Bookmark, BookmarkInsert, BookmarkStore};
use crate::enrichment::Enricher;
use crate::error::ApiError;

/// Shared state for bookmark handlers.
#[derive(Clone)]
pub struct AppState<S> {
    pub store: S,
    pub enricher: Enricher,
}

impl<S: BookmarkStore> AppState<S> {
    pub fn new(store: S, enricher: Enricher) -> Self {
        Self { store, enricher }
    }
}

/// Body of `POST /bookmarks`.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookmarkRequest {
    pub url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub custom_summary: Option<String>,
    pub user_id: Option<String>,
}

/// Query string pairs in request order.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Default)]
pub struct OwnerParams {
    pub user_id: Option<String>,
}

#[derive(Debug, Default)]
pub struct DeleteParams {
    pub id: Option<String>,
    pub user_id: Option<String>,
}

// A repeated key resolves to its first value.
fn first(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.clone())
}

impl From<QueryPairs> for OwnerParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            user_id: first(&pairs, "userId"),
        }
    }
}

impl From<QueryPairs> for DeleteParams {
    fn from(pairs: QueryPairs) -> Self {
        Self {
            id: first(&pairs, "id"),
            user_id: first(&pairs, "userId"),
        }
    }
}

fn query_params<T: From<QueryPairs>>(
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<T, ApiError> {
    let Query(pairs) = query.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected query string");
        ApiError::bad_request("Invalid query string")
    })?;
    Ok(T::from(pairs))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub success: bool,
}

pub fn routes<S: BookmarkStore>() -> Router<AppState<S>> {
    Router::new()
        .route(
            "/bookmarks",
            post(create_bookmark::<S>)
                .get(list_bookmarks::<S>)
                .delete(delete_bookmark::<S>),
        )
        .route("/bookmarks/{id}", delete(delete_bookmark_by_path::<S>))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Absolute http(s) URL with a host, or `None`.
pub fn parse_http_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https") && url.host_str().is_some())
}

/// Trim every tag and drop the ones left empty. Order and duplicates are kept.
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|tag| tag.trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}

fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiError::bad_request("Invalid bookmark id"))
}

async fn create_bookmark<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Bookmark>, ApiError> {
    // Parsed by hand so a missing or different Content-Type is accepted.
    let request: CreateBookmarkRequest = body
        .map_err(|rejection| rejection.to_string())
        .and_then(|bytes| {
            serde_json::from_slice::<CreateBookmarkRequest>(&bytes).map_err(|e| e.to_string())
        })
        .map_err(|error| {
            tracing::debug!(%error, "Rejected create body");
            ApiError::bad_request("Invalid JSON body")
        })?;

    let (Some(raw_url), Some(user_id)) = (non_blank(request.url), non_blank(request.user_id))
    else {
        return Err(ApiError::bad_request("URL and userId are required"));
    };
    let raw_url = raw_url.trim().to_string();
    let url = parse_http_url(&raw_url).ok_or_else(|| ApiError::bad_request("Invalid URL"))?;
    let tags = normalize_tags(request.tags.unwrap_or_default());

    let metadata = state.enricher.extract_metadata(&url).await;
    let summary = match non_blank(request.custom_summary) {
        Some(custom) => custom,
        None => state.enricher.generate_summary(&url).await.into_value(),
    };

    let bookmark = state
        .store
        .create(BookmarkInsert {
            url: raw_url,
            title: metadata.title.into_value(),
            summary,
            favicon: Some(metadata.favicon),
            tags,
            user_id,
        })
        .await?;

    tracing::info!(id = %bookmark.id, user_id = %bookmark.user_id, "Bookmark created");
    Ok(Json(bookmark))
}

async fn list_bookmarks<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<Vec<Bookmark>>, ApiError> {
    let params: OwnerParams = query_params(query)?;
    let user_id =
        non_blank(params.user_id).ok_or_else(|| ApiError::bad_request("userId is required"))?;
    let bookmarks = state.store.list(&user_id).await?;
    Ok(Json(bookmarks))
}

async fn delete_bookmark<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let params: DeleteParams = query_params(query)?;
    let (Some(id), Some(user_id)) = (non_blank(params.id), non_blank(params.user_id)) else {
        return Err(ApiError::bad_request("id and userId are required"));
    };
    remove(&state.store, parse_id(&id)?, &user_id).await
}

async fn delete_bookmark_by_path<S: BookmarkStore>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected bookmark path");
        ApiError::bad_request("Invalid bookmark id")
    })?;
    let params: OwnerParams = query_params(query)?;
    let user_id =
        non_blank(params.user_id).ok_or_else(|| ApiError::bad_request("userId is required"))?;
    remove(&state.store, parse_id(&id)?, &user_id).await
}

// Success is reported whether or not a row matched.
async fn remove<S: BookmarkStore>(
    store: &S,
    id: Uuid,
    user_id: &str,
) -> Result<Json<DeleteResponse>, ApiError> {
    if !store.delete(id, user_id).await? {
        tracing::debug!(%id, user_id, "Delete matched no bookmark");
    }
    Ok(Json(DeleteResponse { success: true }))
}

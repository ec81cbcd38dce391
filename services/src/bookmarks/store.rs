//! Bookmark store accessor.
//!
//! Every operation is a single round trip with no cross-call atomicity.
//! Implementations log the underlying failure and return the operation-specific
//! [`StoreError`] variant.

use super::{Bookmark, BookmarkInsert, BookmarkUpdate};
use std::future::Future;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to fetch bookmarks: {0}")]
    Fetch(String),

    #[error("Failed to create bookmark: {0}")]
    Create(String),

    #[error("Failed to update bookmark: {0}")]
    Update(String),

    #[error("Failed to delete bookmark: {0}")]
    Delete(String),

    #[error("Failed to search bookmarks: {0}")]
    Search(String),

    #[error("Failed to fetch bookmarks by tags: {0}")]
    ByTags(String),
}

/// Persistence for bookmarks, always scoped by owner id.
pub trait BookmarkStore: Clone + Send + Sync + 'static {
    /// Cheap connectivity probe used by the health endpoint.
    fn is_connected(&self) -> impl Future<Output = bool> + Send;

    /// All bookmarks owned by `owner_id`, newest first. Empty when the owner has none.
    fn list(
        &self,
        owner_id: &str,
    ) -> impl Future<Output = Result<Vec<Bookmark>, StoreError>> + Send;

    /// Insert one bookmark and return it with its assigned id and timestamps.
    fn create(
        &self,
        input: BookmarkInsert,
    ) -> impl Future<Output = Result<Bookmark, StoreError>> + Send;

    /// Patch a bookmark owned by `owner_id`, stamping `updated_at`.
    ///
    /// Returns `None` when no bookmark matches both id and owner.
    fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: BookmarkUpdate,
    ) -> impl Future<Output = Result<Option<Bookmark>, StoreError>> + Send;

    /// Delete at most one bookmark matching both id and owner.
    ///
    /// Returns whether a row matched. Callers of the public API never see this
    /// flag: deleting a missing or foreign bookmark is reported as success.
    fn delete(
        &self,
        id: Uuid,
        owner_id: &str,
    ) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// Case-insensitive substring search over title, summary and url, newest first.
    fn search(
        &self,
        owner_id: &str,
        query: &str,
    ) -> impl Future<Output = Result<Vec<Bookmark>, StoreError>> + Send;

    /// Bookmarks carrying every tag in `tags`, newest first.
    fn by_tags(
        &self,
        owner_id: &str,
        tags: &[String],
    ) -> impl Future<Output = Result<Vec<Bookmark>, StoreError>> + Send;
}

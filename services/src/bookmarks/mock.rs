//! In-memory bookmark store.
//!
//! Used by the router and integration tests. Ordering and owner scoping follow
//! the PostgreSQL store exactly.

use super::{Bookmark, BookmarkInsert, BookmarkStore, BookmarkUpdate, StoreError};
use chrono::Utc;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

#[derive(Clone)]
pub struct MockBookmarkStore {
    bookmarks: Arc<RwLock<Vec<Bookmark>>>,
    is_connected: bool,
    failing: bool,
}

impl Default for MockBookmarkStore {
    fn default() -> Self {
        Self {
            bookmarks: Arc::default(),
            is_connected: true,
            failing: false,
        }
    }
}

impl MockBookmarkStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails, as if the datastore were unreachable.
    pub fn failing() -> Self {
        Self {
            is_connected: false,
            failing: true,
            ..Self::default()
        }
    }

    /// A store that reports itself disconnected but still serves requests.
    pub fn disconnected() -> Self {
        Self {
            is_connected: false,
            ..Self::default()
        }
    }

    /// Seed the store with existing rows (builder pattern).
    pub fn with_bookmarks(self, bookmarks: impl IntoIterator<Item = Bookmark>) -> Self {
        self.bookmarks
            .write()
            .expect("lock poisoned")
            .extend(bookmarks);
        self
    }

    pub fn len(&self) -> usize {
        self.bookmarks.read().expect("lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every stored row regardless of owner, newest first.
    pub fn all(&self) -> Vec<Bookmark> {
        sorted(self.bookmarks.read().expect("lock poisoned").clone())
    }

    fn select(&self, predicate: impl Fn(&Bookmark) -> bool) -> Vec<Bookmark> {
        let rows = self.bookmarks.read().expect("lock poisoned");
        sorted(rows.iter().filter(|b| predicate(*b)).cloned().collect())
    }
}

/// Newest first. Rows are kept newest-first on insert, so the stable sort
/// breaks timestamp ties in favor of the later insert.
fn sorted(mut rows: Vec<Bookmark>) -> Vec<Bookmark> {
    rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    rows
}

impl BookmarkStore for MockBookmarkStore {
    async fn is_connected(&self) -> bool {
        self.is_connected
    }

    async fn list(&self, owner_id: &str) -> Result<Vec<Bookmark>, StoreError> {
        if self.failing {
            return Err(StoreError::Fetch("mock store unavailable".to_string()));
        }
        Ok(self.select(|b| b.user_id == owner_id))
    }

    async fn create(&self, input: BookmarkInsert) -> Result<Bookmark, StoreError> {
        if self.failing {
            return Err(StoreError::Create("mock store unavailable".to_string()));
        }

        let now = Utc::now();
        let bookmark = Bookmark {
            id: Uuid::new_v4(),
            url: input.url,
            title: input.title,
            summary: input.summary,
            favicon: input.favicon,
            tags: input.tags,
            user_id: input.user_id,
            created_at: now,
            updated_at: now,
        };

        self.bookmarks
            .write()
            .expect("lock poisoned")
            .insert(0, bookmark.clone());
        Ok(bookmark)
    }

    async fn update(
        &self,
        id: Uuid,
        owner_id: &str,
        changes: BookmarkUpdate,
    ) -> Result<Option<Bookmark>, StoreError> {
        if self.failing {
            return Err(StoreError::Update("mock store unavailable".to_string()));
        }

        let mut rows = self.bookmarks.write().expect("lock poisoned");
        let Some(bookmark) = rows
            .iter_mut()
            .find(|b| b.id == id && b.user_id == owner_id)
        else {
            return Ok(None);
        };

        changes.apply(bookmark, Utc::now());
        Ok(Some(bookmark.clone()))
    }

    async fn delete(&self, id: Uuid, owner_id: &str) -> Result<bool, StoreError> {
        if self.failing {
            return Err(StoreError::Delete("mock store unavailable".to_string()));
        }

        let mut rows = self.bookmarks.write().expect("lock poisoned");
        let before = rows.len();
        rows.retain(|b| !(b.id == id && b.user_id == owner_id));
        Ok(rows.len() < before)
    }

    async fn search(&self, owner_id: &str, query: &str) -> Result<Vec<Bookmark>, StoreError> {
        if self.failing {
            return Err(StoreError::Search("mock store unavailable".to_string()));
        }
        Ok(self.select(|b| b.user_id == owner_id && b.matches_query(query)))
    }

    async fn by_tags(&self, owner_id: &str, tags: &[String]) -> Result<Vec<Bookmark>, StoreError> {
        if self.failing {
            return Err(StoreError::ByTags("mock store unavailable".to_string()));
        }
        Ok(self.select(|b| b.user_id == owner_id && b.contains_all_tags(tags)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration};

    fn insert(user_id: &str, url: &str, tags: &[&str]) -> BookmarkInsert {
        BookmarkInsert {
            url: url.to_string(),
            title: format!("Title of {url}"),
            summary: "summary".to_string(),
            favicon: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            user_id: user_id.to_string(),
        }
    }

    fn seeded(user_id: &str, url: &str, created_at: DateTime<Utc>) -> Bookmark {
        Bookmark {
            id: Uuid::new_v4(),
            url: url.to_string(),
            title: url.to_string(),
            summary: String::new(),
            favicon: None,
            tags: vec![],
            user_id: user_id.to_string(),
            created_at,
            updated_at: created_at,
        }
    }

    #[tokio::test]
    async fn test_list_is_owner_scoped_and_newest_first() {
        let now = Utc::now();
        let old = seeded("alice", "https://old.example", now - Duration::days(2));
        let mid = seeded("alice", "https://mid.example", now - Duration::days(1));
        let other = seeded("bob", "https://bob.example", now);
        let store = MockBookmarkStore::new().with_bookmarks([old.clone(), other, mid.clone()]);

        let listed = store.list("alice").await.unwrap();
        let ids: Vec<Uuid> = listed.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![mid.id, old.id]);
    }

    #[tokio::test]
    async fn test_list_for_unknown_owner_is_empty() {
        let store = MockBookmarkStore::new();
        store.create(insert("alice", "https://a.example", &[])).await.unwrap();

        let listed = store.list("nobody").await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_timestamps() {
        let store = MockBookmarkStore::new();
        let created = store
            .create(insert("alice", "https://a.example", &["x"]))
            .await
            .unwrap();

        assert_eq!(created.user_id, "alice");
        assert_eq!(created.tags, vec!["x".to_string()]);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_rapid_creates_list_latest_first() {
        let store = MockBookmarkStore::new();
        let first = store.create(insert("alice", "https://1.example", &[])).await.unwrap();
        let second = store.create(insert("alice", "https://2.example", &[])).await.unwrap();

        let listed = store.list("alice").await.unwrap();
        assert_eq!(listed[0].id, second.id);
        assert_eq!(listed[1].id, first.id);
    }

    #[tokio::test]
    async fn test_delete_never_crosses_owners() {
        let store = MockBookmarkStore::new();
        let alice = store.create(insert("alice", "https://a.example", &[])).await.unwrap();

        assert!(!store.delete(alice.id, "mallory").await.unwrap());
        assert_eq!(store.len(), 1);

        assert!(store.delete(alice.id, "alice").await.unwrap());
        assert!(store.is_empty());

        assert!(!store.delete(alice.id, "alice").await.unwrap());
    }

    #[tokio::test]
    async fn test_update_patches_and_is_owner_scoped() {
        let store = MockBookmarkStore::new();
        let created = store
            .create(insert("alice", "https://a.example", &["x"]))
            .await
            .unwrap();

        let foreign = store
            .update(created.id, "mallory", BookmarkUpdate::default())
            .await
            .unwrap();
        assert!(foreign.is_none());

        let updated = store
            .update(
                created.id,
                "alice",
                BookmarkUpdate {
                    summary: Some("edited".to_string()),
                    tags: Some(vec!["y".to_string()]),
                    ..Default::default()
                },
            )
            .await
            .unwrap()
            .expect("owner can update");

        assert_eq!(updated.summary, "edited");
        assert_eq!(updated.tags, vec!["y".to_string()]);
        assert_eq!(updated.title, created.title);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.list("alice").await.unwrap()[0], updated);
    }

    #[tokio::test]
    async fn test_search_and_by_tags() {
        let store = MockBookmarkStore::new();
        store
            .create(insert("alice", "https://docs.rs/axum", &["rust", "web"]))
            .await
            .unwrap();
        store
            .create(insert("alice", "https://python.org", &["python"]))
            .await
            .unwrap();
        store
            .create(insert("bob", "https://docs.rs/tokio", &["rust"]))
            .await
            .unwrap();

        let found = store.search("alice", "DOCS.RS").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].url, "https://docs.rs/axum");

        let tagged = store
            .by_tags("alice", &["rust".to_string(), "web".to_string()])
            .await
            .unwrap();
        assert_eq!(tagged.len(), 1);

        let partial = store
            .by_tags("alice", &["rust".to_string(), "python".to_string()])
            .await
            .unwrap();
        assert!(partial.is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_reports_operation_specific_errors() {
        let store = MockBookmarkStore::failing();
        assert!(!store.is_connected().await);
        assert!(matches!(store.list("a").await, Err(StoreError::Fetch(_))));
        assert!(matches!(
            store.create(insert("a", "https://a.example", &[])).await,
            Err(StoreError::Create(_))
        ));
        assert!(matches!(
            store.delete(Uuid::new_v4(), "a").await,
            Err(StoreError::Delete(_))
        ));
        assert!(matches!(
            store.update(Uuid::new_v4(), "a", BookmarkUpdate::default()).await,
            Err(StoreError::Update(_))
        ));
        assert!(matches!(store.search("a", "q").await, Err(StoreError::Search(_))));
        assert!(matches!(store.by_tags("a", &[]).await, Err(StoreError::ByTags(_))));
    }
}

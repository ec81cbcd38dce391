//! Bookmarks: the persisted record, the store accessor, and the HTTP handlers.

pub mod mock;
pub mod pg;
pub mod routes;
pub mod store;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub use mock::MockBookmarkStore;
pub use pg::PgBookmarkStore;
pub use store::{BookmarkStore, StoreError};

/// A saved link. Field names are the wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Bookmark {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub summary: String,
    pub favicon: Option<String>,
    pub tags: Vec<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied on insert; id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkInsert {
    pub url: String,
    pub title: String,
    pub summary: String,
    pub favicon: Option<String>,
    pub tags: Vec<String>,
    pub user_id: String,
}

/// Partial update. `None` leaves a field untouched; `favicon: Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkUpdate {
    pub url: Option<String>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub favicon: Option<Option<String>>,
    pub tags: Option<Vec<String>>,
}

impl BookmarkUpdate {
    /// Apply the provided fields to `bookmark` and stamp `updated_at`.
    pub fn apply(self, bookmark: &mut Bookmark, now: DateTime<Utc>) {
        if let Some(url) = self.url {
            bookmark.url = url;
        }
        if let Some(title) = self.title {
            bookmark.title = title;
        }
        if let Some(summary) = self.summary {
            bookmark.summary = summary;
        }
        if let Some(favicon) = self.favicon {
            bookmark.favicon = favicon;
        }
        if let Some(tags) = self.tags {
            bookmark.tags = tags;
        }
        bookmark.updated_at = now;
    }
}

impl Bookmark {
    /// Case-insensitive substring match against title, summary, or url.
    pub fn matches_query(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.summary.to_lowercase().contains(&needle)
            || self.url.to_lowercase().contains(&needle)
    }

    /// True when every tag in `tags` is present on this bookmark.
    pub fn contains_all_tags(&self, tags: &[String]) -> bool {
        tags.iter().all(|tag| self.tags.contains(tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bookmark {
        let now = Utc::now();
        Bookmark {
            id: Uuid::new_v4(),
            url: "https://Example.com/rust".to_string(),
            title: "Rust Book".to_string(),
            summary: "Learn ownership".to_string(),
            favicon: Some("https://www.google.com/s2/favicons?domain=example.com".to_string()),
            tags: vec!["rust".to_string(), "books".to_string()],
            user_id: "u1".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let mut bookmark = sample();
        let before = bookmark.clone();
        let later = before.updated_at + chrono::Duration::seconds(5);

        BookmarkUpdate {
            title: Some("Renamed".to_string()),
            favicon: Some(None),
            ..Default::default()
        }
        .apply(&mut bookmark, later);

        assert_eq!(bookmark.title, "Renamed");
        assert_eq!(bookmark.favicon, None);
        assert_eq!(bookmark.url, before.url);
        assert_eq!(bookmark.summary, before.summary);
        assert_eq!(bookmark.tags, before.tags);
        assert_eq!(bookmark.created_at, before.created_at);
        assert_eq!(bookmark.updated_at, later);
    }

    #[test]
    fn test_matches_query_is_case_insensitive() {
        let bookmark = sample();
        assert!(bookmark.matches_query("rust book"));
        assert!(bookmark.matches_query("OWNERSHIP"));
        assert!(bookmark.matches_query("example.com"));
        assert!(!bookmark.matches_query("python"));
    }

    #[test]
    fn test_contains_all_tags() {
        let bookmark = sample();
        assert!(bookmark.contains_all_tags(&["rust".to_string()]));
        assert!(bookmark.contains_all_tags(&["books".to_string(), "rust".to_string()]));
        assert!(!bookmark.contains_all_tags(&["rust".to_string(), "go".to_string()]));
        assert!(bookmark.contains_all_tags(&[]));
    }

    #[test]
    fn test_wire_format_uses_snake_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        for field in [
            "id",
            "url",
            "title",
            "summary",
            "favicon",
            "tags",
            "user_id",
            "created_at",
            "updated_at",
        ] {
            assert!(json.get(field).is_some(), "missing field {field}");
        }
    }
}

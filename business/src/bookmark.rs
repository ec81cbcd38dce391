//! The bookmark record as the client receives it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved link. Field names match the Bookmark API's wire format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    /// Opaque, server-assigned.
    pub id: String,
    pub url: String,
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub favicon: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Bookmark {
    /// Card date, e.g. `Mar 5, 2024`.
    pub fn date_label(&self) -> String {
        self.created_at.format("%b %-d, %Y").to_string()
    }

    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.tags.contains(tag))
    }

    /// Case-insensitive substring match on title, summary, or url.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.title, &self.summary, &self.url]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// Header count, e.g. `1 saved link` or `3 saved links`.
pub fn saved_count_label(count: usize) -> String {
    if count == 1 {
        "1 saved link".to_string()
    } else {
        format!("{count} saved links")
    }
}

//! Search and tag filtering over the in-memory bookmark list.
//!
//! Everything here is a pure function of the list and the filter; nothing
//! talks to the network.

use crate::bookmark::Bookmark;
use std::collections::BTreeSet;

/// Bookmarks matching `query` and `selected_tags`, in their original order.
///
/// A bookmark matches when the query is empty or found (case-insensitively) in
/// its title, summary, or url, and when no tag is selected or it carries at
/// least one selected tag.
pub fn filter<'a>(
    list: &'a [Bookmark],
    query: &str,
    selected_tags: &[String],
) -> Vec<&'a Bookmark> {
    list.iter()
        .filter(|bookmark| query.is_empty() || bookmark.matches_query(query))
        .filter(|bookmark| selected_tags.is_empty() || bookmark.has_any_tag(selected_tags))
        .collect()
}

/// Sorted union of every tag in `list`.
pub fn available_tags(list: &[Bookmark]) -> Vec<String> {
    list.iter()
        .flat_map(|bookmark| bookmark.tags.iter().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// The user's current search text and tag selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkFilter {
    query: String,
    selected_tags: Vec<String>,
}

impl BookmarkFilter {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn is_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Select `tag`, or deselect it when already selected.
    pub fn toggle_tag(&mut self, tag: &str) {
        if self.is_selected(tag) {
            self.selected_tags.retain(|t| t != tag);
        } else {
            self.selected_tags.push(tag.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.query.clear();
        self.selected_tags.clear();
    }

    pub fn has_active_filters(&self) -> bool {
        !self.query.is_empty() || !self.selected_tags.is_empty()
    }

    pub fn apply<'a>(&self, list: &'a [Bookmark]) -> Vec<&'a Bookmark> {
        filter(list, &self.query, &self.selected_tags)
    }
}

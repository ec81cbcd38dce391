//! Home page state: the signed-in user's bookmarks plus the filter over them.
//!
//! The list is fetched once per sign-in and then kept in memory. Creates and
//! deletes go through the Bookmark API and patch the local list only after the
//! server has answered.

use crate::add_bookmark::NewBookmark;
use crate::api::{ApiClientError, BookmarksClient};
use crate::auth_state::AuthContext;
use crate::bookmark::{Bookmark, saved_count_label};
use crate::filter::{BookmarkFilter, available_tags};
use crate::route::Route;
use log::{error, info};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewPhase {
    /// Session not resolved yet, or the first fetch is in flight.
    #[default]
    Loading,
    /// No user; the caller should navigate to [`Route::Login`].
    Unauthenticated,
    /// Signed in and the list has been fetched (possibly empty on failure).
    Ready { user_id: String },
}

/// What the home page body should show.
#[derive(Debug, PartialEq, Eq)]
pub enum ViewContent<'a> {
    Loading,
    /// The user has no bookmarks at all.
    Empty,
    /// Bookmarks exist but none match the current filter.
    NoMatches,
    Bookmarks(Vec<&'a Bookmark>),
}

#[derive(Debug, Default)]
pub struct BookmarksView {
    phase: ViewPhase,
    bookmarks: Vec<Bookmark>,
    pub filter: BookmarkFilter,
}

impl BookmarksView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> &ViewPhase {
        &self.phase
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    fn user_id(&self) -> Option<&str> {
        match &self.phase {
            ViewPhase::Ready { user_id } => Some(user_id),
            _ => None,
        }
    }

    /// React to a session change.
    ///
    /// Returns the route to navigate to when the user must sign in. The list
    /// is fetched on the transition into a signed-in state and not again until
    /// the user changes.
    pub async fn sync_auth(
        &mut self,
        auth: &AuthContext,
        client: &BookmarksClient,
    ) -> Option<Route> {
        if auth.loading {
            self.phase = ViewPhase::Loading;
            return None;
        }

        let Some(user) = &auth.user else {
            self.phase = ViewPhase::Unauthenticated;
            self.bookmarks.clear();
            self.filter.clear();
            return Some(Route::Login);
        };

        if self.user_id() == Some(user.uid.as_str()) {
            return None;
        }

        self.phase = ViewPhase::Loading;
        self.filter.clear();
        self.bookmarks = match client.list(&user.uid).await {
            Ok(bookmarks) => {
                info!("Fetched {} bookmarks", bookmarks.len());
                bookmarks
            }
            Err(e) => {
                error!("Error fetching bookmarks: {e}");
                Vec::new()
            }
        };
        self.phase = ViewPhase::Ready {
            user_id: user.uid.clone(),
        };
        None
    }

    /// Create a bookmark and prepend the server's record.
    ///
    /// Does nothing without a signed-in user. On failure the list is
    /// untouched and the error is logged and returned so the form can stay open.
    pub async fn add(
        &mut self,
        client: &BookmarksClient,
        bookmark: &NewBookmark,
    ) -> Result<(), ApiClientError> {
        let Some(user_id) = self.user_id() else {
            return Ok(());
        };

        match client.create(user_id, bookmark).await {
            Ok(created) => {
                self.bookmarks.insert(0, created);
                Ok(())
            }
            Err(e) => {
                error!("Error adding bookmark: {e}");
                Err(e)
            }
        }
    }

    /// Delete a bookmark; it is removed locally only once the server confirms.
    ///
    /// Returns whether the bookmark was removed.
    pub async fn delete(&mut self, client: &BookmarksClient, id: &str) -> bool {
        let Some(user_id) = self.user_id() else {
            return false;
        };

        match client.delete(id, user_id).await {
            Ok(()) => {
                self.bookmarks.retain(|bookmark| bookmark.id != id);
                true
            }
            Err(e) => {
                error!("Error deleting bookmark: {e}");
                false
            }
        }
    }

    pub fn visible(&self) -> Vec<&Bookmark> {
        self.filter.apply(&self.bookmarks)
    }

    pub fn available_tags(&self) -> Vec<String> {
        available_tags(&self.bookmarks)
    }

    /// Count of all bookmarks, independent of the filter.
    pub fn saved_count_label(&self) -> String {
        saved_count_label(self.bookmarks.len())
    }

    pub fn content(&self) -> ViewContent<'_> {
        if !matches!(self.phase, ViewPhase::Ready { .. }) {
            return ViewContent::Loading;
        }
        if self.bookmarks.is_empty() {
            return ViewContent::Empty;
        }
        match self.visible() {
            visible if visible.is_empty() => ViewContent::NoMatches,
            visible => ViewContent::Bookmarks(visible),
        }
    }
}

//! Client-side logic for linkshelf: session handling, the Bookmark API client,
//! and the home page's list and filter state.

pub mod add_bookmark;
pub mod api;
mod api_status;
pub mod auth_state;
pub mod bookmark;
pub mod bookmarks_view;
pub mod config;
pub mod filter;
pub mod identity;
pub mod route;

pub use add_bookmark::{AddBookmarkForm, FormError, NewBookmark};
pub use api::{ApiClientError, BookmarksClient, ServiceHealth};
pub use api_status::{APIAvailability, ApiStatus};
pub use auth_state::{AuthContext, logout};
pub use bookmark::{Bookmark, saved_count_label};
pub use bookmarks_view::{BookmarksView, ViewContent, ViewPhase};
pub use config::{BusinessConfig, IdentityConfig};
pub use filter::{BookmarkFilter, available_tags, filter};
pub use identity::{IdentityClient, IdentityError, Session, SessionState, User};
pub use route::Route;

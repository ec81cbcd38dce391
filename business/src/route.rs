//! Route state for page navigation.

use serde::{Deserialize, Serialize};

/// The page the client should display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Shown when no user is signed in
    #[default]
    Login,
    /// The bookmark list, shown once a user is signed in
    Home,
}

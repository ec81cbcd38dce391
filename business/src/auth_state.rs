//! Authentication context handed to views.

use crate::identity::{IdentityClient, SessionState, User};
use crate::route::Route;

/// What a view needs to know about the session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthContext {
    pub user: Option<User>,
    /// True until the provider has reported a session state.
    pub loading: bool,
}

impl AuthContext {
    pub fn from_session(state: &SessionState) -> Self {
        match state {
            SessionState::Unknown => Self {
                user: None,
                loading: true,
            },
            SessionState::SignedOut => Self {
                user: None,
                loading: false,
            },
            SessionState::SignedIn(session) => Self {
                user: Some(session.user.clone()),
                loading: false,
            },
        }
    }

    pub fn current(identity: &IdentityClient) -> Self {
        Self::from_session(&identity.current())
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Where to send the user: nowhere while loading, login when signed out.
    pub fn route(&self) -> Option<Route> {
        match (&self.user, self.loading) {
            (_, true) => None,
            (Some(_), false) => Some(Route::Home),
            (None, false) => Some(Route::Login),
        }
    }
}

/// Sign out through the provider and return the page to show next.
pub fn logout(identity: &IdentityClient) -> Route {
    identity.sign_out();
    Route::Login
}

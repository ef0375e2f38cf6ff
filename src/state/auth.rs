//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Written only by `state::session`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// `loading` stays `true` until the stored session (if any) has been
/// restored, so guards do not redirect a returning user to `/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// Initial state before the provider has been consulted.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name for the navigation bar; empty when signed out.
    pub fn username(&self) -> String {
        self.user.as_ref().map(|u| u.username.clone()).unwrap_or_default()
    }
}

//! Session adapter: mirrors the identity provider's session into [`AuthState`].
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call `login` / `register` / `logout`; the root component calls
//! `watch` once so every provider transition (including ones the adapter did
//! not start, such as a restored session) is reflected in the user cell.
//!
//! INVARIANT
//! =========
//! `AuthState::user` is `Some` iff the provider reports an authenticated
//! session with a user record, whichever path (adoption, a new session, or
//! `watch`) wrote it. The only write that can briefly lead the
//! provider is `logout`, which clears the cell before the sign-out request.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use super::auth::AuthState;
use super::cell::StateCell;
use crate::net::identity::{AuthError, IdentityProvider, SubscriptionId};
use crate::net::types::{AuthChange, GUEST_USERNAME, ProviderSession, ProviderUser, UNKNOWN_EMAIL, User, local_part};

/// Binds one identity provider to one auth state cell.
#[derive(Clone, Debug)]
pub struct SessionAdapter<P, C> {
    provider: P,
    store: C,
}

impl<P, C> SessionAdapter<P, C>
where
    P: IdentityProvider,
    C: StateCell<AuthState>,
{
    pub fn new(provider: P, store: C) -> Self {
        Self { provider, store }
    }

    /// The current local user.
    pub fn user(&self) -> Option<User> {
        self.store.snapshot().user
    }

    /// Sign in with email and password.
    ///
    /// An existing provider session is adopted instead of signing in again.
    /// Resolves to `None` when the provider accepted the credentials without
    /// opening a session.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; local state is left unchanged.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>, AuthError> {
        if let Some(session) = self.provider.session() {
            return Ok(self.adopt_existing(&session));
        }
        let session = self.provider.sign_in(email, password).await?;
        Ok(self.adopt_new(session.as_ref(), local_part(email)))
    }

    /// Create an account whose display name is `username`.
    ///
    /// Same adoption rule as [`Self::login`]. Resolves to `None` when the
    /// provider holds the account for email verification.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`AuthError`]; local state is left unchanged.
    pub async fn register(&self, email: &str, password: &str, username: &str) -> Result<Option<User>, AuthError> {
        if let Some(session) = self.provider.session() {
            return Ok(self.adopt_existing(&session));
        }
        let session = self.provider.sign_up(email, password, username).await?;
        Ok(self.adopt_new(session.as_ref(), Some(username)))
    }

    /// Clear the local user, then end the provider session.
    pub async fn logout(&self) {
        self.set_user(None);
        self.provider.sign_out().await;
    }

    /// Mirror every provider transition into the auth cell.
    ///
    /// Applies the provider's current state immediately. The returned id
    /// detaches the observer via [`IdentityProvider::unsubscribe`].
    pub fn watch(&self) -> SubscriptionId
    where
        C: Send + Sync + 'static,
    {
        let store = self.store.clone();
        let id = self.provider.subscribe(Arc::new(move |change: &AuthChange| {
            let user = change.local_user();
            store.modify(|state| state.user = user);
        }));
        let current = AuthChange::from_session(self.provider.session().as_ref());
        self.set_user(current.local_user());
        id
    }

    /// Apply the same rule as `watch`, so adoption and passive sync always
    /// agree on the user for a given session.
    fn adopt_existing(&self, session: &ProviderSession) -> Option<User> {
        log::info!("already signed in; adopting existing session");
        let user = AuthChange::from_session(Some(session)).local_user();
        self.set_user(user.clone());
        user
    }

    /// A session without a user record yields no local user, as in `watch`.
    fn adopt_new(&self, session: Option<&ProviderSession>, fallback_username: Option<&str>) -> Option<User> {
        let provider_user = session?.user.as_ref();
        let user = provider_user.map(|u| user_from_new_session(u, fallback_username));
        self.set_user(user.clone());
        user
    }

    fn set_user(&self, user: Option<User>) {
        self.store.modify(|state| state.user = user);
    }
}

/// Derive the user for a session the adapter just opened.
///
/// Unlike [`User::from_provider`], the username falls back to what the caller
/// typed (email local part for login, requested username for register).
fn user_from_new_session(user: &ProviderUser, fallback_username: Option<&str>) -> User {
    let username = user
        .display_name()
        .or(fallback_username.filter(|name| !name.is_empty()))
        .unwrap_or(GUEST_USERNAME);
    User {
        email: user.email().unwrap_or(UNKNOWN_EMAIL).to_owned(),
        username: username.to_owned(),
    }
}

//! Identity provider boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session adapter (`state::session`) only talks to this trait, so the
//! concrete provider (`nhost::NhostClient`) is passed in rather than reached
//! through a global, and tests can substitute an in-memory fake.
//!
//! ERROR HANDLING
//! ==============
//! Provider-reported failures keep the provider's message verbatim so the
//! login and register pages can show it as-is.

use std::future::Future;
use std::sync::Arc;

use super::types::{AuthChange, ProviderSession};

/// Errors produced by identity provider operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The provider rejected the request; `message` is the provider's text.
    #[error("{message}")]
    Provider { status: u16, message: String },

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The provider's response body could not be decoded.
    #[error("unexpected auth response: {0}")]
    Decode(String),

    /// Network auth is only available in the browser build.
    #[error("identity provider not available outside the browser")]
    Unavailable,
}

/// Callback invoked on every provider status transition.
pub type AuthListener = Arc<dyn Fn(&AuthChange) + Send + Sync>;

/// Handle returned by [`IdentityProvider::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// Operations the app needs from an external identity provider.
///
/// `sign_in`/`sign_up` resolve to the new session, or `None` when the
/// provider accepted the request without opening one (e.g. sign-up pending
/// email verification).
pub trait IdentityProvider {
    /// Session currently held by the provider, if any. Never hits the network.
    fn session(&self) -> Option<ProviderSession>;

    fn sign_in(&self, email: &str, password: &str)
    -> impl Future<Output = Result<Option<ProviderSession>, AuthError>>;

    fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> impl Future<Output = Result<Option<ProviderSession>, AuthError>>;

    /// Drop the current session. Failures are the provider's concern.
    fn sign_out(&self) -> impl Future<Output = ()>;

    /// Register `listener` for status transitions until unsubscribed.
    fn subscribe(&self, listener: AuthListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);
}

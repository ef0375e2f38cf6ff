//! Nhost Auth client implementing [`IdentityProvider`].
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, refresh token kept in
//! `localStorage` so a reload can restore the session.
//! Native builds: session bookkeeping and subscriptions work, network calls
//! return [`AuthError::Unavailable`].
//!
//! DESIGN
//! ======
//! The session and listener list sit behind one `Arc<Mutex<_>>` so the handle
//! is `Clone + Send + Sync` and can live in Leptos context. Listeners are
//! cloned out and invoked after the lock is released, so a listener may call
//! back into the client.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "nhost_test.rs"]
mod nhost_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use super::identity::{AuthError, AuthListener, IdentityProvider, SubscriptionId};
use super::types::{AuthChange, ProviderSession};
use crate::config::IdentityConfig;
use crate::util::storage;

/// `localStorage` key for the refresh token, shared with the Nhost JS SDK.
pub const REFRESH_TOKEN_KEY: &str = "nhostRefreshToken";

#[derive(Default)]
struct Shared {
    session: Option<ProviderSession>,
    listeners: Vec<(SubscriptionId, AuthListener)>,
    next_id: u64,
}

/// Handle to one Nhost project's auth service.
#[derive(Clone)]
pub struct NhostClient {
    base_url: String,
    shared: Arc<Mutex<Shared>>,
}

impl std::fmt::Debug for NhostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NhostClient")
            .field("base_url", &self.base_url)
            .field("signed_in", &self.shared().session.is_some())
            .finish_non_exhaustive()
    }
}

impl NhostClient {
    pub fn new(config: &IdentityConfig) -> Self {
        Self {
            base_url: config.base_url(),
            shared: Arc::new(Mutex::new(Shared::default())),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn shared(&self) -> MutexGuard<'_, Shared> {
        self.shared.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the held session, persist its refresh token, and notify every
    /// listener. Returns the session that was replaced.
    fn set_session(&self, session: Option<ProviderSession>) -> Option<ProviderSession> {
        match &session {
            Some(s) => storage::save_string(REFRESH_TOKEN_KEY, &s.refresh_token),
            None => storage::remove(REFRESH_TOKEN_KEY),
        }
        let change = AuthChange::from_session(session.as_ref());
        let (previous, listeners) = {
            let mut shared = self.shared();
            let previous = std::mem::replace(&mut shared.session, session);
            let listeners: Vec<AuthListener> = shared.listeners.iter().map(|(_, l)| Arc::clone(l)).collect();
            (previous, listeners)
        };
        for listener in listeners {
            listener(&change);
        }
        previous
    }

    /// Restore a session from the stored refresh token.
    ///
    /// Returns `Ok(true)` when a session was restored, `Ok(false)` when there
    /// was nothing to restore. A token the provider rejects is discarded.
    ///
    /// # Errors
    ///
    /// Returns the provider or transport error from the token exchange.
    pub async fn restore(&self) -> Result<bool, AuthError> {
        let Some(refresh_token) = storage::load_string(REFRESH_TOKEN_KEY) else {
            return Ok(false);
        };
        #[cfg(feature = "csr")]
        {
            let resp = match self.post_json("/token", &token_body(&refresh_token), None).await {
                Ok(resp) => resp,
                Err(e) => {
                    if matches!(e, AuthError::Provider { .. }) {
                        storage::remove(REFRESH_TOKEN_KEY);
                    }
                    return Err(e);
                }
            };
            let session: ProviderSession = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
            self.set_session(Some(session));
            Ok(true)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = refresh_token;
            Ok(false)
        }
    }

    #[cfg(feature = "csr")]
    async fn post_json<B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
        bearer: Option<&str>,
    ) -> Result<gloo_net::http::Response, AuthError> {
        let mut req = gloo_net::http::Request::post(&endpoint(&self.base_url, path));
        if let Some(token) = bearer {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }
        let resp = req
            .json(body)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            return Err(provider_error(status, &text));
        }
        Ok(resp)
    }

    /// Post credentials to `path` and adopt the session in the reply, if any.
    #[cfg(feature = "csr")]
    async fn open_session(&self, path: &str, body: serde_json::Value) -> Result<Option<ProviderSession>, AuthError> {
        let resp = self.post_json(path, &body, None).await?;
        let envelope: SessionEnvelope = resp.json().await.map_err(|e| AuthError::Decode(e.to_string()))?;
        if let Some(session) = &envelope.session {
            self.set_session(Some(session.clone()));
        }
        Ok(envelope.session)
    }
}

impl IdentityProvider for NhostClient {
    fn session(&self) -> Option<ProviderSession> {
        self.shared().session.clone()
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Option<ProviderSession>, AuthError> {
        #[cfg(feature = "csr")]
        {
            self.open_session("/signin/email-password", sign_in_body(email, password))
                .await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Option<ProviderSession>, AuthError> {
        #[cfg(feature = "csr")]
        {
            self.open_session("/signup/email-password", sign_up_body(email, password, display_name))
                .await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (email, password, display_name);
            Err(AuthError::Unavailable)
        }
    }

    async fn sign_out(&self) {
        let previous = self.set_session(None);
        #[cfg(feature = "csr")]
        {
            if let Some(session) = previous {
                let body = sign_out_body(&session.refresh_token);
                if let Err(e) = self.post_json("/signout", &body, Some(&session.access_token)).await {
                    log::warn!("sign-out request failed: {e}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = previous;
        }
    }

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let mut shared = self.shared();
        shared.next_id += 1;
        let id = SubscriptionId(shared.next_id);
        shared.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.shared().listeners.retain(|(existing, _)| *existing != id);
    }
}

/// Reply shape of the sign-in and sign-up endpoints.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct SessionEnvelope {
    #[serde(default)]
    session: Option<ProviderSession>,
}

/// Error body returned by Nhost Auth on non-2xx replies.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

/// Convert a non-2xx reply into an [`AuthError`], keeping the provider's
/// message when it sent one.
#[cfg(any(test, feature = "csr"))]
fn provider_error(status: u16, body: &str) -> AuthError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    let message = parsed
        .message
        .filter(|m| !m.is_empty())
        .or_else(|| parsed.error.filter(|e| !e.is_empty()).map(|e| format!("{status} {e}")))
        .unwrap_or_else(|| format!("auth request failed: {status}"));
    AuthError::Provider { status, message }
}

#[cfg(any(test, feature = "csr"))]
fn sign_in_body(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

#[cfg(any(test, feature = "csr"))]
fn sign_up_body(email: &str, password: &str, display_name: &str) -> serde_json::Value {
    serde_json::json!({
        "email": email,
        "password": password,
        "options": { "displayName": display_name },
    })
}

#[cfg(any(test, feature = "csr"))]
fn sign_out_body(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refreshToken": refresh_token, "all": false })
}

#[cfg(any(test, feature = "csr"))]
fn token_body(refresh_token: &str) -> serde_json::Value {
    serde_json::json!({ "refreshToken": refresh_token })
}

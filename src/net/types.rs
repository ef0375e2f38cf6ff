//! Shared DTOs for the identity provider and webhook boundaries.
//!
//! DESIGN
//! ======
//! Provider records keep every nullable field as an `Option` and treat empty
//! strings as absent, so derivations below never assume presence.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Email shown when the provider has no email on record.
pub const UNKNOWN_EMAIL: &str = "unknown";
/// Username shown when neither a display name nor an email is available.
pub const GUEST_USERNAME: &str = "Guest";
/// Title used when the webhook omits one.
pub const UNTITLED_VIDEO: &str = "Untitled Video";

/// The signed-in user as the UI sees it.
///
/// Always derived from the provider's session, never stored on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub username: String,
}

impl User {
    /// Derive a user from a provider session user.
    ///
    /// `username` is the display name, else the email's local part, else
    /// [`GUEST_USERNAME`]. `email` falls back to [`UNKNOWN_EMAIL`].
    pub fn from_provider(user: Option<&ProviderUser>) -> Self {
        let email = user.and_then(ProviderUser::email);
        let username = user
            .and_then(ProviderUser::display_name)
            .or_else(|| email.and_then(local_part))
            .unwrap_or(GUEST_USERNAME);
        Self {
            email: email.unwrap_or(UNKNOWN_EMAIL).to_owned(),
            username: username.to_owned(),
        }
    }
}

/// The part of an email address before the first `@`, if non-empty.
pub fn local_part(email: &str) -> Option<&str> {
    email.split('@').next().filter(|part| !part.is_empty())
}

/// User record as returned by Nhost Auth.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderUser {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl ProviderUser {
    /// Email address, if the provider has a non-empty one.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|v| !v.is_empty())
    }

    /// Display name, if the provider has a non-empty one.
    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref().filter(|v| !v.is_empty())
    }
}

/// Provider-issued proof of authentication.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderSession {
    pub access_token: String,
    pub refresh_token: String,
    #[serde(default)]
    pub user: Option<ProviderUser>,
}

/// Authentication status reported by the provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

/// Payload delivered to provider subscribers on every status transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthChange {
    pub status: AuthStatus,
    pub user: Option<ProviderUser>,
}

impl AuthChange {
    /// Describe the provider state implied by an optional session.
    pub fn from_session(session: Option<&ProviderSession>) -> Self {
        match session {
            Some(session) => Self {
                status: AuthStatus::Authenticated,
                user: session.user.clone(),
            },
            None => Self {
                status: AuthStatus::Unauthenticated,
                user: None,
            },
        }
    }

    /// The local user this change implies: present only when authenticated
    /// with a user record.
    pub fn local_user(&self) -> Option<User> {
        match (self.status, &self.user) {
            (AuthStatus::Authenticated, Some(user)) => Some(User::from_provider(Some(user))),
            _ => None,
        }
    }
}

/// One generated summary, held in memory for the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary {
    pub title: String,
    pub summary: String,
    /// ISO-8601 time the summary arrived.
    pub timestamp: String,
}

impl Summary {
    /// Build a summary from a webhook response, stamping it with `timestamp`.
    pub fn from_response(response: WebhookResponse, timestamp: String) -> Self {
        let title = response
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| UNTITLED_VIDEO.to_owned());
        Self {
            title,
            summary: response.summary,
            timestamp,
        }
    }
}

/// Body posted to the summarization webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    pub video_url: String,
}

/// Body expected back from the summarization webhook.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookResponse {
    #[serde(default)]
    pub title: Option<String>,
    pub summary: String,
}

//! Dashboard state and the summarize controller.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard page owns one [`DashboardState`] cell and drives it through
//! [`DashboardController::submit`]. History is session memory only.
//!
//! ERROR HANDLING
//! ==============
//! Webhook failures are logged and otherwise dropped: `current` and `history`
//! keep their previous values and only the loading flag resets. `submit`
//! still returns the error so callers can decide to surface it.
//!
//! SESSION BOUNDARY
//! ================
//! The state belongs to the signed-in user. [`DashboardController::watch_identity`]
//! resets it when the provider reports no user, and a reply that arrives after
//! a reset is dropped: `epoch` changes on every reset and `submit` only
//! records into the epoch it started in.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use std::sync::Arc;

use super::cell::StateCell;
use crate::net::identity::{IdentityProvider, SubscriptionId};
use crate::net::types::AuthChange;
use crate::net::types::Summary;
use crate::net::webhook::{SummaryWebhook, WebhookError};
use crate::util::clock;

/// Form input, loading flag, latest summary, and most-recent-first history.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub url: String,
    pub loading: bool,
    pub current: Option<Summary>,
    pub history: Vec<Summary>,
    /// Bumped by every reset; results are recorded only into their own epoch.
    pub epoch: u64,
}

impl DashboardState {
    /// Make `summary` current and prepend it to the history.
    pub fn record(&mut self, summary: Summary) {
        self.history.insert(0, summary.clone());
        self.current = Some(summary);
    }

    /// Forget everything and start a new epoch.
    pub fn reset(&mut self) {
        *self = Self {
            epoch: self.epoch.wrapping_add(1),
            ..Self::default()
        };
    }
}

/// Why a submit produced no summary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("enter a video URL")]
    EmptyUrl,

    #[error("a summary is already being generated")]
    InFlight,

    #[error("the session ended before the summary arrived")]
    Stale,

    #[error(transparent)]
    Webhook(#[from] WebhookError),
}

/// Trim the input and require it to be non-empty.
///
/// # Errors
///
/// Returns [`SubmitError::EmptyUrl`] for blank input.
pub fn validate_video_url(raw: &str) -> Result<String, SubmitError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(SubmitError::EmptyUrl);
    }
    Ok(url.to_owned())
}

/// Sends video URLs to a webhook and records the results in a state cell.
#[derive(Clone, Debug)]
pub struct DashboardController<W, C> {
    webhook: W,
    store: C,
    clock: fn() -> String,
}

impl<W, C> DashboardController<W, C>
where
    W: SummaryWebhook,
    C: StateCell<DashboardState>,
{
    pub fn new(webhook: W, store: C) -> Self {
        Self {
            webhook,
            store,
            clock: clock::now_iso8601,
        }
    }

    /// Replace the timestamp source.
    #[must_use]
    pub fn with_clock(mut self, clock: fn() -> String) -> Self {
        self.clock = clock;
        self
    }

    pub fn set_url(&self, url: String) {
        self.store.modify(|state| state.url = url);
    }

    /// Drop the form, summaries, and any in-flight result.
    pub fn reset(&self) {
        self.store.modify(DashboardState::reset);
    }

    /// Reset the state whenever `provider` reports that no user is signed in.
    ///
    /// The returned id detaches the observer via [`IdentityProvider::unsubscribe`].
    pub fn watch_identity<P: IdentityProvider>(&self, provider: &P) -> SubscriptionId
    where
        C: Send + Sync + 'static,
    {
        let store = self.store.clone();
        provider.subscribe(Arc::new(move |change: &AuthChange| {
            if change.local_user().is_none() {
                store.modify(DashboardState::reset);
            }
        }))
    }

    /// Summarize `raw_url` and record the result.
    ///
    /// # Errors
    ///
    /// - [`SubmitError::EmptyUrl`] for blank input (no request sent)
    /// - [`SubmitError::InFlight`] while another submit is pending
    /// - [`SubmitError::Stale`] when the state was reset while the request
    ///   was pending; the reply is discarded and the state is not touched
    /// - [`SubmitError::Webhook`] when the webhook call fails; state is
    ///   unchanged apart from the loading flag
    pub async fn submit(&self, raw_url: &str) -> Result<Summary, SubmitError> {
        let url = validate_video_url(raw_url)?;

        let mut started = None;
        self.store.modify(|state| {
            if !state.loading {
                state.loading = true;
                started = Some(state.epoch);
            }
        });
        let Some(epoch) = started else {
            return Err(SubmitError::InFlight);
        };

        let reply = self.webhook.summarize(&url).await;
        if self.store.snapshot().epoch != epoch {
            log::info!("discarding summary for {url}: session ended while it was pending");
            return Err(SubmitError::Stale);
        }

        match reply {
            Ok(response) => {
                let summary = Summary::from_response(response, (self.clock)());
                log::debug!("summary generated for {url}: {}", summary.title);
                let recorded = summary.clone();
                self.store.modify(|state| {
                    state.record(recorded);
                    state.loading = false;
                });
                Ok(summary)
            }
            Err(e) => {
                log::error!("failed to generate summary for {url}: {e}");
                self.store.modify(|state| state.loading = false);
                Err(e.into())
            }
        }
    }
}

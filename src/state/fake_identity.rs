//! In-memory identity provider shared by the state tests.

use std::sync::{Arc, Mutex};

use crate::net::identity::{AuthError, AuthListener, IdentityProvider, SubscriptionId};
use crate::net::types::{AuthChange, ProviderSession, ProviderUser};

#[derive(Default)]
struct FakeInner {
    session: Option<ProviderSession>,
    reply: Option<Result<Option<ProviderSession>, AuthError>>,
    listeners: Vec<(SubscriptionId, AuthListener)>,
    next_id: u64,
    sign_in_calls: usize,
    sign_up_calls: usize,
    sign_out_calls: usize,
    last_display_name: Option<String>,
}

/// Opens a session for whatever email signs in, unless a reply is queued.
#[derive(Clone, Default)]
pub(crate) struct FakeProvider(Arc<Mutex<FakeInner>>);

impl FakeProvider {
    pub(crate) fn with_session(session: ProviderSession) -> Self {
        let fake = Self::default();
        fake.0.lock().unwrap().session = Some(session);
        fake
    }

    /// Answer the next sign-in or sign-up with `reply`.
    pub(crate) fn reply_with(&self, reply: Result<Option<ProviderSession>, AuthError>) {
        self.0.lock().unwrap().reply = Some(reply);
    }

    /// Replace the session and notify listeners, as a real provider would.
    pub(crate) fn transition(&self, session: Option<ProviderSession>) {
        let change = AuthChange::from_session(session.as_ref());
        let listeners: Vec<AuthListener> = {
            let mut inner = self.0.lock().unwrap();
            inner.session = session;
            inner.listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&change);
        }
    }

    /// `(sign_in, sign_up, sign_out)` call counts.
    pub(crate) fn calls(&self) -> (usize, usize, usize) {
        let inner = self.0.lock().unwrap();
        (inner.sign_in_calls, inner.sign_up_calls, inner.sign_out_calls)
    }

    pub(crate) fn last_display_name(&self) -> Option<String> {
        self.0.lock().unwrap().last_display_name.clone()
    }

    fn take_reply(&self, email: &str) -> Result<Option<ProviderSession>, AuthError> {
        let reply = self.0.lock().unwrap().reply.take();
        let reply = reply.unwrap_or_else(|| Ok(Some(session(Some(email), None))));
        if let Ok(Some(opened)) = &reply {
            self.transition(Some(opened.clone()));
        }
        reply
    }
}

impl IdentityProvider for FakeProvider {
    fn session(&self) -> Option<ProviderSession> {
        self.0.lock().unwrap().session.clone()
    }

    async fn sign_in(&self, email: &str, _password: &str) -> Result<Option<ProviderSession>, AuthError> {
        self.0.lock().unwrap().sign_in_calls += 1;
        self.take_reply(email)
    }

    async fn sign_up(
        &self,
        email: &str,
        _password: &str,
        display_name: &str,
    ) -> Result<Option<ProviderSession>, AuthError> {
        {
            let mut inner = self.0.lock().unwrap();
            inner.sign_up_calls += 1;
            inner.last_display_name = Some(display_name.to_owned());
        }
        self.take_reply(email)
    }

    async fn sign_out(&self) {
        self.0.lock().unwrap().sign_out_calls += 1;
        self.transition(None);
    }

    fn subscribe(&self, listener: AuthListener) -> SubscriptionId {
        let mut inner = self.0.lock().unwrap();
        inner.next_id += 1;
        let id = SubscriptionId(inner.next_id);
        inner.listeners.push((id, listener));
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.0.lock().unwrap().listeners.retain(|(existing, _)| *existing != id);
    }
}

/// A provider session for a user with the given email and display name.
pub(crate) fn session(email: Option<&str>, display_name: Option<&str>) -> ProviderSession {
    ProviderSession {
        access_token: "access".to_owned(),
        refresh_token: "refresh".to_owned(),
        user: Some(ProviderUser {
            id: "u-1".to_owned(),
            email: email.map(str::to_owned),
            display_name: display_name.map(str::to_owned),
        }),
    }
}

/// A provider session that carries no user record.
pub(crate) fn userless_session() -> ProviderSession {
    ProviderSession {
        user: None,
        ..session(None, None)
    }
}

//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::identity::IdentityProvider;
use crate::net::nhost::NhostClient;
use crate::net::webhook::HttpWebhook;
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardController, DashboardState};
use crate::state::session::SessionAdapter;

/// External service handles, constructed once and passed down via context.
#[derive(Clone, Debug)]
pub struct Services {
    pub identity: NhostClient,
    pub webhook: HttpWebhook,
}

impl Services {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            identity: NhostClient::new(&config.identity),
            webhook: HttpWebhook::new(config.webhook_url.clone()),
        }
    }
}

/// Root application component.
///
/// Builds the service handles, keeps the auth cell in sync with the identity
/// provider, clears the dashboard when the user signs out, and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = Services::from_config(&AppConfig::from_build_env());
    let auth = RwSignal::new(AuthState::pending());
    let dashboard = RwSignal::new(DashboardState::default());

    let auth_subscription = SessionAdapter::new(services.identity.clone(), auth).watch();
    let dashboard_subscription =
        DashboardController::new(services.webhook.clone(), dashboard).watch_identity(&services.identity);
    let identity = services.identity.clone();
    on_cleanup(move || {
        identity.unsubscribe(auth_subscription);
        identity.unsubscribe(dashboard_subscription);
    });

    restore_session(services.identity.clone(), auth);

    provide_context(services);
    provide_context(auth);
    provide_context(dashboard);

    view! {
        <Title text="VideoSummarizer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Exchange a stored refresh token for a session, then end the loading state.
/// The auth cell's user is filled in by the `watch` subscription.
fn restore_session(identity: NhostClient, auth: RwSignal<AuthState>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        if let Err(e) = identity.restore().await {
            log::warn!("session restore failed: {e}");
        }
        auth.update(|a| a.loading = false);
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = identity;
        auth.update(|a| a.loading = false);
    }
}

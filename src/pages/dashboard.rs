//! Dashboard page: submit a video URL and read the generated summary.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It wires the form to
//! `DashboardController` and the logout button to `SessionAdapter`, and
//! redirects to `/login` when no user is signed in.
//!
//! Webhook failures are not shown on the page; the controller logs them and
//! the previous summary stays on screen.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::components::history_list::HistoryList;
use crate::components::nav_bar::NavBar;
use crate::components::summary_card::SummaryCard;
use crate::state::auth::AuthState;
use crate::state::dashboard::{DashboardController, DashboardState};
use crate::state::session::SessionAdapter;
use crate::util::auth::install_unauth_redirect;

pub(crate) fn submit_label(loading: bool) -> &'static str {
    if loading { "Generating Summary..." } else { "Generate Summary" }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let dashboard = expect_context::<RwSignal<DashboardState>>();
    let services = expect_context::<Services>();
    install_unauth_redirect(auth, use_navigate());

    let controller = DashboardController::new(services.webhook.clone(), dashboard);
    let session = SessionAdapter::new(services.identity.clone(), auth);

    let input_controller = controller.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        let url = dashboard.get_untracked().url;
        leptos::task::spawn_local(async move {
            // Failures are already logged by the controller.
            let _ = controller.submit(&url).await;
        });
    };

    let on_logout = Callback::new(move |()| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
        });
    });

    view! {
        <Show
            when=move || !auth.get().loading && auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="dashboard-page">
                        <p>{move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}</p>
                    </div>
                }
            }
        >
            <div class="dashboard-page">
                <NavBar username=Signal::derive(move || auth.get().username()) on_logout=on_logout/>

                <main class="dashboard-page__main">
                    <form class="summarize-form" on:submit=on_submit.clone()>
                        <label class="summarize-form__label" for="video-url">
                            "YouTube Video URL"
                        </label>
                        <input
                            id="video-url"
                            class="summarize-form__input"
                            type="url"
                            placeholder="https://www.youtube.com/watch?v=..."
                            required
                            prop:value=move || dashboard.get().url
                            on:input={
                                let controller = input_controller.clone();
                                move |ev| controller.set_url(event_target_value(&ev))
                            }
                        />
                        <button
                            class="summarize-form__submit"
                            type="submit"
                            disabled=move || dashboard.get().loading
                        >
                            {move || submit_label(dashboard.get().loading)}
                        </button>
                    </form>

                    {move || dashboard.get().current.map(|summary| view! { <SummaryCard summary=summary/> })}

                    <HistoryList history=Signal::derive(move || dashboard.get().history)/>
                </main>
            </div>
        </Show>
    }
}

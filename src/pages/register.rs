//! Register page: create an account with a username, email, and password.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::Services;
use crate::state::auth::AuthState;
use crate::state::session::SessionAdapter;
use crate::util::auth::install_authed_redirect;

/// Validated register form values.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RegisterInput {
    pub username: String,
    pub email: String,
    pub password: String,
}

pub(crate) fn validate_register_input(username: &str, email: &str, password: &str) -> Result<RegisterInput, &'static str> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Fill in username, email, and password.");
    }
    Ok(RegisterInput {
        username: username.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let services = expect_context::<Services>();
    install_authed_redirect(auth, use_navigate());

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let input = match validate_register_input(&username.get(), &email.get(), &password.get()) {
            Ok(input) => input,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let session = SessionAdapter::new(services.identity.clone(), auth);
        leptos::task::spawn_local(async move {
            match session.register(&input.email, &input.password, &input.username).await {
                Ok(Some(_)) => info.set(String::new()),
                Ok(None) => info.set("Account created. Verify your email, then sign in.".to_owned()),
                Err(e) => info.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"VideoSummarizer"</h1>
                <p class="login-card__subtitle">"Create your account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Create account" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <p class="login-card__footer">
                    "Already registered? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}

//! Top navigation bar with the signed-in username and a logout button.

use leptos::prelude::*;

#[component]
pub fn NavBar(#[prop(into)] username: Signal<String>, on_logout: Callback<()>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"VideoSummarizer"</span>
            <span class="nav-bar__spacer"></span>
            <span class="nav-bar__user">{move || username.get()}</span>
            <button class="btn nav-bar__logout" on:click=move |_| on_logout.run(()) title="Logout">
                "Logout"
            </button>
        </nav>
    }
}

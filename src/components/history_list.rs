//! Previous summaries from this session, most recent first.

use leptos::prelude::*;

use crate::net::types::Summary;
use crate::util::clock::display_timestamp;

#[component]
pub fn HistoryList(#[prop(into)] history: Signal<Vec<Summary>>) -> impl IntoView {
    view! {
        <Show when=move || !history.get().is_empty()>
            <section class="history-list">
                <h3 class="history-list__heading">"Previous Summaries"</h3>
                {move || {
                    history
                        .get()
                        .into_iter()
                        .map(|item| {
                            let when = display_timestamp(&item.timestamp);
                            view! {
                                <article class="history-list__item">
                                    <h4>{item.title}</h4>
                                    <p>{item.summary}</p>
                                    <p class="history-list__time">{when}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </section>
        </Show>
    }
}

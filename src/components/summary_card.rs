//! Card showing the most recent summary.

#[cfg(test)]
#[path = "summary_card_test.rs"]
mod summary_card_test;

use leptos::prelude::*;

use crate::net::types::Summary;
use crate::util::clock::display_timestamp;

pub(crate) fn generated_on(timestamp: &str) -> String {
    format!("Generated on: {}", display_timestamp(timestamp))
}

#[component]
pub fn SummaryCard(summary: Summary) -> impl IntoView {
    let generated = generated_on(&summary.timestamp);
    view! {
        <section class="summary-card">
            <h2 class="summary-card__title">{summary.title}</h2>
            <p class="summary-card__body">{summary.summary}</p>
            <p class="summary-card__meta">{generated}</p>
        </section>
    }
}

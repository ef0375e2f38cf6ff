//! # video-summarizer
//!
//! Leptos + WASM frontend for the video summarizer. Users sign in through
//! Nhost Auth, paste a video URL, and the dashboard posts it to the
//! summarization webhook and renders the returned title and summary.
//!
//! This crate contains pages, components, application state, the identity
//! provider client, and the webhook client. Browser-only glue is gated behind
//! the `csr` feature so state and controller logic test natively.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install console logging and mount the root component.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

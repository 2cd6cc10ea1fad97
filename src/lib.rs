//! # dualboard
//!
//! Leptos + WASM client for the dual-session collaborative canvas. Every room
//! is backed by two independently synced documents (`<room>-A` and `<room>-B`);
//! the client keeps both live and lets the user hot-swap which one is shown.
//!
//! This crate contains pages, components, application state, network types,
//! and the per-session websocket sync client. The server implementing
//! `/api/connect/*` and the asset/unfurl endpoints is a separate deployment.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered document in the browser.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

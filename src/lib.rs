//! # ptracker-client
//!
//! Leptos + WASM front end for the PTracker account service: login, signup
//! with email verification, password reset, and a protected home view.
//!
//! The crate is a thin orchestration layer over the remote auth API — every
//! authoritative decision (credential checks, code issuance and
//! verification, token lifecycle) happens server-side. What lives here is
//! the session store, the per-page flow state machines, the route guard,
//! and the HTTP gateway they dispatch through.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs the panic hook and console logger, then
/// hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if config::API_BASE_URL.starts_with("http://") {
        log::warn!(
            "API base URL {} uses plain HTTP; browsers block mixed content on HTTPS pages",
            config::API_BASE_URL
        );
    }

    leptos::mount::hydrate_body(app::App);
}

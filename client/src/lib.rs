//! # govreport-ui
//!
//! Leptos + WASM frontend for the GovReport citizen reporting site.
//!
//! This crate contains the landing and report-tracking pages, their
//! components, the session and tracking view state, and the thin network
//! layer that reads the externally managed auth session. It is rendered on
//! the server by `govreport-server` (`ssr` feature) and hydrated in the
//! browser (`hydrate` feature).

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

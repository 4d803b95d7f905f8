//! Cook & Recipe: a browser client for a recipe and ingredient API.
//!
//! Compiled to WASM with the `csr` feature for the browser; compiled
//! natively without it for unit tests, where the browser-only pieces are
//! stubbed out.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod security;
pub mod state;

/// Browser entry point: install panic/log hooks and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(crate::app::App);
}

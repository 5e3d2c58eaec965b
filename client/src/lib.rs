//! Leptos front end for the portfolio site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built twice: with `ssr` it is linked into the Axum server and renders the
//! shell and pages per request; with `hydrate` it compiles to WASM and takes
//! over the server markup in the browser.

pub mod app;
pub mod components;
pub mod i18n;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point called by the generated hydration script.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

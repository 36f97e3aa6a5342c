//! # client
//!
//! Leptos frontend for the tenant service portal: a landing page listing the
//! hosted services a tenant can open, rendered on the server and optionally
//! hydrated in the browser.
//!
//! Pure data shaping (service list construction, capitalization, catalogs)
//! lives in `util`, `i18n` and `state` so it can be tested natively.

pub mod app;
pub mod components;
pub mod i18n;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

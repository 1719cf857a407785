//! # client
//!
//! Leptos CSR frontend for the dashboard demo.
//!
//! Pages, route guards and the auth forms live here, along with the browser
//! backends (`localStorage`, `fetch`, timers) for the seams defined by the
//! `session` crate. Everything browser-specific is behind the `csr` feature so
//! the crate still builds and tests on the host.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

//! # client
//!
//! Leptos + WASM frontend for the interactive playground page: click, hover,
//! and keystroke demos, a persisted light/dark theme, a counter, an FAQ
//! accordion, and a validated signup form.
//!
//! All behavior lives in plain state structs under `state` and pure helpers
//! under `util`; `components` only bind DOM events to those handlers.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("hydrating playground");
    leptos::mount::hydrate_body(app::App);
}

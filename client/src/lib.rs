//! # amt-client
//!
//! Leptos + WASM frontend for the Absence Management Tool.
//!
//! This crate contains the page shell, the route pages, the generic form
//! dialog with its open/close lifecycle, the request and user drafts, and the
//! light/dark theme store. Browser glue is gated behind the `hydrate` feature
//! so the state logic is testable natively.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

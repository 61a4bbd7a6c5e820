//! # userhub-ui
//!
//! Leptos + WASM frontend for the user-management service: login,
//! registration, a backend health check, and a session-guarded dashboard.
//!
//! This crate contains pages, shared client state, the REST client, and the
//! response-normalization layer. All browser-only code (HTTP, localStorage,
//! timers) is gated behind the `hydrate` feature so the pure logic stays
//! testable on the native target.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod validate;

/// WASM entry point for the hydrate build.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}

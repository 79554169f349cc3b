//! # client
//!
//! Leptos frontend for the course storefront: catalog and cart pages built on
//! the `cart` crate's store.
//!
//! Built with `ssr` for the host binary and with `hydrate` for the WASM
//! bundle. Browser-only code (storage, console logging) sits behind the
//! `hydrate` feature so server rendering stays deterministic.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the server render.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger not installed: {e}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

//! # portal
//!
//! Leptos + WASM client gate for the medical office portal.
//!
//! The crate decides, for every navigable screen, whether the visitor may see
//! it. Sessions come from a hosted identity provider when a publishable key is
//! configured, or from an in-memory mock backend (with a visible advisory)
//! when it is not. The session core and the guard are plain Rust and build
//! natively; the `csr` feature adds the browser entry point and SDK bindings.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod guard;
pub mod pages;
pub mod session;

/// Browser entry point.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(app::App);
}

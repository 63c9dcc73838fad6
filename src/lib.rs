//! # zeta-web
//!
//! Leptos + WASM frontend for the Zeta credit-card and BNPL product: landing
//! page, authentication screens, dashboard, card management and transaction
//! views.
//!
//! The only decision logic on the client is the navigation guard in
//! [`guard`], which gates protected routes on the presence of an auth token
//! in browser storage. It is a UX convenience; the backend remains the
//! security boundary.

pub mod app;
pub mod config;
pub mod credentials;
pub mod error;
pub mod guard;
pub mod pages;
pub mod routes;

/// WASM entry point: installs browser logging and mounts the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    let _ = console_log::init_with_level(level);

    leptos::prelude::mount_to_body(app::App);
}

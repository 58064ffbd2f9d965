//! Webinars Web Frontend
//!
//! Leptos-based WASM frontend: a landing page and the webinar listing.

mod api;
mod app;
mod components;
mod logging;
mod pages;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logging::init(if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    });
    leptos::mount::mount_to_body(App);
}

//! Disaster Awareness - interactive single-page site
//!
//! Scroll-revealed sections, animated statistics, a quiz, flashcards and a
//! cycling hero background, built with Leptos and WebAssembly.

#![recursion_limit = "256"]

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}

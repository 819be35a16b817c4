//! AuthView - tabbed login / create-account form
//!
//! Each tab owns a form validated on submit against a declarative schema;
//! valid records go to a submit handler. Built with Leptos and WebAssembly.

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

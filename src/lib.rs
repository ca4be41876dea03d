//! LAFTEC - Liga Acadêmica Feminina de Tecnologia
//!
//! Landing page of the league, built with Leptos: server-side rendered by
//! axum and hydrated in the browser as WebAssembly.

#![recursion_limit = "512"]

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

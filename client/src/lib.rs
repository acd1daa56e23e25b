//! # client
//!
//! Leptos + WASM frontend for the MiniBoard task widget.
//!
//! Two pages share one app shell: a Kanban board (`/`) and a checklist
//! tracker with a focus timer (`/tracker`). All task logic lives in the
//! `tasks` crate; this crate holds pages, components, reactive state wrappers
//! and the browser glue (`localStorage`, theme, timer interval).

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&format!("console logger unavailable: {err}").into());
    }
    leptos::mount::hydrate_body(app::App);
}

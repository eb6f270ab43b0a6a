//! # chapterdesk
//!
//! Leptos + WASM frontend for an organizational website (events, awards,
//! team rosters) with an embedded admin panel for content management.
//!
//! The crate is built around one generic piece: a filtered, searchable,
//! paginated record browser with inline edit/delete, shared by every admin
//! preview list and parameterized by record type. Storage is an external
//! REST collaborator; this crate holds only in-memory snapshots.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client entry point: install panic/log hooks and hydrate the app shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}

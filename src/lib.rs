//! # storefront
//!
//! Leptos + WASM storefront single-page application with an admin panel.
//!
//! The crate's core is the session subsystem: a persisted session store
//! (`state::session`), an HTTP gateway attaching bearer credentials and
//! applying global 401 handling (`net::api`), and a navigation guard gating
//! routes by authentication and role (`util::guard`). Pages are thin
//! screens over that core.

pub mod app;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the session from storage, attempt the
/// profile fetch, then mount the app. `fetch_user` swallows its own
/// failures, so mounting always follows the attempt, whatever its outcome.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn boot() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;
    use crate::state::session::SessionStore;
    use crate::util::storage::BrowserStorage;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let store = SessionStore::new(Arc::new(BrowserStorage));
    leptos::task::spawn_local(async move {
        store.fetch_user().await;
        leptos::mount::mount_to_body(move || view! { <App store=store.clone()/> });
    });
}

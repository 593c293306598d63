//! Storefront landing page; the authenticated default route.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::guard::{self, RouteAccess};

#[component]
pub fn HomePage() -> impl IntoView {
    guard::install(RouteAccess::RequiresAuth);
    let session = expect_context::<SessionStore>().state();

    let greeting = move || {
        session.get().user.map_or_else(
            || "Welcome".to_owned(),
            |user| format!("Welcome, {}", user.name),
        )
    };

    view! {
        <section class="home-page">
            <h1>{greeting}</h1>
            <p>"Browse the catalog, or manage your account from the menu."</p>
        </section>
    }
}

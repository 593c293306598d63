//! About page; the only fully public route.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="about-page">
            <h1>"About"</h1>
            <p>"A small storefront with an admin panel for managing the catalog."</p>
        </section>
    }
}

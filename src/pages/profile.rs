//! Profile page showing the authenticated user's account details.

use leptos::prelude::*;

use crate::state::session::SessionStore;
use crate::util::guard::{self, RouteAccess};

#[component]
pub fn ProfilePage() -> impl IntoView {
    guard::install(RouteAccess::RequiresAuth);
    let session = expect_context::<SessionStore>().state();

    view! {
        <section class="profile-page">
            <h1>"Your profile"</h1>
            <Show when=move || session.get().user.is_some()>
                <dl class="profile-fields">
                    <dt>"Name"</dt>
                    <dd>{move || session.get().user.map(|user| user.name).unwrap_or_default()}</dd>
                    <dt>"Email"</dt>
                    <dd>{move || session.get().user.map(|user| user.email).unwrap_or_default()}</dd>
                    <dt>"Role"</dt>
                    <dd>
                        {move || {
                            session
                                .get()
                                .user
                                .and_then(|user| user.role)
                                .unwrap_or_else(|| "customer".to_owned())
                        }}
                    </dd>
                </dl>
            </Show>
        </section>
    }
}

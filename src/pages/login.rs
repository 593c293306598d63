//! Login page: credentials form wired to the session store.
//!
//! The guard preserves the intended destination in a `redirect` query
//! parameter; any authenticated visitor (fresh login or already signed in)
//! is sent on to that destination, which also covers guest-only duty for
//! this route.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Credentials;
use crate::state::session::SessionStore;
use crate::util::guard::HOME_PATH;

/// Where to go once authenticated: the guard-preserved `redirect` query
/// parameter, or home.
///
/// The destination may carry its own query string, and the guard appends it
/// verbatim as the final parameter, so everything after the marker is the
/// value. Splitting on `&` here would truncate it.
pub(crate) fn redirect_target(search: &str) -> String {
    let query = search.trim_start_matches('?');
    query
        .match_indices("redirect=")
        .find(|&(index, _)| index == 0 || query.as_bytes()[index - 1] == b'&')
        .map(|(index, marker)| &query[index + marker.len()..])
        .filter(|path| !path.is_empty())
        .map_or_else(|| HOME_PATH.to_owned(), str::to_owned)
}

pub(crate) fn validate_login_input(
    email: &str,
    password: &str,
) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok(Credentials {
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();
    let search = use_location().search;

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(
                &redirect_target(&search.get_untracked()),
                NavigateOptions::default(),
            );
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        match validate_login_input(&email.get(), &password.get()) {
            Ok(credentials) => {
                form_error.set(None);
                #[cfg(feature = "csr")]
                {
                    let store = store.clone();
                    leptos::task::spawn_local(async move {
                        store.login(&credentials).await;
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&store, credentials);
                }
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || session.get().loading>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || form_error.get().is_some()>
                    <p class="auth-message">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || session.get().error.is_some()>
                    <p class="auth-message auth-message--error">
                        {move || session.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <p class="auth-alt">
                    <a href="/register">"Create an account"</a>
                </p>
            </div>
        </div>
    }
}

//! Registration page: account form wired to the session store.
//!
//! A successful registration is an implicit login, so the page watches the
//! session and leaves for home once it turns authenticated. That same watch
//! covers guest-only duty for visitors who already hold a session.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::RegisterData;
use crate::state::session::SessionStore;
use crate::util::guard::HOME_PATH;

pub(crate) fn validate_register_input(
    name: &str,
    email: &str,
    password: &str,
    password_confirm: &str,
) -> Result<RegisterData, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() || password_confirm.is_empty() {
        return Err("Fill in every field.");
    }
    if password != password_confirm {
        return Err("Passwords do not match.");
    }
    Ok(RegisterData {
        name: name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
        password_confirm: password_confirm.to_owned(),
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let session = store.state();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirm = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<&'static str>);
    let navigate = use_navigate();

    Effect::new(move || {
        if session.get().is_authenticated() {
            navigate(HOME_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.get_untracked().loading {
            return;
        }
        match validate_register_input(
            &name.get(),
            &email.get(),
            &password.get(),
            &password_confirm.get(),
        ) {
            Ok(data) => {
                form_error.set(None);
                #[cfg(feature = "csr")]
                {
                    let store = store.clone();
                    leptos::task::spawn_local(async move {
                        store.register(&data).await;
                    });
                }
                #[cfg(not(feature = "csr"))]
                {
                    let _ = (&store, data);
                }
            }
            Err(message) => form_error.set(Some(message)),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Your name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || password_confirm.get()
                        on:input=move |ev| password_confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || session.get().loading>
                        "Register"
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
                    <a href="/login">"Already have an account? Sign in"</a>
                </p>
            </div>
        </div>
    }
}

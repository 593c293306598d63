//! HTTP gateway for the storefront REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every outgoing request reads the live bearer token from the session store
//! at send time, and every response passes through shared 401 handling: the
//! session is dropped and the browser is sent to the login route unless it
//! is already there. Call sites only see the typed result.
//!
//! Browser builds (`csr`) issue real HTTP via `gloo-net`; native builds
//! compile stubs returning transport errors so the classification logic
//! stays unit-testable on the host.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "csr"))]
use serde::Deserialize;

use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials, RegisterData, User};
use crate::state::session::SessionStore;
#[cfg(any(test, feature = "csr"))]
use crate::util::guard::LOGIN_PATH;

#[cfg(any(test, feature = "csr"))]
const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// API host, overridable at build time for deployed environments.
#[cfg(any(test, feature = "csr"))]
fn base_url() -> &'static str {
    option_env!("STOREFRONT_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
}

#[cfg(any(test, feature = "csr"))]
fn endpoint(path: &str) -> String {
    format!("{}{path}", base_url())
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Exchange credentials for a token at `POST /auth/login`.
///
/// # Errors
///
/// Returns the classified failure; the session store reduces it to a
/// user-facing message.
pub async fn login(
    store: &SessionStore,
    credentials: &Credentials,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(store, "/auth/login", credentials).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, credentials);
        Err(no_transport())
    }
}

/// Create an account at `POST /auth/register`.
///
/// # Errors
///
/// Returns the classified failure; the session store reduces it to a
/// user-facing message.
pub async fn register(
    store: &SessionStore,
    data: &RegisterData,
) -> Result<AuthResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        post_json(store, "/auth/register", data).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (store, data);
        Err(no_transport())
    }
}

/// Fetch the profile for the stored token from `GET /auth/me`.
///
/// # Errors
///
/// Returns the classified failure; a 401/403 tells the caller the token is
/// stale.
pub async fn me(store: &SessionStore) -> Result<User, ApiError> {
    #[cfg(feature = "csr")]
    {
        let response = authorized(gloo_net::http::Request::get(&endpoint("/auth/me")), store)
            .send()
            .await
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        decode(store, response).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = store;
        Err(no_transport())
    }
}

#[cfg(feature = "csr")]
async fn post_json<B, T>(store: &SessionStore, path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let response = authorized(gloo_net::http::Request::post(&endpoint(path)), store)
        .json(body)
        .map_err(|err| ApiError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))?;
    decode(store, response).await
}

/// Outgoing interception point: attach the live bearer token when present.
#[cfg(feature = "csr")]
fn authorized(
    builder: gloo_net::http::RequestBuilder,
    store: &SessionStore,
) -> gloo_net::http::RequestBuilder {
    match store.token() {
        Some(token) => builder.header("Authorization", &bearer_value(&token)),
        None => builder,
    }
}

/// Incoming interception point: global 401 handling plus failure
/// classification.
#[cfg(feature = "csr")]
async fn decode<T: serde::de::DeserializeOwned>(
    store: &SessionStore,
    response: gloo_net::http::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status == 401 {
        handle_unauthorized(store);
    }
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(classify_failure(status, &body));
    }
    response
        .json::<T>()
        .await
        .map_err(|err| ApiError::Transport(err.to_string()))
}

#[cfg(feature = "csr")]
fn handle_unauthorized(store: &SessionStore) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let current = window.location().pathname().unwrap_or_default();
    if let Some(target) = unauthorized_redirect(store, &current) {
        let _ = window.location().set_href(target);
    }
}

#[cfg(not(feature = "csr"))]
fn no_transport() -> ApiError {
    ApiError::Transport("no browser transport available".to_owned())
}

/// Shared 401 reaction: the session is dropped unconditionally; the return
/// value is where the browser should go, if anywhere.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn unauthorized_redirect(
    store: &SessionStore,
    current_path: &str,
) -> Option<&'static str> {
    log::warn!("request rejected with 401, dropping session");
    store.logout();
    (current_path != LOGIN_PATH).then_some(LOGIN_PATH)
}

/// Error body shape shared by validation and application failures.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<FieldError>,
}

/// One entry of a field-validation failure list.
#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Deserialize)]
struct FieldError {
    msg: Option<String>,
}

/// Map a non-2xx response to the error taxonomy. Server-provided messages
/// ride along so the UI can show the most specific cause.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn classify_failure(status: u16, body: &str) -> ApiError {
    let message = extract_server_message(body);
    if status == 401 || status == 403 {
        return ApiError::Auth { status, message };
    }
    match message {
        Some(message) => ApiError::Validation(message),
        None => ApiError::Transport(format!("request failed with status {status}")),
    }
}

/// Pull the most specific message out of an error body: a top-level
/// `message` wins over the first entry of a validation `errors` list.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn extract_server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    if parsed.message.is_some() {
        return parsed.message;
    }
    parsed.errors.into_iter().find_map(|entry| entry.msg)
}

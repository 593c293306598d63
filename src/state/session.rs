//! Session store: the authenticated user, their bearer token, and the
//! operations that mutate them.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single writer of session state. Pages render from the
//! session signal, the HTTP gateway reads the live token from it, and the
//! navigation guard observes it without owning any state. Every mutation
//! writes through to the key-value port in the same call, so a reload
//! resumes exactly where the last mutation left off.
//!
//! ERROR HANDLING
//! ==============
//! Operations never return errors; failures are normalized to one message in
//! `Session::error` for the UI to poll. The only silent path is profile
//! hydration, where a rejected token clears the session without a message.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::types::{AuthResponse, Credentials, RegisterData, User};
use crate::util::storage::{KeyValueStore, TOKEN_KEY, USER_KEY};

/// Authentication state for the current browser user.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Bearer token proving authentication; persisted.
    pub token: Option<String>,
    /// Profile of the authenticated user; persisted once known.
    pub user: Option<User>,
    /// True while a login/register/fetch call is in flight.
    pub loading: bool,
    /// Message from the most recent failed operation.
    pub error: Option<String>,
}

impl Session {
    /// A session counts as authenticated only once both the token and the
    /// profile are present. A bare token (just after a reload, before the
    /// profile fetch lands) is not enough.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    #[must_use]
    pub fn user_role(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.role.as_deref())
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user_role() == Some("admin")
    }

    /// Profile hydration applies only when a token survived a reload but the
    /// profile did not. A cached profile is never re-fetched.
    pub(crate) fn needs_profile_fetch(&self) -> bool {
        self.token.is_some() && self.user.is_none()
    }
}

/// Handle bundling the reactive session state with its persistence port.
/// Lives in the reactive context, so the handle must stay `Send + Sync`.
#[derive(Clone)]
pub struct SessionStore {
    state: RwSignal<Session>,
    storage: Arc<dyn KeyValueStore + Send + Sync>,
}

impl SessionStore {
    /// Build a store hydrated from whatever the previous session persisted.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore + Send + Sync>) -> Self {
        let state = RwSignal::new(hydrate_session(storage.as_ref()));
        Self { state, storage }
    }

    /// Reactive session state for pages and guards.
    #[must_use]
    pub fn state(&self) -> RwSignal<Session> {
        self.state
    }

    /// Live token read for the HTTP gateway. Untracked on purpose: requests
    /// must see the token at send time, not subscribe to it.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.state.with_untracked(|session| session.token.clone())
    }

    /// Exchange credentials for a token and profile via `POST /auth/login`.
    pub async fn login(&self, credentials: &Credentials) {
        self.begin();
        let outcome = api::login(self, credentials)
            .await
            .and_then(extract_credentials);
        self.settle(outcome, "Login failed.");
    }

    /// Create an account via `POST /auth/register`. A successful
    /// registration is an implicit login with the returned token and
    /// profile.
    pub async fn register(&self, data: &RegisterData) {
        self.begin();
        let outcome = api::register(self, data)
            .await
            .and_then(extract_credentials);
        self.settle(outcome, "Registration failed.");
    }

    /// Drop the session from memory and storage. Idempotent, never fails.
    pub fn logout(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
        self.state.update(|session| {
            session.token = None;
            session.user = None;
        });
        log::info!("session cleared");
    }

    /// Best-effort profile hydration for a token that survived a reload.
    ///
    /// Skipped when there is no token or a profile is already cached. A
    /// 401/403 means the stored token is stale, so the session is cleared;
    /// any other failure keeps the token and leaves the profile absent.
    pub async fn fetch_user(&self) {
        if !self.state.with_untracked(Session::needs_profile_fetch) {
            return;
        }
        match api::me(self).await {
            Ok(user) => {
                self.persist_user(&user);
                self.state.update(|session| session.user = Some(user));
            }
            Err(err) if err.is_auth_denied() => {
                log::warn!("stored token rejected, clearing session");
                self.logout();
            }
            Err(err) => log::warn!("profile fetch failed: {err}"),
        }
    }

    fn begin(&self) {
        self.state.update(|session| {
            session.loading = true;
            session.error = None;
        });
    }

    /// Apply the outcome of a login/register attempt. Success stores the
    /// token and profile together in memory and storage; failure clears any
    /// partial state and records the most specific message available.
    pub(crate) fn settle(&self, outcome: Result<(String, User), ApiError>, fallback: &str) {
        match outcome {
            Ok((token, user)) => {
                self.storage.set(TOKEN_KEY, &token);
                self.persist_user(&user);
                self.state.update(|session| {
                    session.token = Some(token);
                    session.user = Some(user);
                    session.error = None;
                    session.loading = false;
                });
            }
            Err(err) => {
                let message = err.user_message(fallback);
                log::warn!("auth attempt failed: {message}");
                self.logout();
                self.state.update(|session| {
                    session.error = Some(message);
                    session.loading = false;
                });
            }
        }
    }

    fn persist_user(&self, user: &User) {
        let Ok(raw) = serde_json::to_string(user) else {
            return;
        };
        self.storage.set(USER_KEY, &raw);
    }
}

/// Rebuild a session from the persisted token and user record. A stored
/// record that no longer parses is ignored rather than trusted.
fn hydrate_session(storage: &dyn KeyValueStore) -> Session {
    let token = storage.get(TOKEN_KEY);
    let user = storage
        .get(USER_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok());
    Session {
        token,
        user,
        loading: false,
        error: None,
    }
}

/// A success body must carry both halves of the credential pair; anything
/// less is treated as a failed attempt, never a partial login.
pub(crate) fn extract_credentials(response: AuthResponse) -> Result<(String, User), ApiError> {
    let token = response.token.ok_or(ApiError::MalformedResponse("token"))?;
    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or(ApiError::MalformedResponse("data.user"))?;
    Ok((token, user))
}

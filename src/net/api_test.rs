use std::sync::Arc;

use leptos::prelude::*;

use super::*;
use crate::net::types::User;
use crate::util::storage::{KeyValueStore, MemoryStorage, TOKEN_KEY, USER_KEY};

fn authenticated_store(storage: Arc<MemoryStorage>) -> SessionStore {
    let user = User {
        id: "1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: None,
    };
    storage.set(TOKEN_KEY, "T");
    storage.set(USER_KEY, &serde_json::to_string(&user).unwrap());
    SessionStore::new(storage)
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn bearer_value_formats_the_authorization_header() {
    assert_eq!(bearer_value("abc123"), "Bearer abc123");
}

#[test]
fn endpoint_joins_the_base_url_and_path() {
    assert_eq!(endpoint("/auth/me"), format!("{}/auth/me", base_url()));
}

// =============================================================
// Failure classification
// =============================================================

#[test]
fn classify_401_as_auth_with_the_server_message() {
    let err = classify_failure(401, r#"{"message":"Invalid credentials"}"#);
    assert_eq!(
        err,
        ApiError::Auth {
            status: 401,
            message: Some("Invalid credentials".to_owned()),
        }
    );
    assert!(err.is_auth_denied());
}

#[test]
fn classify_403_without_a_body_as_bare_auth() {
    let err = classify_failure(403, "");
    assert_eq!(
        err,
        ApiError::Auth {
            status: 403,
            message: None,
        }
    );
}

#[test]
fn classify_4xx_message_body_as_validation() {
    let err = classify_failure(409, r#"{"message":"Email already registered"}"#);
    assert_eq!(
        err,
        ApiError::Validation("Email already registered".to_owned())
    );
}

#[test]
fn classify_validation_list_uses_the_first_entry() {
    let body = r#"{"errors":[{"msg":"Email is required"},{"msg":"Password too short"}]}"#;
    let err = classify_failure(422, body);
    assert_eq!(err, ApiError::Validation("Email is required".to_owned()));
}

#[test]
fn top_level_message_beats_the_validation_list() {
    let body = r#"{"message":"Registration rejected","errors":[{"msg":"Email is required"}]}"#;
    assert_eq!(
        extract_server_message(body),
        Some("Registration rejected".to_owned())
    );
}

#[test]
fn classify_unparseable_body_as_transport_with_the_status() {
    let err = classify_failure(500, "<html>oops</html>");
    match err {
        ApiError::Transport(message) => assert!(message.contains("500")),
        other => panic!("expected transport error, got {other:?}"),
    }
}

#[test]
fn extract_server_message_skips_entries_without_a_msg() {
    let body = r#"{"errors":[{"param":"email"},{"msg":"Password too short"}]}"#;
    assert_eq!(
        extract_server_message(body),
        Some("Password too short".to_owned())
    );
}

// =============================================================
// Global 401 handling
// =============================================================

#[test]
fn unauthorized_redirect_clears_the_session_and_targets_login() {
    let storage = Arc::new(MemoryStorage::new());
    let store = authenticated_store(storage.clone());
    assert!(store.state().get_untracked().is_authenticated());

    let target = unauthorized_redirect(&store, "/profile");

    assert_eq!(target, Some("/login"));
    let session = store.state().get_untracked();
    assert_eq!(session.token, None);
    assert_eq!(session.user, None);
    assert_eq!(storage.get(TOKEN_KEY), None);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn unauthorized_redirect_stays_put_on_the_login_route() {
    let storage = Arc::new(MemoryStorage::new());
    let store = authenticated_store(storage);

    let target = unauthorized_redirect(&store, "/login");

    assert_eq!(target, None);
    // The session is still dropped even without a navigation.
    assert!(!store.state().get_untracked().is_authenticated());
}

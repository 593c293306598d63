//! Wire DTOs for the storefront REST API.
//!
//! DESIGN
//! ======
//! The auth envelope keeps every field optional so a malformed success body
//! surfaces as a missing-field error the store can report, instead of a
//! decode failure deep inside the transport.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Authorization role; `"admin"` unlocks the admin panel. Regular
    /// customers carry no role.
    pub role: Option<String>,
}

/// Login request payload for `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration request payload for `POST /auth/register`. Field names are
/// camelCase on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RegisterData {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "passwordConfirm")]
    pub password_confirm: String,
}

/// Envelope returned by the login and register endpoints.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthResponse {
    pub status: Option<String>,
    pub token: Option<String>,
    pub data: Option<AuthData>,
}

/// Inner payload of [`AuthResponse`].
#[derive(Clone, Debug, Deserialize)]
pub struct AuthData {
    pub user: Option<User>,
}

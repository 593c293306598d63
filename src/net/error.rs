//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Session operations catch these locally and reduce them to a single
//! message in `Session::error` for the UI to poll; nothing is re-thrown to
//! call sites. The one cross-cutting path is the gateway's 401 handling,
//! which clears the session globally.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Field-specific failure reported by the server.
    #[error("{0}")]
    Validation(String),
    /// The server rejected the session credential (401/403).
    #[error("authorization denied (status {status})")]
    Auth { status: u16, message: Option<String> },
    /// The request produced no usable response (network failure, bad JSON).
    #[error("{0}")]
    Transport(String),
    /// A success response was missing a field the contract promises.
    #[error("server response missing `{0}`")]
    MalformedResponse(&'static str),
}

impl ApiError {
    /// True for 401/403 responses, which invalidate the stored token.
    #[must_use]
    pub fn is_auth_denied(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Reduce to the message shown to the user, preferring the most specific
    /// source: a server-provided message, then the transport detail, then
    /// the caller's fallback.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Auth {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Auth { message: None, .. } => fallback.to_owned(),
            Self::Transport(message) => message.clone(),
            Self::MalformedResponse(_) => self.to_string(),
        }
    }
}

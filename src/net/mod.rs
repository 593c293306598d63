//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP gateway (bearer injection + global 401 handling),
//! `types` the wire schema, and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod types;

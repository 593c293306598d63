//! Shared application state containers.

pub mod session;

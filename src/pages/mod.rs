//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page installs its own access guard and renders from the shared
//! session context; rendering stays thin because the interesting logic
//! lives in `state` and `net`.

pub mod about;
pub mod admin;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;

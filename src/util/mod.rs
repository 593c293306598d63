//! Utility modules isolating browser and routing concerns.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` is the persistence port over localStorage; `guard` is the
//! route-access policy applied before rendering protected screens.

pub mod guard;
pub mod storage;

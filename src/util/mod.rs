//! Utility helpers shared across console UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and user-facing text from page
//! and component logic so both stay testable on the host.

pub mod browser_storage;
pub mod errors;
pub mod format;

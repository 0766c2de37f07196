//! Reactive UI state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session itself lives in `console-core`'s credential store; these
//! types are the signal-friendly projections views render from.

pub mod auth;
pub mod page;

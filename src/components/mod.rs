//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render console chrome (navigation, notices, the protected
//! wrapper) while reading shared state from Leptos context providers.

pub mod nav_bar;
pub mod notice;
pub mod protected;

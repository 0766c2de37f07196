//! Routing logic shared by the console shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `routes` is the static route table, `guard` decides each transition and
//! `navigation` maps session events to navigations. None of it touches the
//! browser; the shell feeds in locations and performs the result.

pub mod guard;
pub mod navigation;
pub mod routes;

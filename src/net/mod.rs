//! Browser networking.
//!
//! SYSTEM CONTEXT
//! ==============
//! The request gateway and every endpoint wrapper live in `console-core`;
//! this module only supplies the `fetch`-backed transport they run on.

pub mod browser;

//! Backend-neutral helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `storage` abstracts where the session is persisted; `ipv6` cleans up
//! addresses reported by the device before they reach a view.

pub mod ipv6;
pub mod storage;

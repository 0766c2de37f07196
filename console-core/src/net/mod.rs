//! Networking modules for the device REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `gateway` is the single HTTP client with the credential and `401`
//! interceptors, `api` holds one typed wrapper per device endpoint, `types`
//! defines the wire schema and `error` the failure type they all share.

pub mod api;
pub mod error;
pub mod gateway;
pub mod types;

//! # pdu-console
//!
//! Leptos + WASM administration console for the SBC power distribution
//! unit.
//!
//! This crate is the browser shell around `console-core`: it supplies the
//! browser transport and `localStorage` session storage, wires the route
//! table into `leptos_router`, runs the navigation guard on every location
//! change and turns session events into navigations. Pages are thin views
//! over the core's typed resource wrappers.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

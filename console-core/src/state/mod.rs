//! Client-side session state.
//!
//! DESIGN
//! ======
//! `auth` owns the credential store; `events` carries its transitions to
//! whoever translates them into navigation.

pub mod auth;
pub mod events;

//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it loads its resource through
//! the shared gateway on mount and submits through it. Validation and
//! display helpers are plain functions next to the view so they test on the
//! host.

pub mod auth_config;
pub mod home;
pub mod hostname;
pub mod mqtt;
pub mod not_found;
pub mod ntp;
pub mod sign_in;
pub mod system_info;
pub mod wifi;

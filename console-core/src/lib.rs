//! # console-core
//!
//! Session and request layer shared by the SBC-PDU web console and the
//! `pdu` command-line tool.
//!
//! This crate owns everything that decides *who* is talking to the device
//! and *where* the user is allowed to go: the persistent credential store,
//! the request gateway that attaches credentials and reacts to `401`
//! responses, the static route table with its navigation guard, and the
//! typed resource wrappers for the device's REST API. It has no browser or
//! runtime dependency; transports and storage backends are plugged in by
//! the embedding application.

pub mod config;
pub mod net;
pub mod router;
pub mod state;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

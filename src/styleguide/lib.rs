//! Client for the Apiary styleguide validation service.
//!
//! Two operations: `validate` submits a local API description together
//! with styleguide rules and helper functions and returns the service
//! verdict; `fetch` downloads the remote rule and function definitions
//! for local editing. All rule evaluation happens on the remote side —
//! this client only assembles requests and normalizes failures.
//!
//! The library layer never prints and never exits; every component
//! returns [`error::Result`] and the binary formats the one terminal
//! error line. An invocation performs at most two strictly sequenced
//! network calls (the token handshake, then the payload call) and
//! keeps no state between invocations.
//!
//! - [`config`]: options resolved once at startup
//! - [`resolve`]: file-or-directory resource resolution
//! - [`load`]: BOM-aware file loading and rules parsing
//! - [`client`]: authenticated HTTP calls against the service
//! - [`commands`]: the `fetch` and `validate` orchestrators
//! - [`error`]: error taxonomy

pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod load;
pub mod resolve;

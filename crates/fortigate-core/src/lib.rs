//! # fortigate-core
//!
//! Core types and HTTP plumbing for talking to a FortiGate appliance's REST
//! management API.
//!
//! This crate provides the pieces every higher-level API crate needs: the
//! error taxonomy, appliance connection configuration, the authenticated HTTP
//! transport, and the vendor status-code interpreter.
//!
//! ## Modules
//!
//! - [`error`] - Error types shared across the workspace
//! - [`config`] - Appliance connection configuration
//! - [`client`] - Authenticated HTTP transport for the `/api/v2/` surface
//! - [`response`] - Interpretation of vendor status codes embedded in bodies
//! - [`types`] - Response envelope types shared by API crates

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod error;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};

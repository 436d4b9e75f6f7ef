//! Compliance alerting engine for occupational health programs.
//!
//! The library derives a prioritized alert feed from four record types
//! (prescriptions, exposure-group protocols, legal technical reports, and
//! worker exam expirations); the binary exposes it over HTTP and a CLI.

pub mod alerting;
pub mod config;
pub mod error;
pub mod telemetry;

//! fieldforce-core
//!
//! Pure domain types, configuration, and tracing setup.
//! No UI or network dependency. This is the shared vocabulary of the
//! FieldForce Pro assistant and dashboard crates.

pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;

//! fieldforce-dashboard
//!
//! Filter state, simulated export, risk tiers, and the static datasets the
//! analytics pages render. No rendering and no real file output.

pub mod data;
pub mod error;
pub mod export;
pub mod filter;
pub mod risk;

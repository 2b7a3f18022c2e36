//! Bridge17 partnership engine.
//!
//! Scores NGOs against CSR funding opportunities and suppliers that share their state and
//! development-goal category, producing ranked recommendations with a per-component audit trail.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;

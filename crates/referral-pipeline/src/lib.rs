//! Referral candidate pipeline: status classification plus the reference tables
//! and reports built on top of it.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod telemetry;
pub mod workflows;

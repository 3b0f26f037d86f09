//! meetstatus CLI: configuration loading and query wiring.

pub mod cli;
pub mod config;
pub mod error;

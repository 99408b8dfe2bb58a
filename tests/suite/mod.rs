//! Integration test scenarios

mod config;
mod flow;
mod telemetry;

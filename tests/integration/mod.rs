//! Integration tests for the tago description resolver

mod describe_pipeline;
mod resolution_scenarios;
pub mod test_utils;

//! On-device QA checks, one module per group.

pub mod framework;
pub mod group1_api;
pub mod group3_arguments;

pub use framework::{TestContext, TestResult, TestStats};

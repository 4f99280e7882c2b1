//! Shared test utilities for jobweek integration tests.
//!
//! This module provides:
//! - `TestHarness` for isolated test execution with a temp directory
//! - Builders for submissions and stored lines

pub mod builders;
pub mod harness;

pub use builders::*;
pub use harness::TestHarness;

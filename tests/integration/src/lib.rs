//! Integration test utilities for the marketplace
//!
//! This crate provides a fully wired in-memory marketplace and reusable
//! test data for cross-crate scenario tests.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

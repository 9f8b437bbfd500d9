//! Single test binary entry point.
//!
//! All integration tests compile into one binary to keep linking cheap.
//!
//! Structure:
//! - integration: multi-step interaction flows and replay scripts
//! - unit: single-component tests

mod integration;

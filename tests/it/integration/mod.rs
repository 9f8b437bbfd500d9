//! Integration tests for canvas-cursor.
//!
//! These tests drive the resolver through complete interaction flows.

mod replay_tests;

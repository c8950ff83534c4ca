//! Integration tests for just-rs crates.
//!
//! This crate contains end-to-end tests that exercise the algebra, the
//! transform builders and the camera together.

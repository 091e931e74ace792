//! Integration tests for Layer 1: Harness
//!
//! Tests for cases, runs, and reports.

mod cases;
mod runs;

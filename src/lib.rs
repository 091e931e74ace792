//! Passthrough - identity function and smoke-test harness
//!
//! This crate re-exports both layers for convenient access.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: passthrough_harness    — Cases, runner, reports
//! Layer 0: passthrough_foundation — identity, Value, Error
//! ```

pub use passthrough_foundation as foundation;
pub use passthrough_harness as harness;

pub use passthrough_foundation::{Value, identity};

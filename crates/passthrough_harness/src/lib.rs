//! Case runner and pass/fail reporting for Passthrough.
//!
//! This crate provides:
//! - [`Case`] - A named input and the output it must produce
//! - [`Harness`] - Runs cases against a function under test
//! - [`Report`] - Per-case outcomes and a pass/fail summary
//! - [`HarnessConfig`] - Fail-fast, filtering, and suite naming
//!
//! # Example
//!
//! ```
//! use passthrough_harness::Harness;
//!
//! let report = Harness::standard().run_identity();
//! assert!(report.is_success());
//! assert_eq!(report.to_string(), "passthrough: 3 passed; 0 failed; 0 skipped");
//! ```
//!
//! # Feature Flags
//!
//! - `logging` - Emit `tracing` events per case and per run

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod logging;

pub mod case;
pub mod config;
pub mod harness;
pub mod report;

pub use case::{Case, Expectation};
pub use config::HarnessConfig;
pub use harness::Harness;
pub use report::{CaseResult, Outcome, Report};

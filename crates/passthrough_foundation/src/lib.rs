//! Identity function, values, and errors for Passthrough.
//!
//! This crate provides:
//! - [`identity`] - Returns its argument unchanged
//! - [`Value`] - Dynamically typed value used by the harness
//! - [`Type`] - Variant descriptors for diagnostics
//! - [`Error`] - Assertion failures with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod identity;
pub mod types;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use identity::{identity, identity_ref};
pub use types::Type;
pub use value::Value;

/// Result type for Passthrough operations.
pub type Result<T> = std::result::Result<T, Error>;

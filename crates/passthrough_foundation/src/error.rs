//! Error types for Passthrough.
//!
//! The identity function itself never fails. These errors describe a
//! function under test that did not hand its input back.

use std::fmt;

use thiserror::Error;

use crate::types::Type;
use crate::value::Value;

/// The main error type for Passthrough operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a value mismatch error.
    #[must_use]
    pub fn mismatch(expected: Value, actual: Value) -> Self {
        Self::new(ErrorKind::Mismatch { expected, actual })
    }

    /// Creates an error for a value that should have been nil.
    #[must_use]
    pub fn not_absent(actual: Value) -> Self {
        Self::new(ErrorKind::NotAbsent(actual))
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an error for a function that panicked instead of returning.
    #[must_use]
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Panicked(message.into()))
    }

    /// Returns the name of the case this error was raised in, if known.
    #[must_use]
    pub fn case(&self) -> Option<&str> {
        self.context.as_ref().and_then(|ctx| ctx.case.as_deref())
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Output differed from the expected value.
    #[error("assertion failed: expected {expected:?}, got {actual:?}")]
    Mismatch {
        /// The expected value.
        expected: Value,
        /// The value actually returned.
        actual: Value,
    },

    /// Output should have been nil but was not.
    #[error("assertion failed: expected nil, got {0:?}")]
    NotAbsent(Value),

    /// Output was a different kind of value than expected.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Function under test panicked.
    #[error("panicked: {0}")]
    Panicked(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Name of the case that failed.
    pub case: Option<String>,
    /// Name of the suite the case belongs to.
    pub suite: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the case name.
    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self
    }

    /// Sets the suite name.
    #[must_use]
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = Some(suite.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.suite, &self.case) {
            (Some(suite), Some(case)) => write!(f, "in {suite}::{case}"),
            (None, Some(case)) => write!(f, "in {case}"),
            (Some(suite), None) => write!(f, "in {suite}"),
            (None, None) => Ok(()),
        }
    }
}

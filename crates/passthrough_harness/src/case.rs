//! Test cases: one input and what the function under test must return.

use passthrough_foundation::{Error, Result, Value};

/// What a case expects the function under test to return.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expectation {
    /// Output must equal this value.
    Equals(Value),
    /// Output must be nil.
    Absent,
}

impl Expectation {
    /// Checks `actual` against this expectation.
    ///
    /// An output of a different kind than expected reports a type mismatch;
    /// same kind but different content reports a value mismatch.
    ///
    /// # Errors
    ///
    /// Returns an assertion error when `actual` does not satisfy the
    /// expectation.
    pub fn verify(&self, actual: Value) -> Result<()> {
        match self {
            Self::Equals(expected) if *expected == actual => Ok(()),
            Self::Equals(expected) => {
                let (expected_type, actual_type) = (expected.value_type(), actual.value_type());
                if expected_type == actual_type {
                    Err(Error::mismatch(expected.clone(), actual))
                } else {
                    Err(Error::type_mismatch(expected_type, actual_type))
                }
            }
            Self::Absent if actual.is_nil() => Ok(()),
            Self::Absent => Err(Error::not_absent(actual)),
        }
    }
}

/// A named input/expectation pair.
#[derive(Clone, Debug)]
pub struct Case {
    name: String,
    input: Value,
    expectation: Expectation,
}

impl Case {
    /// Creates a case expecting the output to equal the input.
    #[must_use]
    pub fn returns(name: impl Into<String>, input: impl Into<Value>) -> Self {
        let input = input.into();
        Self {
            name: name.into(),
            expectation: Expectation::Equals(input.clone()),
            input,
        }
    }

    /// Creates a case expecting a specific output.
    #[must_use]
    pub fn expecting(
        name: impl Into<String>,
        input: impl Into<Value>,
        expected: impl Into<Value>,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expectation: Expectation::Equals(expected.into()),
        }
    }

    /// Creates a case that feeds in nil and expects nil back.
    #[must_use]
    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Value::Nil,
            expectation: Expectation::Absent,
        }
    }

    /// Returns the case name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the input value.
    #[must_use]
    pub fn input(&self) -> &Value {
        &self.input
    }

    /// Returns the expectation.
    #[must_use]
    pub fn expectation(&self) -> &Expectation {
        &self.expectation
    }

    /// Invokes `f` once with the input and verifies its output.
    ///
    /// # Errors
    ///
    /// Returns an assertion error when the output does not meet the
    /// expectation.
    pub fn check<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(Value) -> Value,
    {
        self.expectation.verify(f(self.input.clone()))
    }
}

//! Outcomes of a harness run.

use std::fmt;

use passthrough_foundation::Error;

/// Result of running a single case.
#[derive(Debug)]
pub enum Outcome {
    /// The output met the expectation.
    Passed,
    /// The output did not meet the expectation, or the function panicked.
    Failed(Error),
    /// The case did not run (filtered out, or halted by fail-fast).
    Skipped,
}

impl Outcome {
    /// Returns true if the case passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns true if the case failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns true if the case was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// Returns the failure, if any.
    #[must_use]
    pub const fn error(&self) -> Option<&Error> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Outcome of one named case.
#[derive(Debug)]
pub struct CaseResult {
    /// Name of the case.
    pub name: String,
    /// What happened.
    pub outcome: Outcome,
}

/// Collected outcomes of one harness run, in case order.
#[derive(Debug)]
pub struct Report {
    suite: String,
    results: Vec<CaseResult>,
}

impl Report {
    pub(crate) fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            results: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, name: impl Into<String>, outcome: Outcome) {
        self.results.push(CaseResult {
            name: name.into(),
            outcome,
        });
    }

    /// Returns the suite name.
    #[must_use]
    pub fn suite(&self) -> &str {
        &self.suite
    }

    /// Returns every case result in run order.
    #[must_use]
    pub fn results(&self) -> &[CaseResult] {
        &self.results
    }

    /// Returns the outcome of the named case.
    #[must_use]
    pub fn outcome(&self, name: &str) -> Option<&Outcome> {
        self.results
            .iter()
            .find(|r| r.name == name)
            .map(|r| &r.outcome)
    }

    /// Number of passed cases.
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(Outcome::is_passed)
    }

    /// Number of failed cases.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Outcome::is_failed)
    }

    /// Number of skipped cases.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(Outcome::is_skipped)
    }

    /// Total number of cases, run or not.
    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    /// Returns true if no case failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Process exit status for this run: 0 when nothing failed, 1 otherwise.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        i32::from(!self.is_success())
    }

    /// Iterates over failed cases and their errors.
    pub fn failures(&self) -> impl Iterator<Item = (&str, &Error)> {
        self.results
            .iter()
            .filter_map(|r| r.outcome.error().map(|err| (r.name.as_str(), err)))
    }

    fn count(&self, pred: impl Fn(&Outcome) -> bool) -> usize {
        self.results.iter().filter(|r| pred(&r.outcome)).count()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} passed; {} failed; {} skipped",
            self.suite,
            self.passed(),
            self.failed(),
            self.skipped()
        )?;
        for (name, err) in self.failures() {
            write!(f, "\n  FAILED {name}: {err}")?;
        }
        Ok(())
    }
}

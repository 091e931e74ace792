//! Configuration for harness runs.

/// Configuration for a [`Harness`](crate::Harness).
///
/// Controls which cases run and whether a failure stops the run.
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Suite name used in reports and error context.
    pub suite: String,

    /// Skip every case after the first failure.
    pub fail_fast: bool,

    /// Only run cases whose name contains this substring.
    pub filter: Option<String>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            suite: "passthrough".to_string(),
            fail_fast: false,
            filter: None,
        }
    }
}

impl HarnessConfig {
    /// Creates a configuration that halts on the first failure.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            fail_fast: true,
            ..Self::default()
        }
    }

    /// Builder method to set the suite name.
    #[must_use]
    pub fn with_suite(mut self, suite: impl Into<String>) -> Self {
        self.suite = suite.into();
        self
    }

    /// Builder method to set fail-fast behavior.
    #[must_use]
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Builder method to set the case name filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Returns true if a case with this name should run.
    #[must_use]
    pub fn selects(&self, name: &str) -> bool {
        self.filter.as_deref().is_none_or(|f| name.contains(f))
    }
}

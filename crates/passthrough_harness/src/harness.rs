//! The case runner.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use passthrough_foundation::{Error, ErrorContext, Result, Value, identity};

use crate::case::Case;
use crate::config::HarnessConfig;
use crate::logging::{log_debug, log_info, log_warn};
use crate::report::{Outcome, Report};

/// Runs cases against a function under test and collects a [`Report`].
///
/// Cases run one at a time in insertion order. A failing case never stops
/// the process: assertion failures and panics both become
/// [`Outcome::Failed`].
#[derive(Clone, Debug, Default)]
pub struct Harness {
    config: HarnessConfig,
    cases: Vec<Case>,
}

impl Harness {
    /// Creates an empty harness.
    #[must_use]
    pub fn new(config: HarnessConfig) -> Self {
        Self {
            config,
            cases: Vec::new(),
        }
    }

    /// Creates a harness with the three canonical passthrough cases:
    /// an integer, a string, and nil.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
            .with_case(Case::returns("returns_input", 42))
            .with_case(Case::returns("returns_string", "hello"))
            .with_case(Case::absent("returns_none"))
    }

    /// Builder method to replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    /// Builder method to append a case.
    #[must_use]
    pub fn with_case(mut self, case: Case) -> Self {
        self.add_case(case);
        self
    }

    /// Appends a case.
    pub fn add_case(&mut self, case: Case) {
        self.cases.push(case);
    }

    /// Returns the registered cases.
    #[must_use]
    pub fn cases(&self) -> &[Case] {
        &self.cases
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Runs every case against `f`.
    ///
    /// Filtered-out cases are skipped. With fail-fast enabled, every case
    /// after the first failure is skipped as well.
    #[must_use]
    pub fn run<F>(&self, f: F) -> Report
    where
        F: Fn(Value) -> Value,
    {
        let mut report = Report::new(&self.config.suite);
        let mut halted = false;

        for case in &self.cases {
            if halted || !self.config.selects(case.name()) {
                log_debug!(case = case.name(), "skipping case");
                report.push(case.name(), Outcome::Skipped);
                continue;
            }

            log_debug!(case = case.name(), "running case");
            let outcome = match self.run_case(case, &f) {
                Ok(()) => Outcome::Passed,
                Err(err) => {
                    log_warn!(case = case.name(), error = %err, "case failed");
                    halted = self.config.fail_fast;
                    Outcome::Failed(err)
                }
            };
            report.push(case.name(), outcome);
        }

        log_info!(
            suite = %self.config.suite,
            passed = report.passed(),
            failed = report.failed(),
            skipped = report.skipped(),
            "run finished"
        );
        report
    }

    /// Runs every case against [`identity`].
    #[must_use]
    pub fn run_identity(&self) -> Report {
        self.run(identity::<Value>)
    }

    fn run_case<F>(&self, case: &Case, f: &F) -> Result<()>
    where
        F: Fn(Value) -> Value,
    {
        panic::catch_unwind(AssertUnwindSafe(|| case.check(f)))
            .unwrap_or_else(|payload| Err(Error::panicked(panic_message(payload.as_ref()))))
            .map_err(|err| {
                err.with_context(
                    ErrorContext::new()
                        .with_suite(&self.config.suite)
                        .with_case(case.name()),
                )
            })
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

//! Integration tests for harness runs and reports

use passthrough::Value;
use passthrough::harness::{Case, Harness, HarnessConfig, Outcome};

#[test]
fn identity_passes_standard_suite() {
    let report = Harness::standard().run_identity();
    assert!(report.is_success());
    assert_eq!(report.exit_code(), 0);
    assert_eq!(report.passed(), 3);
    assert_eq!(
        report.to_string(),
        "passthrough: 3 passed; 0 failed; 0 skipped"
    );
}

#[test]
fn broken_function_reports_every_failure() {
    let report = Harness::standard().run(|_| Value::Nil);
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.exit_code(), 1);

    let failed: Vec<_> = report.failures().map(|(name, _)| name).collect();
    assert_eq!(failed, ["returns_input", "returns_string"]);

    let text = report.to_string();
    assert!(text.starts_with("passthrough: 1 passed; 2 failed; 0 skipped"));
    assert!(text.contains("FAILED returns_input: type mismatch: expected int, got nil"));
}

#[test]
fn filter_skips_unselected_cases() {
    let report = Harness::standard()
        .with_config(HarnessConfig::default().with_filter("string"))
        .run_identity();
    assert_eq!(report.passed(), 1);
    assert_eq!(report.skipped(), 2);
    assert!(report.outcome("returns_string").is_some_and(Outcome::is_passed));
}

#[test]
fn strict_halts_after_first_failure() {
    let report = Harness::standard()
        .with_config(HarnessConfig::strict())
        .run(|v| match v {
            Value::String(_) => Value::Nil,
            other => other,
        });
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 1);
    assert!(report.outcome("returns_none").is_some_and(Outcome::is_skipped));
}

#[test]
fn panicking_function_does_not_abort() {
    let report = Harness::standard().run(|_| panic!("unimplemented passthrough"));
    assert_eq!(report.failed(), 3);
    assert_eq!(report.total(), 3);
}

#[test]
fn custom_cases_run_in_order() {
    let mut harness = Harness::new(HarnessConfig::default().with_suite("custom"));
    harness.add_case(Case::returns("float", 1.5));
    harness.add_case(Case::returns("vec", vec![1i32, 2]));
    harness.add_case(Case::expecting("negate", 3, -3));

    let report = harness.run(|v| match v {
        Value::Int(n) => Value::Int(-n),
        other => other,
    });
    let names: Vec<_> = report.results().iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["float", "vec", "negate"]);
    assert!(report.is_success());
    assert_eq!(report.suite(), "custom");
}

#[test]
fn config_is_kept_for_inspection() {
    let harness = Harness::standard().with_config(
        HarnessConfig::strict()
            .with_suite("smoke")
            .with_filter("returns"),
    );
    let config = harness.config();
    assert_eq!(config.suite, "smoke");
    assert!(config.fail_fast);
    assert_eq!(config.filter.as_deref(), Some("returns"));
    assert_eq!(harness.run_identity().suite(), config.suite);
}

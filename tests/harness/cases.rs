//! Integration tests for cases and expectations

use passthrough::Value;
use passthrough::foundation::ErrorKind;
use passthrough::harness::{Case, Expectation};

#[test]
fn absent_case_feeds_nil() {
    let case = Case::absent("returns_none");
    assert!(case.input().is_nil());
    assert_eq!(case.expectation(), &Expectation::Absent);
}

#[test]
fn expectation_verify_directly() {
    assert!(Expectation::Equals(Value::Int(1)).verify(Value::Int(1)).is_ok());
    assert!(Expectation::Absent.verify(Value::Nil).is_ok());

    let err = Expectation::Equals(Value::Int(1))
        .verify(Value::from("1"))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn string_case_rejects_other_string() {
    let err = Case::returns("returns_string", "hello")
        .check(|_| Value::from("HELLO"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "assertion failed: expected \"hello\", got \"HELLO\""
    );
}

#[test]
fn vec_case_reports_element_type_any() {
    let err = Case::returns("returns_vec", vec![1i32, 2])
        .check(|_| Value::Nil)
        .unwrap_err();
    assert_eq!(err.to_string(), "type mismatch: expected vec<any>, got nil");
}

//! Integration tests for Error types
//!
//! Tests error construction, display, and context.

use passthrough::Value;
use passthrough::foundation::{Error, ErrorContext, ErrorKind, Type};

#[test]
fn error_mismatch_display() {
    let err = Error::mismatch(Value::from("hello"), Value::from("world"));
    assert_eq!(
        err.to_string(),
        "assertion failed: expected \"hello\", got \"world\""
    );
}

#[test]
fn error_not_absent_display() {
    let err = Error::not_absent(Value::Bool(false));
    assert!(matches!(err.kind, ErrorKind::NotAbsent(Value::Bool(false))));
    assert_eq!(err.to_string(), "assertion failed: expected nil, got false");
}

#[test]
fn error_type_mismatch_display() {
    let err = Error::type_mismatch(Type::Nil, Type::Int);
    assert_eq!(err.to_string(), "type mismatch: expected nil, got int");
}

#[test]
fn error_panicked_display() {
    let err = Error::panicked("boom");
    assert_eq!(err.to_string(), "panicked: boom");
}

#[test]
fn context_does_not_change_display() {
    let err = Error::panicked("boom").with_context(ErrorContext::new().with_case("returns_input"));
    assert_eq!(err.to_string(), "panicked: boom");
    assert_eq!(err.case(), Some("returns_input"));
}

#[test]
fn error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&Error::not_absent(Value::Int(1)));
}

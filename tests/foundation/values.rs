//! Integration tests for Value types
//!
//! Tests construction, equality, display, and conversions.

use passthrough::Value;
use passthrough::foundation::Type;
use std::collections::HashSet;
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_nil() {
    let v = Value::Nil;
    assert!(v.is_nil());
    assert_eq!(v.value_type(), Type::Nil);
}

#[test]
fn value_bool() {
    let v = Value::Bool(false);
    assert!(!v.is_nil());
    assert_eq!(v.as_bool(), Some(false));
}

#[test]
fn value_float() {
    let v = Value::Float(1.5);
    assert_eq!(v.as_float(), Some(1.5));
    assert_eq!(v.as_int(), None);
}

#[test]
fn value_string() {
    let v = Value::String(Arc::from("hello"));
    assert_eq!(v.as_str(), Some("hello"));
}

#[test]
fn value_empty_string_is_present() {
    let v = Value::from("");
    assert!(!v.is_nil());
    assert_eq!(v.as_str(), Some(""));
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn none_converts_to_nil() {
    assert_eq!(Value::from(None::<&str>), Value::Nil);
    assert_eq!(Value::from(Some(1.5)), Value::Float(1.5));
}

#[test]
fn nested_vec_conversion() {
    let v = Value::from(vec![vec![1i32], vec![]]);
    assert_eq!(v.value_type(), Type::vec(Type::Any));
    assert_eq!(v.to_string(), "[[1] []]");
}

// =============================================================================
// Equality & Hashing
// =============================================================================

#[test]
fn value_equality_across_variants() {
    assert_ne!(Value::Int(42), Value::Float(42.0));
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_ne!(Value::from("42"), Value::Int(42));
}

#[test]
fn values_in_hash_set() {
    let set: HashSet<Value> = [
        Value::Nil,
        Value::Int(0),
        Value::from(""),
        Value::Bool(false),
        Value::Nil,
    ]
    .into_iter()
    .collect();
    assert_eq!(set.len(), 4);
    assert!(set.contains(&Value::Nil));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn value_display() {
    assert_eq!(format!("{}", Value::Nil), "nil");
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{}", Value::Float(1.5)), "1.5");
    assert_eq!(format!("{:?}", Value::from(vec!["a"])), "[\"a\"]");
}

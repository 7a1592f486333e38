//! Integration tests for Value types
//!
//! Tests Value variants, equality, the loose-equality policy, and display.

use primer_foundation::{OrderedMap, PrimerVec, Type, Value};
use std::sync::Arc;

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_types() {
    assert_eq!(Value::Nil.value_type(), Type::Nil);
    assert_eq!(Value::Bool(true).value_type(), Type::Bool);
    assert_eq!(Value::from(vec![1i64]).value_type().to_string(), "vec<any>");
}

#[test]
fn value_string_from_arc() {
    let v = Value::String(Arc::from("hello"));
    assert_eq!(v.as_str(), Some("hello"));
    assert_eq!(v, Value::from("hello"));
    assert_eq!(v, Value::from("hello".to_string()));
}

#[test]
fn value_vec_and_map_accessors() {
    let v: Value = vec![1i64, 2].into();
    assert_eq!(v.as_vec().map(PrimerVec::len), Some(2));
    assert!(v.as_map().is_none());

    let m = Value::from(OrderedMap::new().insert(Value::from("k"), Value::Int(1)));
    assert_eq!(m.as_map().map(OrderedMap::len), Some(1));
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn string_one_is_not_int_one() {
    let s = Value::from("1");
    let n = Value::Int(1);
    assert_ne!(s, n);
    assert!(!s.loose_eq(&n));
}

#[test]
fn bool_is_not_int() {
    assert!(!Value::Bool(true).loose_eq(&Value::Int(1)));
    assert!(!Value::Bool(false).loose_eq(&Value::Int(0)));
}

#[test]
fn nested_vectors_compare_structurally() {
    let a: Value = Value::Vec([Value::from(vec![1i64]), Value::Int(2)].into_iter().collect());
    let b: Value = Value::Vec([Value::from(vec![1i64]), Value::Int(2)].into_iter().collect());
    assert_eq!(a, b);
    assert!(a.loose_eq(&b));
}

#[test]
fn map_keys_of_different_types_stay_distinct() {
    let m = OrderedMap::new()
        .insert(Value::Int(1), Value::from("int"))
        .insert(Value::from("1"), Value::from("string"));
    assert_eq!(m.len(), 2);
    assert_eq!(m.get(&Value::Int(1)), Some(&Value::from("int")));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_scalars() {
    assert_eq!(Value::Int(850).to_string(), "850");
    assert_eq!(Value::Int(-3).to_string(), "-3");
    assert_eq!(Value::from("apple").to_string(), "apple");
    assert_eq!(Value::Bool(false).to_string(), "false");
    assert_eq!(Value::Nil.to_string(), "nil");
}

#[test]
fn display_sequence() {
    let v: Value = vec![2i64, 4, 6, 8, 10].into();
    assert_eq!(v.to_string(), "[2, 4, 6, 8, 10]");
}

#[test]
fn display_map() {
    let m: OrderedMap<Value, Value> = [
        (Value::from("a"), Value::from("apple")),
        (Value::from("b"), Value::from("banana")),
    ]
    .into_iter()
    .collect();
    assert_eq!(Value::Map(m).to_string(), "{a apple, b banana}");
}

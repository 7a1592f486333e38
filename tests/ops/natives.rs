//! Integration tests for the native function table

use primer_foundation::{ErrorKind, Type, Value};
use primer_ops::native::{self, NativeFn};

#[test]
fn lookup_known_names() {
    for name in ["add", "multiply", "double-all", "reverse", "complex-calc", "alternating-calc"] {
        assert!(native::lookup(name).is_some(), "missing native {name}");
    }
    assert!(native::lookup("divide").is_none());
}

#[test]
fn lookup_reports_arity() {
    let add: &NativeFn = native::lookup("add").unwrap();
    assert_eq!(add.arity, 2);
    assert_eq!(format!("{add:?}"), "<native fn add/2>");
}

#[test]
fn call_through_table() {
    let sum = native::call("add", &[Value::Int(5), Value::Int(10)]).unwrap();
    let product = native::call("multiply", &[Value::Int(5), Value::Int(10)]).unwrap();
    let scaled = native::call("multiply", &[sum, product]).unwrap();
    assert_eq!(
        native::call("add", &[scaled, Value::Int(100)]).unwrap(),
        Value::Int(850)
    );
}

#[test]
fn reverse_rejects_int() {
    let err = native::call("reverse", &[Value::Int(1)]).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::TypeMismatch {
            expected: Type::String,
            actual: Type::Int
        }
    ));
}

#[test]
fn double_all_rejects_scalar() {
    let err = native::call("double-all", &[Value::Int(1)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::TypeMismatch { .. }));
}

#[test]
fn complex_calc_rejects_huge_count() {
    let err = native::call("complex-calc", &[Value::Int(i64::MAX)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::OutOfRange { .. }));
}

#[test]
fn empty_double_all() {
    let result = native::call("double-all", &[Value::from(Vec::<i64>::new())]).unwrap();
    assert_eq!(result.to_string(), "[]");
}

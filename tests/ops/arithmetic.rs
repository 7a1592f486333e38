//! Integration tests for arithmetic, collection, string, and accumulator operations

use primer_foundation::{ErrorKind, PrimerVec};
use primer_ops::{add, alternating_calc, complex_calc, double_all, multiply, reverse};
use proptest::prelude::*;

// =============================================================================
// add / multiply
// =============================================================================

#[test]
fn add_pairs() {
    for (a, b) in [(5, 10), (0, 0), (-7, 7), (-2, -3), (i64::MIN, 0)] {
        assert_eq!(add(a, b).unwrap(), a + b);
    }
}

#[test]
fn multiply_pairs() {
    for (a, b) in [(5, 10), (0, 99), (-7, 7), (-2, -3), (1, i64::MAX)] {
        assert_eq!(multiply(a, b).unwrap(), a * b);
    }
}

#[test]
fn driver_formula() {
    let result = add(multiply(add(5, 10).unwrap(), multiply(5, 10).unwrap()).unwrap(), 100);
    assert_eq!(result.unwrap(), 850);
}

#[test]
fn overflow_reports_operation() {
    let err = add(i64::MIN, -1).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Overflow { ref operation } if operation == "add"));
}

// =============================================================================
// double_all
// =============================================================================

#[test]
fn double_all_literal() {
    let input: PrimerVec<i64> = (1..=5).collect();
    let doubled: Vec<i64> = double_all(&input).unwrap().into_iter().collect();
    assert_eq!(doubled, vec![2, 4, 6, 8, 10]);
}

#[test]
fn double_all_empty() {
    assert_eq!(double_all(&PrimerVec::new()).unwrap().len(), 0);
}

// =============================================================================
// reverse
// =============================================================================

#[test]
fn reverse_literals() {
    assert_eq!(reverse("python"), "nohtyp");
    assert_eq!(reverse(""), "");
    assert_eq!(reverse("a"), "a");
}

// =============================================================================
// accumulators
// =============================================================================

#[test]
fn complex_calc_literals() {
    assert_eq!(complex_calc(0).unwrap(), 0);
    assert_eq!(complex_calc(10).unwrap(), 185);
}

#[test]
fn complex_calc_two_passes() {
    for n in 0..50u32 {
        let first: i64 = (0..i64::from(n)).map(|i| i * i - i).sum();
        let second: i64 = (1..=i64::from(n)).rev().sum();
        assert_eq!(complex_calc(n).unwrap(), first - second);
    }
}

#[test]
fn alternating_calc_literal() {
    assert_eq!(alternating_calc(8).unwrap(), 108);
}

proptest! {
    #[test]
    fn multiply_by_two_matches_double_all(n in any::<i32>()) {
        let input: PrimerVec<i64> = std::iter::once(i64::from(n)).collect();
        let doubled = double_all(&input).unwrap();
        prop_assert_eq!(doubled.get(0).copied(), Some(multiply(i64::from(n), 2).unwrap()));
    }

    #[test]
    fn reverse_then_reverse(s in "[a-z0-9]{0,30}") {
        prop_assert_eq!(reverse(&reverse(&s)), s);
    }
}

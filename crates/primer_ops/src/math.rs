//! Checked integer arithmetic.

use primer_foundation::{Error, Result};

/// Returns `a + b`.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`](primer_foundation::ErrorKind::Overflow) if the
/// sum leaves the `i64` range.
pub fn add(a: i64, b: i64) -> Result<i64> {
    a.checked_add(b).ok_or_else(|| Error::overflow("add"))
}

/// Returns `a * b`.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`](primer_foundation::ErrorKind::Overflow) if the
/// product leaves the `i64` range.
pub fn multiply(a: i64, b: i64) -> Result<i64> {
    a.checked_mul(b).ok_or_else(|| Error::overflow("multiply"))
}

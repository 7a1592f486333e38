//! Two-pass numeric accumulators.
//!
//! Both accumulators build a total over an ascending range, then subtract
//! every integer from `n` down to `1`. All arithmetic is checked.

use primer_foundation::{Error, Result};

/// Sum of `i*i - i` for `i` in `0..n`, minus the sum of `n` down to `1`.
///
/// `complex_calc(0)` is `0` because both ranges are empty.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`](primer_foundation::ErrorKind::Overflow) if an
/// intermediate value leaves the `i64` range.
pub fn complex_calc(n: u32) -> Result<i64> {
    let overflow = || Error::overflow("complex-calc");
    let n = i64::from(n);

    let mut total: i64 = 0;
    for i in 0..n {
        let term = i
            .checked_mul(i)
            .and_then(|sq| sq.checked_sub(i))
            .ok_or_else(overflow)?;
        total = total.checked_add(term).ok_or_else(overflow)?;
    }
    for j in (1..=n).rev() {
        total = total.checked_sub(j).ok_or_else(overflow)?;
    }
    Ok(total)
}

/// Alternating accumulator over `0..=n`.
///
/// Even `i` contribute `3*i`, odd `i` contribute `i*i`. The descending pass is
/// the same as [`complex_calc`].
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`](primer_foundation::ErrorKind::Overflow) if an
/// intermediate value leaves the `i64` range.
pub fn alternating_calc(n: u32) -> Result<i64> {
    let overflow = || Error::overflow("alternating-calc");
    let n = i64::from(n);

    let mut total: i64 = 0;
    for i in 0..=n {
        let term = if i % 2 == 0 {
            i.checked_mul(3)
        } else {
            i.checked_mul(i)
        }
        .ok_or_else(overflow)?;
        total = total.checked_add(term).ok_or_else(overflow)?;
    }
    for j in (1..=n).rev() {
        total = total.checked_sub(j).ok_or_else(overflow)?;
    }
    Ok(total)
}

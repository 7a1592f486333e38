//! Sequence transforms.

use primer_foundation::{Error, PrimerVec, Result};

/// Returns a new sequence with every element doubled.
///
/// The input is left untouched and the output has the same length and order.
///
/// # Errors
///
/// Returns [`ErrorKind::Overflow`](primer_foundation::ErrorKind::Overflow) if any
/// element doubles past the `i64` range.
pub fn double_all(values: &PrimerVec<i64>) -> Result<PrimerVec<i64>> {
    values
        .iter()
        .map(|n| n.checked_mul(2).ok_or_else(|| Error::overflow("double-all")))
        .collect()
}

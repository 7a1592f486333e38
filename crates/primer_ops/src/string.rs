//! String manipulation.

/// Reverses a string by `char`.
///
/// Combining marks and grapheme clusters are not kept together.
#[must_use]
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

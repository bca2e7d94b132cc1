//! Item count validation.

use super::error::DecodeError;
use super::item::{RawSpec, SpecItem, SEPARATOR};

/// Returns the number of items the spec stands for.
///
/// A spec consisting of one delimited string counts its fields; any other
/// spec counts its items as given.
pub fn effective_count(spec: &RawSpec) -> usize {
    match spec.items() {
        [SpecItem::Delimited(text)] => text.split(SEPARATOR).count(),
        items => items.len(),
    }
}

/// Checks that the spec has one item per target string.
///
/// With zero or one target strings any count is accepted: a single string
/// can stack as many items as it likes.
///
/// ```rust
/// use colfmt::{check_arity, RawSpec};
///
/// assert!(check_arity(1, &RawSpec::from(["r", "b", "i"])).is_ok());
/// assert!(check_arity(2, &RawSpec::from("b,r")).is_ok());
/// assert!(check_arity(2, &RawSpec::from("b")).is_err());
/// ```
pub fn check_arity(target_count: usize, spec: &RawSpec) -> Result<(), DecodeError> {
    let got = effective_count(spec);
    if target_count > 1 && got != target_count {
        return Err(DecodeError::ArityMismatch {
            expected: target_count,
            got,
            spec: spec.to_string(),
        });
    }
    Ok(())
}

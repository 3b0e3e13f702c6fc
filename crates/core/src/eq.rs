//! Null-safe equality over optional references.

use std::ptr;

/// Compares two possibly-absent references for equality.
///
/// Returns `true` when both are `None`, or when both are `Some` and the
/// values compare equal. Identical references short-circuit before the
/// value comparison, so a deep `PartialEq` never runs against itself.
///
/// Assumes the value type's `PartialEq` impl is reflexive, symmetric, and
/// transitive; this function relies on that contract without checking it.
pub fn null_safe_eq<T: PartialEq>(a: Option<&T>, b: Option<&T>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => ptr::eq(x, y) || x == y,
        _ => false,
    }
}

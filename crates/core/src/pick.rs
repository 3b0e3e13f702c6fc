//! First-non-null selection over two optional values.

use crate::error::{OptkitError, OptkitResult};

/// Returns `first` if present, otherwise `second` if present.
///
/// Errors with [`OptkitError::BothAbsent`] when neither value is present.
pub fn first_non_null<T>(first: Option<T>, second: Option<T>) -> OptkitResult<T> {
    first.or(second).ok_or(OptkitError::BothAbsent)
}

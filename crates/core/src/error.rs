//! Centralized error types for the optkit workspace.

use thiserror::Error;

/// Top-level error enum. `first_non_null` is the only fallible operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum OptkitError {
    #[error("both values were absent")]
    BothAbsent,
}

pub type OptkitResult<T> = Result<T, OptkitError>;

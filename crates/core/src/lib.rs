//! Null-safe helpers over `Option` values.
//!
//! Foundation crate -- no async or I/O dependencies. Three operations:
//! [`null_safe_eq`], [`combined_hash`] / [`HashCombiner`], and
//! [`first_non_null`].

pub mod eq;
pub mod error;
pub mod hash;
pub mod pick;

pub use eq::null_safe_eq;
pub use error::{OptkitError, OptkitResult};
pub use hash::{combined_hash, HashCombiner};
pub use pick::first_non_null;

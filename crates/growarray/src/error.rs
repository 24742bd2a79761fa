//! Container error types.

use std::error::Error;
use std::fmt;

/// Errors reported by [`GrowableArray`](crate::GrowableArray) operations.
///
/// Only checked access and the `try_*` growth paths surface these as values.
/// The infallible mutators treat the growth variants as fatal and panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// Checked access with an index that is not below the live length.
    OutOfRange {
        /// The requested index.
        index: usize,
        /// Live length of the array at the time of the call.
        len: usize,
    },
    /// The next capacity could not be represented in `usize`.
    CapacityOverflow {
        /// Capacity before the growth attempt.
        current: usize,
        /// Number of slots the caller needed.
        required: usize,
    },
    /// The buffer primitive could not obtain storage for the requested slots.
    AllocFailed {
        /// Number of slots requested.
        requested: usize,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, len {len}")
            }
            Self::CapacityOverflow { current, required } => {
                write!(
                    f,
                    "capacity overflow: current capacity {current}, required {required}"
                )
            }
            Self::AllocFailed { requested } => {
                write!(f, "allocation failed: requested {requested} slots")
            }
        }
    }
}

impl Error for ArrayError {}

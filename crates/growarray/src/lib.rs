//! A contiguous growable array with explicit capacity control.
//!
//! [`GrowableArray`] tracks a live length separately from the capacity of
//! the buffer it owns, grows that buffer geometrically, and keeps elements
//! valid across every mutating operation. Positions are plain indices: an
//! index is captured before any reallocation happens, so nothing derived
//! from the old buffer survives a growth step.
//!
//! # Architecture
//!
//! ```text
//! GrowableArray<T>
//! ├── RawBuffer<T>      (fixed block of `capacity` slots, O(1) swap)
//! ├── len               (live prefix [0, len))
//! └── GrowthPolicy      (factor 2, minimum 1)
//! CapacityHint          (reserve-only construction)
//! ```
//!
//! # Failure tiers
//!
//! - **Checked access:** [`GrowableArray::at`] returns
//!   [`ArrayError::OutOfRange`] and leaves the array untouched.
//! - **Preconditions:** `insert`/`erase` with a bad index panic;
//!   [`GrowableArray::at_unchecked`] with a bad index is undefined behavior.
//! - **Growth failure:** infallible mutators panic; [`GrowableArray::try_reserve`]
//!   returns the error. The old buffer is intact in both cases.
//!
//! # Example
//!
//! ```
//! use growarray::growarray;
//!
//! let mut arr = growarray![10, 20, 30];
//! assert_eq!((arr.len(), arr.capacity()), (3, 3));
//!
//! arr.insert(1, 99);
//! assert_eq!(arr, [10, 99, 20, 30]);
//!
//! arr.erase(0);
//! assert_eq!(arr, [99, 20, 30]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod array;
pub mod cmp;
pub mod config;
pub mod error;
pub mod hint;
pub mod iter;
mod raw;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use config::GrowthPolicy;
pub use error::ArrayError;
pub use hint::{capacity_hint, CapacityHint};
pub use iter::IntoIter;

/// Build a [`GrowableArray`] from a literal list or a repeated value.
///
/// - `growarray![a, b, c]` holds the listed values; capacity equals length.
/// - `growarray![value; n]` holds `n` clones of `value`.
///
/// ```
/// use growarray::growarray;
///
/// let listed = growarray![1, 2, 3];
/// let repeated = growarray![0u8; 4];
/// assert_eq!(listed.capacity(), 3);
/// assert_eq!(repeated, [0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! growarray {
    () => {
        $crate::GrowableArray::new()
    };
    ($value:expr; $len:expr) => {
        $crate::GrowableArray::from_elem($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::GrowableArray::from([$($value),+])
    };
}

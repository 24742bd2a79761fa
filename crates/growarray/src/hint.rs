//! Capacity hints for reserve-only construction.
//!
//! `GrowableArray::with_len(n)` builds `n` default elements. A
//! [`CapacityHint`] instead asks for `n` slots of storage and zero elements,
//! so the two intents never share a signature.

/// A requested capacity, consumed by
/// [`GrowableArray::with_capacity_hint`](crate::GrowableArray::with_capacity_hint)
/// or `GrowableArray::from(hint)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[must_use]
pub struct CapacityHint {
    value: usize,
}

impl CapacityHint {
    /// Wrap a requested capacity.
    pub const fn new(value: usize) -> Self {
        Self { value }
    }

    /// The requested capacity.
    pub const fn value(&self) -> usize {
        self.value
    }
}

/// Shorthand for [`CapacityHint::new`].
///
/// ```
/// use growarray::{capacity_hint, GrowableArray};
///
/// let arr: GrowableArray<u8> = GrowableArray::from(capacity_hint(16));
/// assert_eq!(arr.len(), 0);
/// assert_eq!(arr.capacity(), 16);
/// ```
pub const fn capacity_hint(value: usize) -> CapacityHint {
    CapacityHint::new(value)
}

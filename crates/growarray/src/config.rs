//! Capacity growth policy.

use crate::error::ArrayError;

/// Geometric growth parameters for a [`GrowableArray`](crate::GrowableArray).
///
/// Every array grows with [`GrowthPolicy::DOUBLING`]. The type is public so
/// callers can predict the capacity a given sequence of operations produces.
/// Fields are validated at construction so every policy makes progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthPolicy {
    factor: usize,
    min_capacity: usize,
}

impl GrowthPolicy {
    /// Default growth factor.
    pub const DEFAULT_FACTOR: usize = 2;

    /// Default floor for the first allocation.
    pub const DEFAULT_MIN_CAPACITY: usize = 1;

    /// Growth factor 2, minimum 1.
    pub const DOUBLING: GrowthPolicy =
        GrowthPolicy::new(Self::DEFAULT_FACTOR, Self::DEFAULT_MIN_CAPACITY);

    /// Create a policy.
    ///
    /// # Panics
    ///
    /// Panics if `factor < 2` or `min_capacity < 1`. Either would let
    /// [`capacity_for`](Self::capacity_for) stop growing.
    pub const fn new(factor: usize, min_capacity: usize) -> Self {
        assert!(factor >= 2, "growth factor must be at least 2");
        assert!(min_capacity >= 1, "minimum capacity must be at least 1");
        Self {
            factor,
            min_capacity,
        }
    }

    /// Multiplier applied to the capacity on each growth step.
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Capacity used when growing an array that has no storage yet.
    pub const fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity after inserting into a full buffer of `current` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if the product does not fit
    /// in `usize`.
    pub fn next_capacity(&self, current: usize) -> Result<usize, ArrayError> {
        if current == 0 {
            return Ok(self.min_capacity);
        }
        current
            .checked_mul(self.factor)
            .ok_or(ArrayError::CapacityOverflow {
                current,
                required: current.saturating_add(1),
            })
    }

    /// Smallest capacity reachable from `max(current, min_capacity)` by
    /// repeated multiplication that holds `required` slots.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::CapacityOverflow`] if no such capacity fits in
    /// `usize`.
    pub fn capacity_for(&self, current: usize, required: usize) -> Result<usize, ArrayError> {
        let mut capacity = current.max(self.min_capacity);
        while capacity < required {
            capacity = capacity
                .checked_mul(self.factor)
                .ok_or(ArrayError::CapacityOverflow { current, required })?;
        }
        Ok(capacity)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self::DOUBLING
    }
}

//! Fixed-capacity slot storage.
//!
//! [`RawBuffer`] owns one contiguous block of `capacity` slots and never
//! changes size. Growth happens one level up, by building a larger buffer and
//! swapping it in. Every slot always holds a valid `T`, so dropping the buffer
//! drops every slot exactly once, live or not.

#![allow(unsafe_code)]

use bytesize::ByteSize;
use log::error;

use crate::error::ArrayError;

/// Exclusive owner of a fixed block of `T` slots.
pub(crate) struct RawBuffer<T> {
    slots: Box<[T]>,
}

impl<T> RawBuffer<T> {
    /// A buffer with no slots. Does not allocate.
    pub(crate) fn empty() -> Self {
        Self {
            slots: Box::default(),
        }
    }

    /// Adopt an already-populated block; capacity is its length.
    pub(crate) fn from_boxed(slots: Box<[T]>) -> Self {
        Self { slots }
    }

    /// Number of slots.
    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        &self.slots
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Exchange blocks with `other` in O(1).
    #[inline]
    pub(crate) fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.slots, &mut other.slots);
    }

    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub(crate) unsafe fn get_unchecked(&self, index: usize) -> &T {
        // SAFETY: caller guarantees index < capacity.
        unsafe { self.slots.get_unchecked(index) }
    }

    /// # Safety
    ///
    /// `index` must be less than [`capacity`](Self::capacity).
    #[inline]
    pub(crate) unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        // SAFETY: caller guarantees index < capacity.
        unsafe { self.slots.get_unchecked_mut(index) }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        self.slots.into_vec()
    }
}

impl<T: Default> RawBuffer<T> {
    /// Allocate `capacity` slots, each holding `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocFailed`] if the allocator refuses the block.
    pub(crate) fn try_new(capacity: usize) -> Result<Self, ArrayError> {
        if capacity == 0 {
            return Ok(Self::empty());
        }
        let mut slots = Vec::new();
        if slots.try_reserve_exact(capacity).is_err() {
            let bytes = capacity.saturating_mul(std::mem::size_of::<T>());
            error!(
                "failed to allocate {capacity} slots ({})",
                ByteSize::b(bytes as u64)
            );
            return Err(ArrayError::AllocFailed {
                requested: capacity,
            });
        }
        slots.resize_with(capacity, T::default);
        Ok(Self {
            slots: slots.into_boxed_slice(),
        })
    }
}

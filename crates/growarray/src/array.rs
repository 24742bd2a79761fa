//! The growable array and its storage-management core.
//!
//! A [`GrowableArray`] owns one `RawBuffer` plus a live length. Slots
//! `[0, len)` are the elements; slots `[len, capacity)` hold stale or default
//! values that are never observed through the public API. Every mutation that
//! needs more room goes through `relocate`, which builds the
//! replacement buffer completely before swapping it in, so a failed growth
//! leaves the old contents untouched.

use std::fmt;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::SliceIndex;

use log::trace;

use crate::config::GrowthPolicy;
use crate::error::ArrayError;
use crate::hint::CapacityHint;
use crate::raw::RawBuffer;

const POLICY: GrowthPolicy = GrowthPolicy::DOUBLING;

/// A contiguous, resizable sequence of `T` with explicit capacity control.
///
/// Growth is geometric (factor 2, minimum 1), so a run of `n` appends
/// performs O(n) element transfers in total. Elements need [`Default`] for
/// any operation that allocates: new storage is filled with default values
/// and elements are moved into it by swapping.
pub struct GrowableArray<T> {
    buffer: RawBuffer<T>,
    len: usize,
}

#[cold]
#[track_caller]
fn growth_failed(err: ArrayError) -> ! {
    panic!("growable array growth failed: {err}")
}

impl<T> GrowableArray<T> {
    /// Create an empty array. Does not allocate.
    pub fn new() -> Self {
        Self {
            buffer: RawBuffer::empty(),
            len: 0,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots in the current buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.as_slice()[..self.len]
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.as_mut_slice()[..len]
    }

    /// Checked element access.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`. The array is
    /// not modified.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Checked mutable element access.
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::OutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::OutOfRange { index, len })
    }

    /// Element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert it.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn at_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} >= len {}", self.len);
        // SAFETY: index < len <= capacity per the caller's contract.
        unsafe { self.buffer.get_unchecked(index) }
    }

    /// Mutable element access without a bounds check.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len). Debug builds assert it.
    #[allow(unsafe_code)]
    #[inline]
    pub unsafe fn at_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} >= len {}", self.len);
        // SAFETY: index < len <= capacity per the caller's contract.
        unsafe { self.buffer.get_unchecked_mut(index) }
    }

    /// Drop the logical length to zero.
    ///
    /// Capacity is unchanged and the old values stay in their slots until
    /// overwritten or until the array is dropped.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Remove the element at `index`, shifting the tail left by one.
    ///
    /// Returns `index`, which now refers to the element that followed the
    /// erased one, or equals `len()` if the last element was erased.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        assert!(
            index < len,
            "erase index (is {index}) should be < len (is {len})"
        );
        // The erased value rotates into the first dead slot.
        self.buffer.as_mut_slice()[index..len].rotate_left(1);
        self.len -= 1;
        index
    }

    /// Exchange storage, length and capacity with `other` in O(1).
    pub fn swap_with(&mut self, other: &mut Self) {
        self.buffer.swap(&mut other.buffer);
        std::mem::swap(&mut self.len, &mut other.len);
    }

    /// Consume the array, returning the live elements.
    pub fn into_vec(self) -> Vec<T> {
        let mut slots = self.buffer.into_vec();
        slots.truncate(self.len);
        slots
    }
}

impl<T: Default> GrowableArray<T> {
    /// Create an array of `len` default elements with capacity `len`.
    pub fn with_len(len: usize) -> Self {
        let buffer = RawBuffer::try_new(len).unwrap_or_else(|err| growth_failed(err));
        Self { buffer, len }
    }

    /// Create an empty array with exactly `capacity` slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let buffer = RawBuffer::try_new(capacity).unwrap_or_else(|err| growth_failed(err));
        Self { buffer, len: 0 }
    }

    /// Create an empty array with the capacity carried by `hint`.
    pub fn with_capacity_hint(hint: CapacityHint) -> Self {
        Self::with_capacity(hint.value())
    }

    /// Change the live length to `new_len`.
    ///
    /// Shrinking only moves the length. Growing within capacity overwrites
    /// the newly exposed slots with `T::default()`. Growing past capacity
    /// doubles from `max(capacity, 1)` until `new_len` fits, then moves the
    /// live elements into the new buffer.
    pub fn resize(&mut self, new_len: usize) {
        if new_len > self.capacity() {
            let new_capacity = POLICY
                .capacity_for(self.capacity(), new_len)
                .unwrap_or_else(|err| growth_failed(err));
            // Slots past the moved elements are already default.
            self.relocate(new_capacity, None)
                .unwrap_or_else(|err| growth_failed(err));
        } else if new_len > self.len {
            self.fill_default(self.len, new_len);
        }
        self.len = new_len;
    }

    /// Ensure capacity is at least `new_capacity`, allocating exactly that
    /// many slots if it is not. Length and elements are unchanged.
    ///
    /// # Panics
    ///
    /// Panics if the allocation fails.
    pub fn reserve(&mut self, new_capacity: usize) {
        self.try_reserve(new_capacity)
            .unwrap_or_else(|err| growth_failed(err));
    }

    /// Fallible [`reserve`](Self::reserve).
    ///
    /// # Errors
    ///
    /// Returns [`ArrayError::AllocFailed`] if the new buffer cannot be
    /// allocated. The array is left exactly as it was.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }
        self.relocate(new_capacity, None)
    }

    /// Append `value`. Equivalent to `insert(len(), value)`.
    pub fn push_back(&mut self, value: T) {
        self.insert(self.len, value);
    }

    /// Append a clone of `value`.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Remove and return the last element, or `None` if the array is empty.
    ///
    /// Capacity is unchanged; the vacated slot is left holding a default.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let len = self.len;
        Some(std::mem::take(&mut self.buffer.as_mut_slice()[len]))
    }

    /// Insert `value` at `index`, shifting the tail right by one.
    ///
    /// If the buffer is full, capacity doubles (or becomes 1 when it was 0)
    /// and the elements are moved into the new buffer around the inserted
    /// slot. Returns `index`, the position of the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> usize {
        let len = self.len;
        assert!(
            index <= len,
            "insertion index (is {index}) should be <= len (is {len})"
        );
        if len == self.capacity() {
            POLICY
                .next_capacity(self.capacity())
                .and_then(|capacity| self.relocate(capacity, Some(index)))
                .unwrap_or_else(|err| growth_failed(err));
        } else {
            // Slot `len` is dead; rotating brings it to `index`.
            self.buffer.as_mut_slice()[index..=len].rotate_right(1);
        }
        self.buffer.as_mut_slice()[index] = value;
        self.len += 1;
        index
    }

    /// Insert a clone of `value` at `index`. See [`insert`](Self::insert).
    pub fn insert_cloned(&mut self, index: usize, value: &T) -> usize
    where
        T: Clone,
    {
        self.insert(index, value.clone())
    }

    /// Move the live elements into a new buffer of `new_capacity` slots.
    ///
    /// With `gap = Some(i)` the elements at `[i, len)` land one slot to the
    /// right, leaving slot `i` holding a default for the caller to overwrite.
    /// The new buffer is fully allocated before anything moves.
    fn relocate(&mut self, new_capacity: usize, gap: Option<usize>) -> Result<(), ArrayError> {
        let len = self.len;
        let old_capacity = self.capacity();
        debug_assert!(new_capacity >= len + usize::from(gap.is_some()));

        let mut fresh = RawBuffer::try_new(new_capacity)?;
        let live = &mut self.buffer.as_mut_slice()[..len];
        let target = fresh.as_mut_slice();
        match gap {
            None => target[..len].swap_with_slice(live),
            Some(offset) => {
                let (head, tail) = live.split_at_mut(offset);
                target[..offset].swap_with_slice(head);
                target[offset + 1..=len].swap_with_slice(tail);
            }
        }

        trace!("relocated {len} elements: capacity {old_capacity} -> {new_capacity}");
        self.buffer.swap(&mut fresh);
        Ok(())
    }

    fn fill_default(&mut self, from: usize, to: usize) {
        for slot in &mut self.buffer.as_mut_slice()[from..to] {
            *slot = T::default();
        }
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Create an array of `len` clones of `value` with capacity `len`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::from(vec![value; len])
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    /// Deep copy of the live elements; the copy's capacity equals its length.
    fn clone(&self) -> Self {
        Self::from(self.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowableArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> From<Vec<T>> for GrowableArray<T> {
    fn from(values: Vec<T>) -> Self {
        let len = values.len();
        Self {
            buffer: RawBuffer::from_boxed(values.into_boxed_slice()),
            len,
        }
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(values: [T; N]) -> Self {
        Self {
            buffer: RawBuffer::from_boxed(Box::new(values)),
            len: N,
        }
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(values: &[T]) -> Self {
        Self::from(values.to_vec())
    }
}

impl<T: Default> From<CapacityHint> for GrowableArray<T> {
    fn from(hint: CapacityHint) -> Self {
        Self::with_capacity_hint(hint)
    }
}

impl<T> From<GrowableArray<T>> for Vec<T> {
    fn from(array: GrowableArray<T>) -> Self {
        array.into_vec()
    }
}

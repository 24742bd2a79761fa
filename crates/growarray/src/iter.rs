//! Iteration, collection and extension.
//!
//! Borrowing iteration goes through the live slice (`iter()`/`iter_mut()` via
//! deref). [`IntoIter`] consumes the array and yields only the live elements.
//! `Extend` appends one element at a time through `push_back`, so the
//! capacity sequence is the same as for a loop of appends.

use std::fmt;
use std::iter::FusedIterator;

use crate::array::GrowableArray;

/// Owning iterator over the live elements of a [`GrowableArray`].
pub struct IntoIter<T> {
    inner: std::vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner.as_slice()).finish()
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.into_vec().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    /// Collects into an array whose capacity equals the number of items.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Default> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + Default + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(*value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_iter_yields_only_live_elements() {
        let mut arr = GrowableArray::from([1, 2, 3]);
        arr.reserve(10);
        arr.pop_back();
        let collected: Vec<_> = arr.into_iter().collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn into_iter_is_double_ended_and_exact() {
        let arr = GrowableArray::from(['a', 'b', 'c']);
        let mut iter = arr.into_iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next_back(), Some('c'));
        assert_eq!(iter.next(), Some('a'));
        assert_eq!(iter.len(), 1);
    }

    #[test]
    fn borrowed_iteration() {
        let mut arr = GrowableArray::from([1, 2, 3]);
        for v in &mut arr {
            *v *= 10;
        }
        let total: i32 = (&arr).into_iter().sum();
        assert_eq!(total, 60);
    }

    #[test]
    fn collect_is_exact_capacity() {
        let arr: GrowableArray<u32> = (0..5).collect();
        assert_eq!(arr.len(), 5);
        assert_eq!(arr.capacity(), 5);
    }

    #[test]
    fn extend_follows_push_growth() {
        let mut arr = GrowableArray::new();
        arr.extend(0..5);
        assert_eq!(arr.as_slice(), &[0, 1, 2, 3, 4]);
        assert_eq!(arr.capacity(), 8);
    }

    #[test]
    fn extend_by_reference() {
        let mut arr = GrowableArray::from([1u8]);
        arr.extend(&[2u8, 3]);
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn debug_shows_remaining() {
        let mut iter = GrowableArray::from([1, 2]).into_iter();
        iter.next();
        assert_eq!(format!("{iter:?}"), "IntoIter([2])");
    }
}

//! Equality, ordering and hashing over the live element sequence.
//!
//! Two arrays are equal when they have the same length and equal elements in
//! the same order; capacity never participates. Ordering is lexicographic, so
//! a strict prefix compares less. `<=`, `>` and `>=` all derive from
//! `partial_cmp`.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::array::GrowableArray;

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialOrd> PartialOrd for GrowableArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowableArray<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for GrowableArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn arr<const N: usize>(values: [i32; N]) -> GrowableArray<i32> {
        GrowableArray::from(values)
    }

    fn hash_of(value: &GrowableArray<i32>) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equality_is_size_and_order_sensitive() {
        assert_eq!(arr([1, 2, 3]), arr([1, 2, 3]));
        assert_ne!(arr([1, 2, 3]), arr([1, 2]));
        assert_ne!(arr([1, 2, 3]), arr([3, 2, 1]));
    }

    #[test]
    fn equality_ignores_capacity() {
        let mut a = arr([1, 2]);
        a.reserve(64);
        assert_eq!(a, arr([1, 2]));
    }

    #[test]
    fn equality_ignores_dead_slots() {
        let mut a = arr([1, 2, 3]);
        a.pop_back();
        assert_eq!(a, arr([1, 2]));
    }

    #[test]
    fn prefix_is_less() {
        assert!(arr([1, 2]) < arr([1, 2, 3]));
        assert!(arr([1, 2, 3]) > arr([1, 2]));
        assert!(arr([]) < arr([0]));
    }

    #[test]
    fn lexicographic_ordering() {
        assert!(arr([1, 3]) > arr([1, 2, 9]));
        assert!(arr([1, 2]) <= arr([1, 2]));
        assert!(arr([1, 2]) >= arr([1, 2]));
        assert!(arr([0, 5]) <= arr([1]));
        assert_eq!(arr([4]).cmp(&arr([4])), Ordering::Equal);
    }

    #[test]
    fn equal_arrays_hash_equal() {
        let mut a = arr([7, 8]);
        a.reserve(10);
        assert_eq!(hash_of(&a), hash_of(&arr([7, 8])));
    }

    #[test]
    fn compares_against_slices_and_vecs() {
        let a = arr([1, 2]);
        assert_eq!(a, [1, 2]);
        assert_eq!(a, vec![1, 2]);
        assert!(a == *[1, 2].as_slice());
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn ordering_matches_vec(
                a in proptest::collection::vec(0i32..4, 0..6),
                b in proptest::collection::vec(0i32..4, 0..6),
            ) {
                let x = GrowableArray::from(a.clone());
                let y = GrowableArray::from(b.clone());
                prop_assert_eq!(x == y, a == b);
                prop_assert_eq!(y == x, x == y);
                prop_assert_eq!(x.cmp(&y), a.cmp(&b));
                prop_assert_eq!(x < y, a < b);
                prop_assert_eq!(x <= y, !(y < x));
                prop_assert_eq!(x >= y, y <= x);
            }
        }
    }
}

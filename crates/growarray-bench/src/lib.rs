//! Benchmark workloads for the growarray container.
//!
//! - [`filled`]: an array of `len` sequential values built by appends
//! - [`reserved`]: an empty array with room for `len` values
//! - [`front_insert_positions`]: deterministic insert positions for a growing array

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use growarray::{capacity_hint, GrowableArray};

/// Build an array of `0..len` through `push_back`, so its capacity follows
/// the growth policy.
pub fn filled(len: u64) -> GrowableArray<u64> {
    let mut arr = GrowableArray::new();
    for i in 0..len {
        arr.push_back(i);
    }
    arr
}

/// An empty array with exactly `len` slots reserved.
pub fn reserved(len: u64) -> GrowableArray<u64> {
    GrowableArray::from(capacity_hint(len as usize))
}

/// Insert positions for `count` inserts into an initially empty array.
///
/// Position `i` is always within `[0, i]`, skewed toward the front so most
/// inserts shift the bulk of the array.
pub fn front_insert_positions(count: usize) -> Vec<usize> {
    (0..count).map(|i| (i * 7) % (i / 4 + 1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_has_power_of_two_capacity() {
        let arr = filled(100);
        assert_eq!(arr.len(), 100);
        assert_eq!(arr.capacity(), 128);
    }

    #[test]
    fn reserved_is_empty() {
        let arr = reserved(64);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), 64);
    }

    #[test]
    fn insert_positions_stay_in_bounds() {
        for (i, pos) in front_insert_positions(500).into_iter().enumerate() {
            assert!(pos <= i);
        }
    }
}

//! Instrumented element types for growarray tests and benchmarks.
//!
//! - [`Probe`]: counts default constructions, clones and drops in
//!   thread-local counters, read back through [`ProbeStats`].
//! - [`MoveOnly`]: an element without `Clone`, for exercising the move-only
//!   paths (`resize`, `push_back`, `insert`).

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;

thread_local! {
    static DEFAULTS: Cell<usize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
    static DROPS: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

/// Snapshot of the probe counters for the current thread.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeStats {
    pub defaults: usize,
    pub clones: usize,
    pub drops: usize,
}

impl ProbeStats {
    /// Zero the counters for the current thread.
    pub fn reset() {
        DEFAULTS.with(|c| c.set(0));
        CLONES.with(|c| c.set(0));
        DROPS.with(|c| c.set(0));
    }

    /// Read the counters for the current thread.
    pub fn current() -> Self {
        Self {
            defaults: DEFAULTS.with(Cell::get),
            clones: CLONES.with(Cell::get),
            drops: DROPS.with(Cell::get),
        }
    }
}

/// An element that records how it was constructed and dropped.
///
/// Values made with [`Probe::new`] are not counted as defaults, so the
/// `defaults` counter measures slots the container filled on its own.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Probe(pub u32);

impl Probe {
    pub fn new(value: u32) -> Self {
        Probe(value)
    }
}

impl Default for Probe {
    fn default() -> Self {
        bump(&DEFAULTS);
        Probe(0)
    }
}

impl Clone for Probe {
    fn clone(&self) -> Self {
        bump(&CLONES);
        Probe(self.0)
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        bump(&DROPS);
    }
}

/// A movable, non-cloneable element.
#[derive(Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct MoveOnly(pub Box<u32>);

impl MoveOnly {
    pub fn new(value: u32) -> Self {
        MoveOnly(Box::new(value))
    }

    pub fn value(&self) -> u32 {
        *self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_counts_defaults_and_clones() {
        ProbeStats::reset();
        let a = Probe::default();
        let _b = a.clone();
        let _c = Probe::new(3);
        let stats = ProbeStats::current();
        assert_eq!(stats.defaults, 1);
        assert_eq!(stats.clones, 1);
        assert_eq!(stats.drops, 0);
    }

    #[test]
    fn probe_counts_drops() {
        ProbeStats::reset();
        drop(Probe::new(1));
        drop(Probe::new(2));
        assert_eq!(ProbeStats::current().drops, 2);
    }

    #[test]
    fn move_only_default_is_zero() {
        assert_eq!(MoveOnly::default().value(), 0);
        assert_eq!(MoveOnly::new(7).value(), 7);
    }
}

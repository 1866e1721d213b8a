//! Comparison instrumentation for tree operations.
//!
//! Each tree owns one [`ComparisonCounter`]. The counter lives in a `Cell` so
//! read-only traversals can count through a shared reference.

use std::cell::Cell;
use std::cmp::Ordering;

/// Running count of key comparisons made by one tree.
#[derive(Debug, Default, Clone)]
pub(crate) struct ComparisonCounter {
    count: Cell<u64>,
}

impl ComparisonCounter {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Compares `a` against `b` and records one comparison.
    #[inline]
    pub(crate) fn compare<K: Ord + ?Sized>(&self, a: &K, b: &K) -> Ordering {
        self.bump();
        a.cmp(b)
    }

    #[inline]
    pub(crate) fn bump(&self) {
        self.count.set(self.count.get() + 1);
    }

    /// Comparisons recorded since the last reset.
    pub(crate) fn get(&self) -> u64 {
        self.count.get()
    }

    pub(crate) fn reset(&self) {
        self.count.set(0);
    }
}

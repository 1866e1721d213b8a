//! Range query operations for Bst.
//!
//! Ranges are walked in order with an explicit stack. Every node reached costs
//! one comparison against the lower bound, made before deciding whether its
//! left subtree can hold keys in range, and one comparison against the upper
//! bound, made before deciding whether to emit it and walk its right subtree.
//! An unbounded side costs nothing.

use std::cmp::Ordering;
use std::ops::{Bound, RangeBounds};

use crate::types::{Bst, Node};

impl<K: Ord, V> Bst<K, V> {
    /// Visit every entry with `lo <= key < hi` in ascending key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// for key in [10, 5, 15, 3, 7] {
    ///     tree.insert(key, key * 100);
    /// }
    /// tree.reset_metrics();
    ///
    /// let mut seen = Vec::new();
    /// tree.range_apply(&5, &15, |key, _| seen.push(*key));
    /// assert_eq!(seen, vec![5, 7, 10]);
    /// assert_eq!(tree.comparisons(), 10);
    /// ```
    pub fn range_apply<F>(&self, lo: &K, hi: &K, visitor: F)
    where
        F: FnMut(&K, &V),
    {
        self.range_apply_bounds((Bound::Included(lo), Bound::Excluded(hi)), visitor);
    }

    /// Visit every entry inside `range` in ascending key order.
    ///
    /// Accepts any range syntax:
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// for key in 0..10 {
    ///     tree.insert(key, ());
    /// }
    ///
    /// let mut seen = Vec::new();
    /// tree.range_apply_bounds(3..=5, |key, _| seen.push(*key));
    /// assert_eq!(seen, vec![3, 4, 5]);
    ///
    /// seen.clear();
    /// tree.range_apply_bounds(8.., |key, _| seen.push(*key));
    /// assert_eq!(seen, vec![8, 9]);
    /// ```
    pub fn range_apply_bounds<R, F>(&self, range: R, mut visitor: F)
    where
        R: RangeBounds<K>,
        F: FnMut(&K, &V),
    {
        let lower = range.start_bound();
        let upper = range.end_bound();

        let mut stack: Vec<(&Node<K, V>, bool)> = Vec::new();
        let mut current = self.root.as_deref();

        loop {
            while let Some(node) = current {
                let above_lower = self.above_lower(&node.key, lower);
                stack.push((node, above_lower));
                // Keys left of a node below the lower bound are below it too.
                current = if above_lower { node.left.as_deref() } else { None };
            }

            let Some((node, above_lower)) = stack.pop() else {
                break;
            };

            let below_upper = self.below_upper(&node.key, upper);
            if above_lower && below_upper {
                visitor(&node.key, &node.value);
            }
            current = if below_upper { node.right.as_deref() } else { None };
        }
    }

    // ============================================================================
    // BOUND CHECKS
    // ============================================================================

    fn above_lower(&self, key: &K, lower: Bound<&K>) -> bool {
        match lower {
            Bound::Included(bound) => self.counter.compare(key, bound) != Ordering::Less,
            Bound::Excluded(bound) => self.counter.compare(key, bound) == Ordering::Greater,
            Bound::Unbounded => true,
        }
    }

    fn below_upper(&self, key: &K, upper: Bound<&K>) -> bool {
        match upper {
            Bound::Included(bound) => self.counter.compare(key, bound) != Ordering::Greater,
            Bound::Excluded(bound) => self.counter.compare(key, bound) == Ordering::Less,
            Bound::Unbounded => true,
        }
    }
}

//! GET operations for Bst.
//!
//! This module contains the counted lookups (`find`, `find_mut`,
//! `get_or_insert_with`), the shared descent helper used by insert and erase,
//! and the metric accessors.

use std::cmp::Ordering;

use crate::metrics::ComparisonCounter;
use crate::types::{Bst, Link, Node};

impl<K: Ord, V> Bst<K, V> {
    // ============================================================================
    // PUBLIC GET OPERATIONS
    // ============================================================================

    /// Get a reference to the value associated with a key.
    ///
    /// Counts one comparison per node visited on the way down.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(10, "ten");
    /// tree.insert(5, "five");
    /// tree.reset_metrics();
    ///
    /// assert_eq!(tree.find(&5), Some(&"five"));
    /// assert_eq!(tree.comparisons(), 2);
    /// assert_eq!(tree.find(&1), None);
    /// assert_eq!(tree.comparisons(), 4);
    /// ```
    pub fn find(&self, key: &K) -> Option<&V> {
        let mut current = self.root.as_deref();

        while let Some(node) = current {
            current = match self.counter.compare(key, &node.key) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Get a mutable reference to the value for a key.
    ///
    /// The value can be changed in place without a second descent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert("lee".to_string(), vec![0]);
    /// if let Some(rids) = tree.find_mut(&"lee".to_string()) {
    ///     rids.push(2);
    /// }
    /// assert_eq!(tree.find(&"lee".to_string()), Some(&vec![0, 2]));
    /// ```
    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        Self::locate_slot(&mut self.root, &self.counter, key)
            .as_deref_mut()
            .map(|node| &mut node.value)
    }

    /// Check if key exists in the tree. Counted like `find`.
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Return the value for `key`, creating it with `default` if absent.
    ///
    /// One counted descent either way.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let slot = Self::locate_slot(&mut self.root, &self.counter, &key);
        if slot.is_none() {
            self.len += 1;
        }
        &mut slot
            .get_or_insert_with(|| Box::new(Node::new(key, default())))
            .value
    }

    // ============================================================================
    // DESCENT HELPERS
    // ============================================================================

    /// Walk down from `current` and return the link that holds `key`, or the
    /// empty link where `key` would be attached.
    pub(crate) fn locate_slot<'a>(
        mut current: &'a mut Link<K, V>,
        counter: &ComparisonCounter,
        key: &K,
    ) -> &'a mut Link<K, V> {
        loop {
            let ordering = current
                .as_deref()
                .map(|node| counter.compare(key, &node.key));

            current = match (ordering, current) {
                (Some(Ordering::Less), Some(node)) => &mut node.left,
                (Some(Ordering::Greater), Some(node)) => &mut node.right,
                (_, slot) => return slot,
            };
        }
    }
}

impl<K, V> Bst<K, V> {
    // ============================================================================
    // SIZE AND METRICS
    // ============================================================================

    /// Returns the number of entries in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Key comparisons made since the last [`reset_metrics`](Self::reset_metrics).
    pub fn comparisons(&self) -> u64 {
        self.counter.get()
    }

    /// Zero the comparison counter.
    pub fn reset_metrics(&self) {
        self.counter.reset();
    }

    /// Number of nodes on the longest root-to-leaf path. Not counted.
    pub fn height(&self) -> usize {
        let mut stack: Vec<(&Node<K, V>, usize)> = Vec::new();
        stack.extend(self.root.as_deref().map(|root| (root, 1)));

        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|child| (child, depth + 1)));
            stack.extend(node.right.as_deref().map(|child| (child, depth + 1)));
        }
        height
    }
}

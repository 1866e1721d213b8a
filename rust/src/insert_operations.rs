//! INSERT operations for Bst.
//!
//! Insertion descends from the root with one counted comparison per node and
//! attaches a new leaf at the empty link it reaches. The tree is never
//! rebalanced.

use std::mem;

use crate::types::{Bst, Node};

impl<K: Ord, V> Bst<K, V> {
    /// Insert a key-value pair into the tree.
    ///
    /// If the key already exists its value is replaced and the old value is
    /// returned; otherwise a new leaf is created and `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// assert_eq!(tree.insert(1, "one"), None);
    /// assert_eq!(tree.insert(1, "uno"), Some("one"));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let slot = Self::locate_slot(&mut self.root, &self.counter, &key);
        match slot {
            Some(node) => Some(mem::replace(&mut node.value, value)),
            None => {
                *slot = Some(Box::new(Node::new(key, value)));
                self.len += 1;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_counts_descent() {
        let mut tree = Bst::new();
        tree.insert(10, ());
        assert_eq!(tree.comparisons(), 0);

        tree.insert(5, ());
        tree.insert(15, ());
        assert_eq!(tree.comparisons(), 2);

        tree.reset_metrics();
        tree.insert(7, ());
        assert_eq!(tree.comparisons(), 2);
    }

    #[test]
    fn test_insert_sorted_input_builds_a_chain() {
        let mut tree = Bst::new();
        for key in 0..100 {
            tree.insert(key, key * 2);
        }
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.height(), 100);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_overwrite_keeps_shape() {
        let mut tree = Bst::new();
        tree.insert("b", 1);
        tree.insert("a", 2);
        let height = tree.height();
        assert_eq!(tree.insert("a", 3), Some(2));
        assert_eq!(tree.height(), height);
        assert_eq!(tree.find(&"a"), Some(&3));
    }
}

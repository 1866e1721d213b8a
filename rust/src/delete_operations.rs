//! DELETE operations for Bst.
//!
//! This module contains key removal, tree clearing and the iterative teardown
//! used by `Drop`. A chain-shaped tree can be as deep as it is long, so
//! nothing here recurses.

use crate::types::{Bst, Link, Node};

impl<K: Ord, V> Bst<K, V> {
    /// Remove a key from the tree. Returns whether a node was removed.
    ///
    /// Locating the node is counted. A node with two children is replaced by
    /// its in-order successor, which is spliced out of the right subtree
    /// without further key comparisons.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(2, "two");
    /// assert!(tree.erase(&2));
    /// assert!(!tree.erase(&2));
    /// assert!(tree.is_empty());
    /// ```
    pub fn erase(&mut self, key: &K) -> bool {
        let slot = Self::locate_slot(&mut self.root, &self.counter, key);
        if slot.is_none() {
            return false;
        }
        Self::unlink(slot);
        self.len -= 1;
        true
    }
}

impl<K, V> Bst<K, V> {
    /// Remove every entry. The comparison counter is left untouched.
    pub fn clear(&mut self) {
        Self::teardown(self.root.take());
        self.len = 0;
    }

    /// Detach the node held by `slot` and put its replacement in its place.
    fn unlink(slot: &mut Link<K, V>) {
        let Some(mut node) = slot.take() else {
            return;
        };

        *slot = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut right = Some(right);
                match Self::detach_min(&mut right) {
                    Some(mut successor) => {
                        successor.left = Some(left);
                        successor.right = right;
                        Some(successor)
                    }
                    None => Some(left),
                }
            }
        };
    }

    /// Remove the leftmost node of the subtree held by `slot`, splicing its
    /// right child into its former position.
    fn detach_min(slot: &mut Link<K, V>) -> Option<Box<Node<K, V>>> {
        let mut current = slot;
        while current.as_deref().is_some_and(|node| node.left.is_some()) {
            current = &mut current.as_deref_mut()?.left;
        }

        let mut min = current.take()?;
        *current = min.right.take();
        Some(min)
    }

    fn teardown(root: Link<K, V>) {
        let mut stack: Vec<Box<Node<K, V>>> = root.into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K, V> Drop for Bst<K, V> {
    fn drop(&mut self) {
        Self::teardown(self.root.take());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(keys: &[i32]) -> Bst<i32, i32> {
        let mut tree = Bst::new();
        for &key in keys {
            tree.insert(key, key * 10);
        }
        tree
    }

    fn keys(tree: &Bst<i32, i32>) -> Vec<i32> {
        tree.keys().copied().collect()
    }

    #[test]
    fn test_erase_leaf() {
        let mut tree = build(&[10, 5, 15]);
        assert!(tree.erase(&5));
        assert_eq!(keys(&tree), vec![10, 15]);
        assert!(tree.check_invariants());
    }

    #[test]
    fn test_erase_node_with_one_child() {
        let mut tree = build(&[10, 5, 3]);
        assert!(tree.erase(&5));
        assert_eq!(keys(&tree), vec![3, 10]);
        assert_eq!(tree.height(), 2);
    }

    #[test]
    fn test_erase_root_with_two_children_uses_successor() {
        let mut tree = build(&[10, 5, 15, 12, 20, 13]);
        assert!(tree.erase(&10));
        assert_eq!(keys(&tree), vec![5, 12, 13, 15, 20]);
        assert!(tree.check_invariants());

        // 12 was the successor; it is the new root.
        tree.reset_metrics();
        assert_eq!(tree.find(&12), Some(&120));
        assert_eq!(tree.comparisons(), 1);
        assert_eq!(tree.find(&13), Some(&130));
    }

    #[test]
    fn test_erase_missing_counts_descent() {
        let mut tree = build(&[10, 5, 15]);
        tree.reset_metrics();
        assert!(!tree.erase(&6));
        assert_eq!(tree.comparisons(), 2);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn test_deep_chain_drops_without_overflow() {
        let mut tree = Bst::new();
        for key in 0..20_000 {
            tree.insert(key, ());
        }
        assert_eq!(tree.len(), 20_000);
        drop(tree);
    }

    #[test]
    fn test_clear_resets_len() {
        let mut tree = build(&[3, 1, 2]);
        tree.clear();
        assert!(tree.is_empty());
        assert_eq!(tree.find(&1), None);
    }
}

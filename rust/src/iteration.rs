//! Iterator implementations for Bst.
//!
//! These iterators walk the whole tree in key order without touching the
//! comparison counter. They exist for validation, debugging and tests; counted
//! scans go through `range_apply`.

use std::fmt;

use crate::types::{Bst, Node};

// ============================================================================
// ITERATOR STRUCTS
// ============================================================================

/// In-order iterator over key-value pairs.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

/// Iterator over keys in ascending order.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

/// Iterator over values in key order.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

// ============================================================================
// BST ITERATOR METHODS
// ============================================================================

impl<K, V> Bst<K, V> {
    /// Returns an iterator over all key-value pairs in sorted order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstindex::Bst;
    ///
    /// let mut tree = Bst::new();
    /// tree.insert(2, "b");
    /// tree.insert(1, "a");
    /// let items: Vec<_> = tree.iter().collect();
    /// assert_eq!(items, vec![(&1, &"a"), (&2, &"b")]);
    /// assert_eq!(tree.comparisons(), 1); // from the second insert only
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_left_spine(self.root.as_deref());
        iter
    }

    /// Returns an iterator over all keys in sorted order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over all values in key order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }
}

// ============================================================================
// ITERATOR IMPLEMENTATIONS
// ============================================================================

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining = self.remaining.saturating_sub(1);
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K, V> ExactSizeIterator for Iter<'a, K, V> {}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, K, V> IntoIterator for &'a Bst<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Bst<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_is_sorted_and_uncounted() {
        let mut tree = Bst::new();
        for key in [50, 20, 80, 10, 30, 70, 90, 25] {
            tree.insert(key, key.to_string());
        }
        tree.reset_metrics();

        let keys: Vec<i32> = tree.keys().copied().collect();
        assert_eq!(keys, vec![10, 20, 25, 30, 50, 70, 80, 90]);
        assert_eq!(tree.values().next().map(String::as_str), Some("10"));
        assert_eq!(tree.iter().len(), 8);
        assert_eq!(tree.comparisons(), 0);
    }

    #[test]
    fn test_debug_renders_as_map() {
        let mut tree = Bst::new();
        tree.insert("kim", 1);
        tree.insert("lee", 0);
        assert_eq!(format!("{:?}", tree), r#"{"kim": 1, "lee": 0}"#);
    }
}

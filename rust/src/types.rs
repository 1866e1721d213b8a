//! Core types and data structures for the BST index engine.
//!
//! This module contains the tree and node structures, the record slot stored in
//! the heap, and the result types returned by engine queries.

use crate::metrics::ComparisonCounter;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Default upper sentinel appended to a prefix to close a prefix scan.
///
/// `char::MAX` sorts after every other Unicode scalar value, so
/// `prefix + DEFAULT_PREFIX_SENTINEL` is greater than any name that starts
/// with `prefix`.
pub const DEFAULT_PREFIX_SENTINEL: char = char::MAX;

/// Sentinel used by classic ASCII-only indexes: the character right after `'z'`.
pub const ASCII_PREFIX_SENTINEL: char = '{';

// ============================================================================
// TYPE DEFINITIONS
// ============================================================================

/// Row identifier: the position of a record slot in the heap.
pub type Rid = usize;

/// Owning link to a subtree.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Unbalanced binary search tree with comparison instrumentation.
///
/// Every key comparison made by `insert`, `find`, `find_mut`, `erase` and
/// `range_apply` bumps a per-tree counter. Callers reset the counter with
/// [`Bst::reset_metrics`] before an operation whose cost they want to report.
///
/// No rebalancing is performed: the tree shape depends only on insertion
/// order, and the worst case depth is `n`.
///
/// # Examples
///
/// ```
/// use bstindex::Bst;
///
/// let mut tree = Bst::new();
/// tree.insert(10, "ten");
/// tree.insert(5, "five");
/// tree.insert(15, "fifteen");
///
/// tree.reset_metrics();
/// assert_eq!(tree.find(&15), Some(&"fifteen"));
/// assert_eq!(tree.comparisons(), 2);
/// ```
///
/// # Performance Characteristics
///
/// - **Insertion / lookup / deletion**: O(depth), O(log n) on random input
/// - **Range scan**: O(depth + k) where k is the number of keys visited
pub struct Bst<K, V> {
    /// The root of the tree.
    pub(crate) root: Link<K, V>,
    /// Number of nodes.
    pub(crate) len: usize,
    /// Key comparisons made since the last reset.
    pub(crate) counter: ComparisonCounter,
}

/// Tree node. Each child is exclusively owned by its parent.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
        }
    }
}

/// A record slot stored in the heap.
///
/// The `id` never changes once the record is inserted. The `deleted` flag is
/// owned by the engine; callers can only observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Unique student id.
    pub id: i32,
    /// First name. Not indexed.
    pub first: String,
    /// Last name as supplied; the name index stores its folded form.
    pub last: String,
    pub(crate) deleted: bool,
}

impl Record {
    /// Creates a live record.
    pub fn new(id: i32, first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            id,
            first: first.into(),
            last: last.into(),
            deleted: false,
        }
    }

    /// Returns true once the engine has logically deleted this slot.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

// ============================================================================
// QUERY RESULTS
// ============================================================================

/// Result of a point lookup together with the comparisons it cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// The live record with the requested id, if any.
    pub record: Option<&'a Record>,
    /// Comparisons made by the id tree for this lookup.
    pub comparisons: u64,
}

impl<'a> Lookup<'a> {
    /// Returns true if the lookup found a record.
    pub fn is_found(&self) -> bool {
        self.record.is_some()
    }
}

/// Result of a range or prefix scan together with the comparisons it cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scan<'a> {
    /// Matching live records in result order.
    pub records: Vec<&'a Record>,
    /// Comparisons made by the queried tree for this scan.
    pub comparisons: u64,
}

impl<'a> Scan<'a> {
    /// Ids of the returned records, in result order.
    pub fn ids(&self) -> Vec<i32> {
        self.records.iter().map(|record| record.id).collect()
    }

    /// Number of matching records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the scan matched nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

//! In-memory record store indexed by binary search trees.
//!
//! This crate provides [`Bst`], an unbalanced binary search tree that counts
//! every key comparison it makes, and [`IndexEngine`], a small record store
//! built on two of them: an exact index from student id to row id and a
//! non-unique index from lowercase last name to row ids.
//!
//! Records live in an append-only [`RecordHeap`]. Deletion is logical: the
//! slot is flagged and dropped from both indexes, but never removed.
//!
//! # Examples
//!
//! ```
//! use bstindex::{IndexEngine, Record};
//!
//! let mut engine = IndexEngine::new();
//! for (id, last) in [(10, "Lee"), (5, "Kim"), (15, "Lee"), (3, "Oh"), (7, "Kim")] {
//!     engine.insert(Record::new(id, "", last));
//! }
//!
//! let scan = engine.range_by_id(5, 15);
//! assert_eq!(scan.ids(), vec![5, 7, 10, 15]);
//!
//! let scan = engine.prefix_by_last("k");
//! assert_eq!(scan.ids(), vec![5, 7]);
//!
//! assert!(engine.delete_by_id(10));
//! assert_eq!(engine.range_by_id(5, 15).ids(), vec![5, 7, 15]);
//! ```

mod construction;
mod delete_operations;
mod engine;
mod error;
mod get_operations;
mod heap;
mod insert_operations;
mod iteration;
mod metrics;
mod range_queries;
mod types;
mod validation;

pub use construction::{CaseFolding, EngineConfig};
pub use engine::IndexEngine;
pub use error::{IndexError, IndexResult, IndexResultExt, InitResult, KeyResult};
pub use heap::RecordHeap;
pub use iteration::{Iter, Keys, Values};
pub use types::{
    Bst, Lookup, Record, Rid, Scan, ASCII_PREFIX_SENTINEL, DEFAULT_PREFIX_SENTINEL,
};

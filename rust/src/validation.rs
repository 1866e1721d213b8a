//! Validation and debugging utilities.
//!
//! Tree checks confirm strict in-order key ordering and the stored length.
//! Engine checks confirm that the heap and both indexes describe the same set
//! of live records. None of these walks touch the comparison counters.

use tracing::warn;

use crate::engine::IndexEngine;
use crate::error::{IndexError, IndexResult, IndexResultExt};
use crate::types::Bst;

// ============================================================================
// TREE VALIDATION
// ============================================================================

impl<K: Ord, V> Bst<K, V> {
    /// Check if the tree maintains BST invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    pub fn check_invariants_detailed(&self) -> IndexResult<()> {
        let mut seen = 0usize;
        let mut previous: Option<&K> = None;

        for (key, _) in self.iter() {
            if previous.is_some_and(|prev| prev >= key) {
                return Err(IndexError::corrupted(
                    "tree",
                    &format!("keys out of order at in-order position {}", seen),
                ));
            }
            previous = Some(key);
            seen += 1;
        }

        if seen != self.len {
            return Err(IndexError::corrupted(
                "tree",
                &format!("{} nodes reachable but len is {}", seen, self.len),
            ));
        }
        Ok(())
    }
}

// ============================================================================
// ENGINE VALIDATION
// ============================================================================

impl IndexEngine {
    /// Check that the heap and both indexes agree.
    ///
    /// - every id entry points at a live slot carrying that id
    /// - there is one id entry per live slot
    /// - every name bucket is non-empty and only holds live slots whose folded
    ///   last name equals the bucket key
    /// - the buckets together hold one rid per live slot
    pub fn check_consistency(&self) -> IndexResult<()> {
        let result = self.check_consistency_inner();
        if let Err(e) = &result {
            warn!(error = %e, "index consistency check failed");
        }
        result
    }

    fn check_consistency_inner(&self) -> IndexResult<()> {
        self.id_index
            .check_invariants_detailed()
            .with_context("id index")?;
        self.last_index
            .check_invariants_detailed()
            .with_context("name index")?;

        let live = self.heap.live_count();

        for (&id, &rid) in self.id_index.iter() {
            let record = self.heap.try_get(rid)?;
            if record.deleted {
                return Err(IndexError::corrupted(
                    "id index",
                    &format!("id {} points at deleted rid {}", id, rid),
                ));
            }
            if record.id != id {
                return Err(IndexError::corrupted(
                    "id index",
                    &format!("id {} points at rid {} holding id {}", id, rid, record.id),
                ));
            }
        }
        if self.id_index.len() != live {
            return Err(IndexError::corrupted(
                "id index",
                &format!("{} entries for {} live records", self.id_index.len(), live),
            ));
        }

        let mut bucketed = 0usize;
        for (name, rids) in self.last_index.iter() {
            if rids.is_empty() {
                return Err(IndexError::corrupted(
                    "name index",
                    &format!("empty bucket for {:?}", name),
                ));
            }
            for &rid in rids {
                let record = self.heap.try_get(rid)?;
                if record.deleted {
                    return Err(IndexError::corrupted(
                        "name index",
                        &format!("bucket {:?} holds deleted rid {}", name, rid),
                    ));
                }
                if self.name_key(&record.last) != *name {
                    return Err(IndexError::corrupted(
                        "name index",
                        &format!("rid {} ({:?}) filed under {:?}", rid, record.last, name),
                    ));
                }
            }
            bucketed += rids.len();
        }
        if bucketed != live {
            return Err(IndexError::corrupted(
                "name index",
                &format!("{} rids for {} live records", bucketed, live),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Record;

    fn engine() -> IndexEngine {
        let mut engine = IndexEngine::new();
        engine.insert(Record::new(2, "A", "Lee"));
        engine.insert(Record::new(1, "B", "lee"));
        engine.insert(Record::new(3, "C", "Oh"));
        engine
    }

    #[test]
    fn test_consistent_after_writes() {
        let mut engine = engine();
        assert!(engine.check_consistency().is_ok());
        engine.delete_by_id(1);
        engine.delete_by_id(3);
        assert!(engine.check_consistency().is_ok());
    }

    #[test]
    fn test_detects_deleted_slot_still_indexed() {
        let mut engine = engine();
        engine.heap.mark_deleted(0);
        let err = engine.check_consistency().unwrap_err();
        assert!(err.is_corruption());
        assert!(err.to_string().contains("deleted rid 0"));
    }

    #[test]
    fn test_detects_misfiled_rid() {
        let mut engine = engine();
        engine.last_index.insert("kim".to_string(), vec![2]);
        let err = engine.check_consistency().unwrap_err();
        assert!(err.to_string().contains("filed under"));
    }

    #[test]
    fn test_detects_empty_bucket() {
        let mut engine = engine();
        engine.last_index.insert("oh".to_string(), Vec::new());
        assert!(engine.check_consistency().is_err());
    }

    #[test]
    fn test_detects_len_mismatch() {
        let mut tree = Bst::new();
        tree.insert(1, ());
        tree.len = 2;
        assert!(!tree.check_invariants());
    }
}

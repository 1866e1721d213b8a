//! The indexing engine.
//!
//! [`IndexEngine`] keeps three structures in step: the append-only
//! [`RecordHeap`], an id index (`id -> rid`) and a last-name index
//! (`folded last name -> rids`). Every write touches all three before it
//! returns. Queries reset the counter of the tree they walk and report how
//! many key comparisons the walk made.

use tracing::{debug, trace, warn};

use crate::construction::EngineConfig;
use crate::error::{IndexError, KeyResult};
use crate::heap::RecordHeap;
use crate::types::{Bst, Lookup, Record, Rid, Scan};

/// In-memory record store with an exact id index and a last-name index.
///
/// # Examples
///
/// ```
/// use bstindex::{IndexEngine, Record};
///
/// let mut engine = IndexEngine::new();
/// engine.insert(Record::new(10, "Ana", "Lee"));
/// engine.insert(Record::new(5, "Min", "Kim"));
/// engine.insert(Record::new(15, "Joon", "Lee"));
///
/// let found = engine.find_by_id(5);
/// assert_eq!(found.record.map(|r| r.last.as_str()), Some("Kim"));
/// assert_eq!(found.comparisons, 2);
///
/// assert_eq!(engine.range_by_id(5, 10).ids(), vec![5, 10]);
/// assert_eq!(engine.prefix_by_last("LE").ids(), vec![10, 15]);
///
/// assert!(engine.delete_by_id(10));
/// assert!(engine.find_by_id(10).record.is_none());
/// ```
#[derive(Debug)]
pub struct IndexEngine {
    pub(crate) heap: RecordHeap,
    pub(crate) id_index: Bst<i32, Rid>,
    pub(crate) last_index: Bst<String, Vec<Rid>>,
    pub(crate) config: EngineConfig,
}

impl IndexEngine {
    // ============================================================================
    // WRITES
    // ============================================================================

    /// Insert a record and index it under its id and folded last name.
    ///
    /// If the id is already indexed nothing changes and the existing id is
    /// returned; the incoming record is discarded.
    pub fn insert(&mut self, mut record: Record) -> i32 {
        let id = record.id;
        if self.id_index.contains_key(&id) {
            debug!(id, "duplicate id, insert ignored");
            return id;
        }

        let name_key = self.name_key(&record.last);
        record.deleted = false;
        let rid = self.heap.append(record);
        self.id_index.insert(id, rid);
        debug!(id, rid, name = %name_key, "inserted record");
        self.last_index
            .get_or_insert_with(name_key, Vec::new)
            .push(rid);
        id
    }

    /// Insert every record in order, returning the id reported for each.
    pub fn insert_all<I>(&mut self, records: I) -> Vec<i32>
    where
        I: IntoIterator<Item = Record>,
    {
        records
            .into_iter()
            .map(|record| self.insert(record))
            .collect()
    }

    /// Logically delete the record with `id`.
    ///
    /// Returns false if no live record has that id. On success the slot stays
    /// in the heap flagged as deleted, its rid is dropped from its name
    /// bucket (the bucket key goes away with its last rid) and the id leaves
    /// the id index.
    pub fn delete_by_id(&mut self, id: i32) -> bool {
        let Some(&rid) = self.id_index.find(&id) else {
            debug!(id, "delete of unknown id");
            return false;
        };

        // The bucket key comes from the stored slot, not from the caller.
        let Some(name_key) = self.heap.get(rid).map(|record| self.name_key(&record.last)) else {
            warn!(id, rid, "id index points past the heap");
            return false;
        };

        self.remove_from_last_index(&name_key, rid);
        self.heap.mark_deleted(rid);
        self.id_index.erase(&id);
        debug!(id, rid, name = %name_key, "deleted record");
        true
    }

    fn remove_from_last_index(&mut self, name_key: &str, rid: Rid) {
        let key = name_key.to_string();
        let Some(rids) = self.last_index.find_mut(&key) else {
            warn!(rid, name = %name_key, "name bucket missing for live record");
            return;
        };

        rids.retain(|&other| other != rid);
        if rids.is_empty() {
            self.last_index.erase(&key);
            trace!(name = %name_key, "name bucket removed");
        }
    }

    // ============================================================================
    // QUERIES
    // ============================================================================

    /// Look up a live record by id and report the comparisons made.
    pub fn find_by_id(&self, id: i32) -> Lookup<'_> {
        self.id_index.reset_metrics();
        let record = self
            .id_index
            .find(&id)
            .and_then(|&rid| self.heap.get(rid));
        let comparisons = self.id_index.comparisons();

        trace!(id, found = record.is_some(), comparisons, "find_by_id");
        Lookup {
            record,
            comparisons,
        }
    }

    /// Like [`find_by_id`](Self::find_by_id), reporting a miss as
    /// [`IndexError::KeyNotFound`].
    pub fn try_find_by_id(&self, id: i32) -> KeyResult<&Record> {
        self.find_by_id(id)
            .record
            .ok_or(IndexError::KeyNotFound(id))
    }

    /// Live records with `lo <= id <= hi` in ascending id order.
    ///
    /// The count covers every node the walk reached, including ones whose
    /// slot turned out to be deleted. `lo > hi` yields no records.
    pub fn range_by_id(&self, lo: i32, hi: i32) -> Scan<'_> {
        self.id_index.reset_metrics();

        let mut records = Vec::new();
        self.id_index.range_apply_bounds(lo..=hi, |_, &rid| {
            if let Some(record) = self.live_record(rid) {
                records.push(record);
            }
        });
        let comparisons = self.id_index.comparisons();

        trace!(lo, hi, rows = records.len(), comparisons, "range_by_id");
        Scan {
            records,
            comparisons,
        }
    }

    /// Live records whose folded last name starts with the folded `prefix`.
    ///
    /// Results are grouped by name in ascending order; inside a name they keep
    /// insertion order. An empty prefix matches every name.
    pub fn prefix_by_last(&self, prefix: &str) -> Scan<'_> {
        let lo = self.name_key(prefix);
        let mut hi = lo.clone();
        hi.push(self.config.prefix_sentinel);

        self.last_index.reset_metrics();

        let mut records = Vec::new();
        self.last_index.range_apply(&lo, &hi, |_, rids| {
            records.extend(rids.iter().filter_map(|&rid| self.live_record(rid)));
        });
        let comparisons = self.last_index.comparisons();

        trace!(prefix = %lo, rows = records.len(), comparisons, "prefix_by_last");
        Scan {
            records,
            comparisons,
        }
    }

    fn live_record(&self, rid: Rid) -> Option<&Record> {
        self.heap.get(rid).filter(|record| !record.deleted)
    }

    // ============================================================================
    // ACCESSORS
    // ============================================================================

    /// Folded form of a last name, as stored in the name index.
    pub fn name_key(&self, last: &str) -> String {
        self.config.case_folding.fold(last)
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.id_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.id_index.is_empty()
    }

    /// Number of heap slots, deleted ones included.
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Slot at `rid`, deleted or not.
    pub fn record(&self, rid: Rid) -> Option<&Record> {
        self.heap.get(rid)
    }

    pub fn heap(&self) -> &RecordHeap {
        &self.heap
    }

    pub fn id_index(&self) -> &Bst<i32, Rid> {
        &self.id_index
    }

    pub fn last_index(&self) -> &Bst<String, Vec<Rid>> {
        &self.last_index
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

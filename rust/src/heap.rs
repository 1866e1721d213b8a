//! Append-only record storage.
//!
//! A slot's position is its row id for the life of the store. Slots are never
//! removed, reused or compacted; deletion only flips the slot's flag.

use crate::error::{IndexError, IndexResult};
use crate::types::{Record, Rid};

/// Append-only sequence of record slots.
#[derive(Debug, Default, Clone)]
pub struct RecordHeap {
    slots: Vec<Record>,
}

impl RecordHeap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` in a new slot and return its row id.
    pub fn append(&mut self, record: Record) -> Rid {
        self.slots.push(record);
        self.slots.len() - 1
    }

    /// Direct slot access. Not a search and not counted.
    pub fn get(&self, rid: Rid) -> Option<&Record> {
        self.slots.get(rid)
    }

    /// Like [`get`](Self::get), reporting an out-of-range rid as an error.
    pub fn try_get(&self, rid: Rid) -> IndexResult<&Record> {
        self.slots.get(rid).ok_or(IndexError::RidOutOfBounds {
            rid,
            len: self.slots.len(),
        })
    }

    /// Returns true if `rid` names a slot that has not been deleted.
    pub fn is_live(&self, rid: Rid) -> bool {
        self.get(rid).is_some_and(|record| !record.deleted)
    }

    /// Flag the slot as deleted. Returns false if it was missing or already
    /// deleted.
    pub(crate) fn mark_deleted(&mut self, rid: Rid) -> bool {
        match self.slots.get_mut(rid) {
            Some(record) if !record.deleted => {
                record.deleted = true;
                true
            }
            _ => false,
        }
    }

    /// Number of slots, deleted ones included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots that are not deleted.
    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|record| !record.deleted).count()
    }

    /// Every slot with its row id, deleted ones included.
    pub fn iter(&self) -> impl Iterator<Item = (Rid, &Record)> + '_ {
        self.slots.iter().enumerate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_assigns_sequential_rids() {
        let mut heap = RecordHeap::new();
        assert_eq!(heap.append(Record::new(10, "Ann", "Lee")), 0);
        assert_eq!(heap.append(Record::new(5, "Bo", "Kim")), 1);
        assert_eq!(heap.get(1).map(|r| r.id), Some(5));
        assert_eq!(heap.len(), 2);
    }

    #[test]
    fn test_mark_deleted_keeps_slot() {
        let mut heap = RecordHeap::new();
        let rid = heap.append(Record::new(1, "Cy", "Oh"));
        assert!(heap.mark_deleted(rid));
        assert!(!heap.mark_deleted(rid));
        assert!(!heap.is_live(rid));
        assert_eq!(heap.len(), 1);
        assert_eq!(heap.live_count(), 0);
        assert!(heap.get(rid).unwrap().is_deleted());
    }

    #[test]
    fn test_try_get_out_of_bounds() {
        let heap = RecordHeap::new();
        assert_eq!(
            heap.try_get(3),
            Err(IndexError::RidOutOfBounds { rid: 3, len: 0 })
        );
        assert!(!heap.is_live(3));
    }
}

//! Ordered in-memory image collection, newest record first.

pub mod record;

use crate::store::record::ImageRecord;
use uuid::Uuid;

/// The gallery's only storage. Owned by `AppState` behind a lock; nothing
/// here is shared across instances and a process restart empties it.
#[derive(Debug, Default)]
pub struct ImageStore {
    records: Vec<ImageRecord>,
}

impl ImageStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the collection, newest-first. Callers get a defensive
    /// copy and cannot reach the store's internals through it.
    pub fn list(&self) -> Vec<ImageRecord> {
        self.records.clone()
    }

    /// Head insertion keeps the newest-first ordering. No capacity limit;
    /// unbounded growth is an accepted limitation.
    pub fn insert_front(&mut self, record: ImageRecord) {
        self.records.insert(0, record);
    }

    /// Removes and returns the record with the given id, if present.
    pub fn remove_by_id(&mut self, id: &Uuid) -> Option<ImageRecord> {
        let idx = self.records.iter().position(|r| r.id == *id)?;
        Some(self.records.remove(idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

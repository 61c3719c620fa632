//! The record the user picked for the detail panel.

use super::store::RecordStore;
use crate::domain::Record;

/// At most one selected record, tracked by identifier.
///
/// Filtering or sorting the record out of view does not clear it; the detail
/// panel keeps showing it until another record is picked or the collection is
/// reloaded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    id: Option<u32>,
}

impl Selection {
    /// Replaces the selection unconditionally.
    pub fn select(&mut self, record: &Record) {
        tracing::debug!(id = record.id, name = %record.name, "record selected");
        self.id = Some(record.id);
    }

    /// The selected record, resolved against `store`.
    #[must_use]
    pub fn current<'a>(&self, store: &'a RecordStore) -> Option<&'a Record> {
        self.id.and_then(|id| store.get(id))
    }

    pub fn clear(&mut self) {
        self.id = None;
    }

    #[must_use]
    pub fn is_selected(&self, id: u32) -> bool {
        self.id == Some(id)
    }

    #[must_use]
    pub const fn id(&self) -> Option<u32> {
        self.id
    }
}

//! The loaded record collection and its load status.
//!
//! The store is the only place records live after a load. Every derived view
//! (filtered, sorted) is recomputed from it, never from a previous view, so a
//! filter that was loosened brings back records an earlier filter hid.

use crate::domain::Record;

/// Progress of the current (or last) collection load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// No load has been requested yet (waiting for permissions).
    #[default]
    Idle,

    /// A fetch is in flight. No second fetch is issued until it settles.
    Loading,

    /// The store holds the last successful load.
    Ready,

    /// The last load failed; the message is shown in place of the list.
    Failed(String),
}

/// Ordered collection of every record from the last successful load.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Record>,
    status: LoadStatus,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties the store and marks a load as in flight.
    pub fn begin_loading(&mut self) {
        self.records.clear();
        self.status = LoadStatus::Loading;
    }

    /// Replaces the whole collection with a completed load, in source order.
    pub fn replace(&mut self, records: Vec<Record>) {
        tracing::debug!(record_count = records.len(), "record store replaced");
        self.records = records;
        self.status = LoadStatus::Ready;
    }

    /// Records a failed load. A failed load never leaves stale records behind.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, "collection load failed");
        self.records.clear();
        self.status = LoadStatus::Failed(message);
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Looks a record up by identifier.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub const fn status(&self) -> &LoadStatus {
        &self.status
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_load_empties_store() {
        let mut store = RecordStore::new();
        store.replace(vec![Record::new(1, "Bulbasaur", "Grass")]);
        assert_eq!(store.status(), &LoadStatus::Ready);

        store.fail("HTTP error! Status: 500");
        assert!(store.is_empty());
        assert_eq!(
            store.status(),
            &LoadStatus::Failed("HTTP error! Status: 500".to_string())
        );
    }

    #[test]
    fn get_finds_by_identifier() {
        let mut store = RecordStore::new();
        store.replace(vec![
            Record::new(1, "Bulbasaur", "Grass"),
            Record::new(4, "Charmander", "Fire"),
        ]);
        assert_eq!(store.get(4).map(|r| r.name.as_str()), Some("Charmander"));
        assert!(store.get(2).is_none());
    }

    #[test]
    fn begin_loading_clears_records() {
        let mut store = RecordStore::new();
        store.replace(vec![Record::new(1, "Bulbasaur", "Grass")]);
        store.begin_loading();
        assert!(store.is_loading());
        assert_eq!(store.len(), 0);
    }
}

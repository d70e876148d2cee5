//! The record store.
//!
//! # Responsibility
//! - Seed the collection at startup from the durable slot, the bundled seed
//!   dataset, or nothing, in that order.
//! - Apply the two mutations (add, update-by-id) and persist after each.
//!
//! # Invariants
//! - `initialize` always yields a store; malformed persisted text is treated
//!   as absence, never surfaced.
//! - Persistence is whole-collection write-through: no diffing, no batching.
//! - `update_record` persists even when the id was not found.

use log::{debug, warn};

use crate::idgen::IdGenerator;
use crate::model::record::{LoanRecord, RecordCollection, RecordId};
use crate::storage::StoragePort;

/// Owner of the record collection, generic over its two injected seams.
pub struct RecordStore<S: StoragePort, G: IdGenerator> {
    storage: S,
    ids: G,
    records: RecordCollection,
}

impl<S: StoragePort, G: IdGenerator> RecordStore<S, G> {
    /// Builds a store from the durable slot, falling back to `seed` and then
    /// to an empty collection. Never fails outward.
    pub fn initialize(storage: S, ids: G, seed: Option<RecordCollection>) -> Self {
        let records = match storage.load() {
            Ok(Some(text)) => match serde_json::from_str::<RecordCollection>(&text) {
                Ok(collection) => {
                    debug!(
                        "event=store_init source=storage records={}",
                        collection.len()
                    );
                    collection
                }
                Err(err) => {
                    warn!("event=store_init status=unparseable_slot error={err}");
                    seed.unwrap_or_default()
                }
            },
            Ok(None) => {
                debug!("event=store_init source=seed slot=absent");
                seed.unwrap_or_default()
            }
            Err(err) => {
                warn!("event=store_init status=load_failed error={err}");
                seed.unwrap_or_default()
            }
        };

        Self {
            storage,
            ids,
            records,
        }
    }

    /// Current collection, in display order.
    pub fn records(&self) -> &RecordCollection {
        &self.records
    }

    /// Adds a record from raw form input.
    ///
    /// # Contract
    /// - No-op returning `None` when the trimmed name is empty or the amount
    ///   text does not parse as an integer (empty included). No error is
    ///   surfaced and nothing is persisted.
    /// - On success appends `{fresh id, name, amount, today}` at the end of
    ///   the display order, persists, and returns the new id.
    pub fn add_record(&mut self, name: &str, amount_text: &str) -> Option<RecordId> {
        if name.trim().is_empty() {
            return None;
        }
        let amount: i64 = amount_text.trim().parse().ok()?;

        let id = self.ids.next_id();
        let date = chrono::Local::now().date_naive().to_string();
        self.records
            .push(LoanRecord::new(id, name, amount, date));
        debug!("event=record_added id={id} records={}", self.records.len());
        self.persist();
        Some(id)
    }

    /// Replaces the record matching `edited.id` in place, preserving order.
    ///
    /// An unknown id leaves the collection unchanged. Persists
    /// unconditionally and returns the edited record as confirmation.
    pub fn update_record(&mut self, edited: LoanRecord) -> LoanRecord {
        if !self.records.replace(&edited) {
            debug!("event=record_update status=unknown_id id={}", edited.id);
        }
        self.persist();
        edited
    }

    /// Serializes the full collection and writes it through the port.
    ///
    /// Best-effort: a port failure is logged and swallowed, the in-memory
    /// collection stays authoritative.
    pub fn persist(&mut self) {
        match serde_json::to_string(&self.records) {
            Ok(text) => {
                if let Err(err) = self.storage.save(&text) {
                    warn!("event=persist status=save_failed error={err}");
                }
            }
            Err(err) => warn!("event=persist status=serialize_failed error={err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecordStore;
    use crate::idgen::SequenceIdGenerator;
    use crate::model::record::RecordCollection;
    use crate::storage::{MemoryStorage, StoragePort, StorageResult};

    struct FailingStorage;

    impl StoragePort for FailingStorage {
        fn load(&self) -> StorageResult<Option<String>> {
            Err(std::io::Error::other("slot offline").into())
        }

        fn save(&mut self, _text: &str) -> StorageResult<()> {
            Err(std::io::Error::other("slot offline").into())
        }
    }

    #[test]
    fn unavailable_storage_never_panics() {
        let mut store = RecordStore::initialize(
            FailingStorage,
            SequenceIdGenerator::starting_at(1),
            None,
        );
        assert!(store.records().is_empty());

        let id = store.add_record("Asha", "5000");
        assert_eq!(id, Some(1));
        assert_eq!(store.records().len(), 1);
    }

    #[test]
    fn load_failure_falls_back_to_seed() {
        let seed = RecordCollection::from_records(vec![crate::model::record::LoanRecord::new(
            7,
            "Seeded",
            100,
            "2026-01-01",
        )]);
        let store = RecordStore::initialize(
            FailingStorage,
            SequenceIdGenerator::starting_at(1),
            Some(seed.clone()),
        );
        assert_eq!(store.records(), &seed);
    }

    #[test]
    fn persist_writes_whole_collection_every_time() {
        let mut store = RecordStore::initialize(
            MemoryStorage::new(),
            SequenceIdGenerator::starting_at(1),
            None,
        );
        store.add_record("Asha", "5000");
        store.add_record("Ravi", "1000");

        let text = store.storage.contents().unwrap().to_string();
        assert!(text.starts_with('['));
        assert!(text.contains("Asha"));
        assert!(text.contains("Ravi"));
    }
}

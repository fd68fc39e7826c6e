//! In-memory record store.

use parking_lot::RwLock;

use record_shop_core::RecordId;

use super::{RecordStore, StoreError, seed};
use crate::models::{Record, RecordFields};

/// Records and the ID counter live under one lock so that assigning an ID
/// and appending the record happen together.
#[derive(Debug)]
struct Inventory {
    records: Vec<Record>,
    /// `None` once `i32::MAX` has been handed out.
    next_id: Option<RecordId>,
}

/// A [`RecordStore`] that keeps everything in process memory.
///
/// Nothing survives a restart.
#[derive(Debug)]
pub struct MemoryRecordStore {
    inner: RwLock<Inventory>,
}

impl MemoryRecordStore {
    /// An empty store whose first record gets ID 1.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// A store preloaded with the shop's starting inventory.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_records(seed::records())
    }

    /// A store preloaded with `records`.
    ///
    /// The next ID is one past the highest ID given, or 1 if there are none.
    /// If the highest ID is `i32::MAX`, creates fail with
    /// [`StoreError::IdsExhausted`].
    #[must_use]
    pub fn with_records(records: Vec<Record>) -> Self {
        let next_id = records
            .iter()
            .map(|record| record.id)
            .max()
            .map_or(Some(RecordId::new(1)), RecordId::next);

        Self {
            inner: RwLock::new(Inventory { records, next_id }),
        }
    }
}

impl Default for MemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for MemoryRecordStore {
    fn list(&self) -> Vec<Record> {
        self.inner.read().records.clone()
    }

    fn get(&self, id: RecordId) -> Result<Record, StoreError> {
        self.inner
            .read()
            .records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn create(&self, fields: RecordFields) -> Result<Record, StoreError> {
        let mut inventory = self.inner.write();
        let id = inventory.next_id.ok_or(StoreError::IdsExhausted)?;
        inventory.next_id = id.next();

        let record = Record::new(id, fields);
        inventory.records.push(record.clone());
        Ok(record)
    }

    fn update(&self, id: RecordId, fields: RecordFields) -> Result<Record, StoreError> {
        let mut inventory = self.inner.write();
        let record = inventory
            .records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        record.fields = fields;
        Ok(record.clone())
    }

    fn delete(&self, id: RecordId) -> Result<Record, StoreError> {
        let mut inventory = self.inner.write();
        let index = inventory
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        Ok(inventory.records.remove(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use record_shop_core::Price;

    use super::*;

    fn fields(title: &str) -> RecordFields {
        RecordFields {
            title: title.to_string(),
            artist: "Artist".to_string(),
            format: "CD".to_string(),
            genre: "Pop".to_string(),
            release_year: 2000,
            price: Price::from_cents(1000),
            stock_qty: 1,
            customer_id: String::new(),
            customer_first_name: String::new(),
            customer_last_name: String::new(),
            customer_contact: String::new(),
            customer_email: String::new(),
        }
    }

    #[test]
    fn test_empty_store_starts_at_one() {
        let store = MemoryRecordStore::new();
        assert!(store.list().is_empty());
        assert_eq!(store.create(fields("First")).unwrap().id, RecordId::new(1));
    }

    #[test]
    fn test_seeded_store_continues_at_seven() {
        let store = MemoryRecordStore::seeded();
        assert_eq!(store.list().len(), 6);
        assert_eq!(store.create(fields("New")).unwrap().id, RecordId::new(7));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let store = MemoryRecordStore::new();
        for title in ["A", "B", "C"] {
            store.create(fields(title)).unwrap();
        }
        let titles: Vec<_> = store.list().into_iter().map(|r| r.fields.title).collect();
        assert_eq!(titles, ["A", "B", "C"]);
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let store = MemoryRecordStore::new();
        let first = store.create(fields("A")).unwrap();
        let second = store.create(fields("B")).unwrap();
        store.delete(second.id).unwrap();
        store.delete(first.id).unwrap();

        let third = store.create(fields("C")).unwrap();
        assert!(third.id > second.id);
        assert_eq!(third.id, RecordId::new(3));
    }

    #[test]
    fn test_create_after_max_id_is_exhausted() {
        let top = Record::new(RecordId::new(i32::MAX), fields("Last"));
        let store = MemoryRecordStore::with_records(vec![top]);

        assert_eq!(
            store.create(fields("Overflow")),
            Err(StoreError::IdsExhausted)
        );
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_create_up_to_max_id() {
        let below = Record::new(RecordId::new(i32::MAX - 1), fields("Almost"));
        let store = MemoryRecordStore::with_records(vec![below]);

        let last = store.create(fields("Last")).unwrap();
        assert_eq!(last.id, RecordId::new(i32::MAX));
        assert_eq!(store.create(fields("Next")), Err(StoreError::IdsExhausted));
    }

    #[test]
    fn test_get_after_delete_is_not_found() {
        let store = MemoryRecordStore::seeded();
        let removed = store.delete(RecordId::new(3)).unwrap();
        assert_eq!(removed.fields.title, "Audioslave");
        assert_eq!(
            store.get(RecordId::new(3)),
            Err(StoreError::NotFound(RecordId::new(3)))
        );
        assert_eq!(
            store.delete(RecordId::new(3)),
            Err(StoreError::NotFound(RecordId::new(3)))
        );
    }

    #[test]
    fn test_update_keeps_id_and_replaces_fields() {
        let store = MemoryRecordStore::seeded();
        let mut replacement = fields("Renamed");
        replacement.customer_id = "1A".to_string();

        let updated = store.update(RecordId::new(2), replacement.clone()).unwrap();
        assert_eq!(updated.id, RecordId::new(2));
        assert_eq!(updated.fields, replacement);
        assert_eq!(store.get(RecordId::new(2)).unwrap(), updated);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let store = MemoryRecordStore::new();
        assert_eq!(
            store.update(RecordId::new(999), fields("X")),
            Err(StoreError::NotFound(RecordId::new(999)))
        );
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(MemoryRecordStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create(fields("Concurrent")).unwrap().id)
            })
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }

    #[test]
    fn test_concurrent_deletes_of_same_id() {
        let store = Arc::new(MemoryRecordStore::seeded());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.delete(RecordId::new(1)).is_ok())
            })
            .collect();

        let successes = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|ok| *ok)
            .count();
        assert_eq!(successes, 1);
    }
}

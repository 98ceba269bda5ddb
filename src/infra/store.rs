//! Persisted collection store: one named JSON array kept in memory and
//! rewritten in full after every mutation.

use tracing::warn;

use crate::domain::ListEntry;
use crate::util::{generate_id, persistence::Storage};

/// Owns one screen's ordered collection and keeps it synchronized with its
/// storage key. Storage failures are recovered locally: reads fall back to
/// an empty collection, writes are logged and never rolled back, so memory
/// can run ahead of disk until the next successful write.
pub struct ListStore<T: ListEntry> {
    storage: Storage,
    key: String,
    entries: Vec<T>,
}

impl<T: ListEntry> ListStore<T> {
    /// Opens the collection stored under `key`, hydrating from disk.
    ///
    /// A missing key yields an empty collection. Unreadable or corrupt data
    /// also yields an empty collection; the stored value is replaced by the
    /// next successful mutation.
    pub fn open(storage: Storage, key: impl Into<String>) -> Self {
        let key = key.into();
        let entries = match storage.read(&key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!(key = %key, %err, "stored collection is corrupt, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(key = %key, %err, "failed to read stored collection, starting empty");
                Vec::new()
            }
        };
        Self {
            storage,
            key,
            entries,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Insertion-ordered view of the collection.
    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    /// Stamps a fresh unique id on `draft`, appends it, and persists.
    pub fn add(&mut self, draft: T) -> T {
        let entry = draft.with_id(generate_id(&self.key));
        self.entries.push(entry.clone());
        self.persist();
        entry
    }

    /// Applies `patch` to the entry with `id` in place, keeping its
    /// position, then persists. Unknown ids are a silent no-op.
    pub fn update(&mut self, id: &str, patch: impl FnOnce(&mut T)) -> Option<T> {
        let entry = self.entries.iter_mut().find(|entry| entry.id() == id)?;
        patch(entry);
        let updated = entry.clone();
        self.persist();
        Some(updated)
    }

    /// Removes the entry with `id` and persists the remainder. Idempotent.
    pub fn delete(&mut self, id: &str) {
        self.entries.retain(|entry| entry.id() != id);
        self.persist();
    }

    /// Pure recomputation over the full collection.
    pub fn derive<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        f(&self.entries)
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(err) => {
                warn!(key = %self.key, %err, "failed to serialize collection");
                return;
            }
        };
        if let Err(err) = self.storage.write(&self.key, &json) {
            warn!(key = %self.key, %err, "failed to persist collection");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::domain::{Destination, Expense};

    fn store(dir: &tempfile::TempDir, key: &str) -> ListStore<Destination> {
        ListStore::open(Storage::with_root(dir.path()), key)
    }

    #[test]
    fn missing_key_opens_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store(&dir, "destinations").entries().is_empty());
    }

    #[test]
    fn add_assigns_unique_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir, "destinations");
        for name in ["Rome", "Florence", "Venice"] {
            store.add(Destination::draft(name));
        }
        let ids: HashSet<_> = store.entries().iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        assert!(store.entries().iter().all(|d| !d.id.is_empty()));
    }

    #[test]
    fn update_patches_in_place_and_keeps_position() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir, "destinations");
        store.add(Destination::draft("Rome"));
        let second = store.add(Destination::draft("Florence"));
        store.add(Destination::draft("Venice"));

        let updated = store.update(&second.id, |d| d.name = "Siena".to_string());
        assert_eq!(updated.map(|d| d.name), Some("Siena".to_string()));

        let names: Vec<_> = store.entries().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Rome", "Siena", "Venice"]);
        assert_eq!(store.entries()[1].id, second.id);
    }

    #[test]
    fn update_of_unknown_id_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir, "destinations");
        store.add(Destination::draft("Rome"));
        let before = store.entries().to_vec();
        assert!(store.update("nope", |d| d.name.clear()).is_none());
        assert_eq!(store.entries(), before.as_slice());
    }

    #[test]
    fn delete_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store(&dir, "destinations");
        let rome = store.add(Destination::draft("Rome"));
        store.add(Destination::draft("Venice"));

        store.delete(&rome.id);
        let after_first = store.entries().to_vec();
        store.delete(&rome.id);
        assert_eq!(store.entries(), after_first.as_slice());
        assert_eq!(store.entries().len(), 1);
    }

    #[test]
    fn collection_round_trips_through_storage() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path());
        let mut store: ListStore<Expense> = ListStore::open(storage.clone(), "expenses");
        store.add(Expense::draft("Hotel", 500.0));
        store.add(Expense::draft("Food", 300.0));
        let written = store.entries().to_vec();

        let reloaded: ListStore<Expense> = ListStore::open(storage, "expenses");
        assert_eq!(reloaded.entries(), written.as_slice());
    }

    #[test]
    fn corrupt_data_falls_back_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::with_root(dir.path());
        storage.write("destinations", "not json at all").unwrap();

        let store: ListStore<Destination> = ListStore::open(storage, "destinations");
        assert!(store.entries().is_empty());
    }

    #[test]
    fn derive_recomputes_from_the_full_collection() {
        let dir = tempfile::tempdir().unwrap();
        let mut store: ListStore<Expense> =
            ListStore::open(Storage::with_root(dir.path()), "expenses");
        store.add(Expense::draft("Hotel", 500.0));
        store.add(Expense::draft("Food", 300.0));
        let total = store.derive(crate::domain::spent_total);
        assert_eq!(total, 800.0);
    }
}

use super::snapshot::BookSnapshot;
use super::traits::BookStore;
use crate::error::{StorageError, StorageResult};
use crate::models::AddressBook;
use std::sync::{Arc, Mutex};

/// In-memory store holding the last saved snapshot as JSON.
///
/// Going through the same serialized form as [`JsonFileStore`](super::JsonFileStore)
/// means a load returns an independent copy, never the saved book itself.
/// Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    saved: Arc<Mutex<Option<String>>>,
    save_count: Arc<Mutex<usize>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `save` has succeeded.
    pub fn save_count(&self) -> usize {
        // The counter is a plain integer, a poisoned guard still holds a valid value
        match self.save_count.lock() {
            Ok(count) => *count,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl BookStore for MemoryStore {
    fn load(&self) -> StorageResult<AddressBook> {
        let saved = self
            .saved
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?
            .clone();
        match saved {
            Some(json) => BookSnapshot::from_json(&json)?.restore(),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let json = BookSnapshot::capture(book).to_json()?;
        *self.saved.lock().map_err(|_| StorageError::LockPoisoned)? = Some(json);
        *self
            .save_count
            .lock()
            .map_err(|_| StorageError::LockPoisoned)? += 1;
        Ok(())
    }
}

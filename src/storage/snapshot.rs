//! On-disk shape of a saved address book.

use crate::error::{StorageError, StorageResult};
use crate::models::{AddressBook, Contact};
use serde::{Deserialize, Serialize};

/// Format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Versioned, ordered list of every contact in a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Format version
    pub version: u32,

    /// Contacts in book insertion order
    #[serde(default)]
    pub contacts: Vec<Contact>,
}

/// Just enough of a snapshot to check its version before the full parse.
#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

impl BookSnapshot {
    /// Capture the full state of `book`.
    pub fn capture(book: &AddressBook) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: book.iter().cloned().collect(),
        }
    }

    /// Parse snapshot JSON, rejecting unknown versions and invalid fields.
    pub fn from_json(json: &str) -> StorageResult<Self> {
        let probe: VersionProbe = serde_json::from_str(json)?;
        if probe.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion(probe.version));
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json(&self) -> StorageResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Rebuild the address book, enforcing name uniqueness.
    pub fn restore(self) -> StorageResult<AddressBook> {
        AddressBook::from_contacts(self.contacts)
            .map_err(|e| StorageError::Corrupt(format!("{}", e)))
    }
}

//! Whole-book persistence.
//!
//! The address book is saved and loaded as a single snapshot at process
//! boundaries. [`BookStore`] abstracts where the snapshot lives.

mod json_file_store;
mod memory_store;
mod snapshot;
mod traits;

pub use json_file_store::JsonFileStore;
pub use memory_store::MemoryStore;
pub use snapshot::{BookSnapshot, SNAPSHOT_VERSION};
pub use traits::BookStore;
